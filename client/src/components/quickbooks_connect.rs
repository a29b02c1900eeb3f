//! Simulated QuickBooks Online connection panel for the selected client.
//!
//! The handshake walks `ConnectionFlow` through its steps on a timer, then
//! applies `Intent::ConnectSelected`. Sync holds the progress card up for
//! `SYNC_DELAY_MS` before applying `Intent::SyncSelected`.

use leptos::prelude::*;

use crate::state::app::{AppState, Intent, dispatch};
use crate::state::clients::ConnectionStatus;
use crate::state::connect::{ConnectStep, ConnectionFlow, StepState};
use crate::util::clock::Timestamp;
use crate::util::format::time_ago;

const SYNCED_REPORTS: [&str; 4] = ["Profit & Loss Report", "Balance Sheet", "Cash Flow Statement", "Chart of Accounts"];

const SECURITY_NOTES: [&str; 4] = [
    "Access tokens are encrypted at rest using AES-256",
    "Automatic token refresh ensures uninterrupted access",
    "You can disconnect at any time to revoke access",
    "Read-only access, we never modify your QuickBooks data",
];

#[component]
pub fn QuickBooksConnect() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let flow = RwSignal::new(ConnectionFlow::default());

    let company = move || {
        app.with(|s| s.clients.selected().map_or_else(|| "No client selected".to_owned(), |c| c.company_name.clone()))
    };
    let status = move || {
        app.with(|s| s.clients.selected().map_or(ConnectionStatus::Disconnected, |c| c.connection_status))
    };
    let connected = move || status() == ConnectionStatus::Connected;
    let last_sync = move || {
        app.with(|s| time_ago(s.clients.selected().and_then(|c| c.last_sync.as_deref()), Timestamp::now()))
    };
    let connecting = move || flow.with(ConnectionFlow::connecting);
    let syncing = move || flow.with(|f| f.syncing);

    let on_connect = move |_| {
        let mut started = false;
        flow.update(|f| started = f.start());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(crate::state::connect::STEP_DELAY_MS).await;
                let mut finished = false;
                flow.update(|f| finished = f.advance());
                if finished {
                    break;
                }
            }
            dispatch(app, Intent::ConnectSelected);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            flow.set(ConnectionFlow::default());
            dispatch(app, Intent::ConnectSelected);
        }
    };

    let on_sync = move |_| {
        let mut started = false;
        flow.update(|f| started = f.start_sync());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::connect::SYNC_DELAY_MS).await;
            flow.update(ConnectionFlow::finish_sync);
            dispatch(app, Intent::SyncSelected);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            flow.update(ConnectionFlow::finish_sync);
            dispatch(app, Intent::SyncSelected);
        }
    };

    let on_disconnect = move |_| dispatch(app, Intent::DisconnectSelected);

    let heading = move || match status() {
        ConnectionStatus::Connected => "QuickBooks Connected",
        ConnectionStatus::Expired => "Connection Expired",
        ConnectionStatus::Disconnected | ConnectionStatus::Error => "Connect QuickBooks Online",
    };
    let blurb = move || match status() {
        ConnectionStatus::Connected => "Your QuickBooks Online account is linked and financial data is syncing.",
        ConnectionStatus::Expired => "Your connection has expired. Please reconnect to continue syncing data.",
        ConnectionStatus::Disconnected | ConnectionStatus::Error => {
            "Securely connect your QuickBooks Online account to start pulling financial data automatically."
        }
    };

    view! {
        <div class="qb-connect">
            <div class="qb-connect__header">
                <h1 class="qb-connect__title">"QuickBooks Connection"</h1>
                <p class="qb-connect__subtitle">{company}</p>
            </div>

            <section class="qb-connect__hero" class:qb-connect__hero--connected=connected>
                <span class="qb-connect__logo">"QB"</span>
                <h2 class="qb-connect__heading">{heading}</h2>
                <p class="qb-connect__blurb">{blurb}</p>
                <Show
                    when=connected
                    fallback=move || {
                        view! {
                            <button class="qb-connect__primary" on:click=on_connect disabled=connecting>
                                {move || if connecting() { "Connecting..." } else { "Connect to QuickBooks" }}
                            </button>
                        }
                    }
                >
                    <div class="qb-connect__actions">
                        <button class="qb-connect__primary" on:click=on_sync disabled=syncing>
                            {move || if syncing() { "Syncing Data..." } else { "Sync Now" }}
                        </button>
                        <button class="qb-connect__secondary" on:click=on_disconnect disabled=syncing>
                            "Disconnect"
                        </button>
                    </div>
                </Show>
            </section>

            <Show when=connecting>
                <section class="qb-connect__card">
                    <h3 class="qb-connect__card-title">"Connection Progress"</h3>
                    <ol class="qb-connect__steps">
                        {ConnectStep::PROGRESS
                            .into_iter()
                            .map(|row| {
                                let state = move || flow.with(|f| f.step_state(row));
                                view! {
                                    <li
                                        class="qb-connect__step"
                                        class:qb-connect__step--done={move || state() == StepState::Done}
                                        class:qb-connect__step--active={move || state() == StepState::Active}
                                    >
                                        <span class="qb-connect__step-marker">
                                            {move || match state() {
                                                StepState::Done => "✓",
                                                StepState::Active => "↻",
                                                StepState::Waiting => "○",
                                            }}
                                        </span>
                                        {row.label()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </section>
            </Show>

            <Show when=syncing>
                <section class="qb-connect__card">
                    <h3 class="qb-connect__card-title">"Syncing Financial Data"</h3>
                    <ul class="qb-connect__reports">
                        {SYNCED_REPORTS
                            .into_iter()
                            .map(|report| view! { <li class="qb-connect__report">{report}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </Show>

            <Show when=connected>
                <section class="qb-connect__card">
                    <h3 class="qb-connect__card-title">"Connection Details"</h3>
                    <dl class="qb-connect__details">
                        <div class="qb-connect__detail">
                            <dt>"Status"</dt>
                            <dd>"Active"</dd>
                        </div>
                        <div class="qb-connect__detail">
                            <dt>"Last Sync"</dt>
                            <dd>{last_sync}</dd>
                        </div>
                        <div class="qb-connect__detail">
                            <dt>"Auto-Refresh"</dt>
                            <dd>"Enabled"</dd>
                        </div>
                        <div class="qb-connect__detail">
                            <dt>"Data Encryption"</dt>
                            <dd>"AES-256"</dd>
                        </div>
                    </dl>
                </section>
            </Show>

            <section class="qb-connect__card qb-connect__card--security">
                <h3 class="qb-connect__card-title">"Security & Privacy"</h3>
                <ul class="qb-connect__notes">
                    {SECURITY_NOTES.into_iter().map(|note| view! { <li>{note}</li> }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
