//! Financial dashboard: headline metrics, trend charts, compact insights and
//! quick links into the other workspace panels.

use leptos::prelude::*;

use crate::components::insights_panel::InsightsPanel;
use crate::components::trend_charts::{CashFlowChart, RevenueChart};
use crate::fixtures;
use crate::state::app::{AppState, Intent, dispatch};
use crate::state::clients::ConnectionStatus;
use crate::state::financials::MetricCard;
use crate::state::router::View;
use crate::util::clock::Timestamp;
use crate::util::display::{metric_change_tone, metric_icon, metric_value};
use crate::util::format::{format_percent_change, time_ago};

/// Period picker choices. Selecting one relabels the header only.
pub const DASHBOARD_PERIODS: [&str; 5] =
    ["Trailing 12 Months", "This Quarter", "Last Quarter", "Year to Date", "Last Year"];

/// How long the header sync banner stays up.
pub const DASHBOARD_SYNC_MS: u32 = 2500;

#[component]
pub fn DashboardView() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let period = RwSignal::new(DASHBOARD_PERIODS[0].to_owned());
    let syncing = RwSignal::new(false);

    let company = move || {
        app.with(|s| s.clients.selected().map_or_else(|| "No client selected".to_owned(), |c| c.company_name.clone()))
    };

    let on_sync = move |_| {
        if syncing.get_untracked() {
            return;
        }
        syncing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DASHBOARD_SYNC_MS).await;
            syncing.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        syncing.set(false);
    };

    let metrics = fixtures::metrics();
    let chart = fixtures::monthly_chart();

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Financial Dashboard"</h1>
                    <p class="dashboard__subtitle">{move || format!("{} — {}", company(), period.get())}</p>
                </div>
                <div class="dashboard__controls">
                    <select
                        class="dashboard__period"
                        on:change=move |ev| period.set(event_target_value(&ev))
                        prop:value=move || period.get()
                    >
                        {DASHBOARD_PERIODS
                            .into_iter()
                            .map(|label| view! { <option value=label>{label}</option> })
                            .collect_view()}
                    </select>
                    <button class="dashboard__sync" on:click=on_sync disabled=move || syncing.get()>
                        <span class="dashboard__sync-icon" class:dashboard__sync-icon--spinning=move || syncing.get()>
                            "↻"
                        </span>
                        {move || if syncing.get() { "Syncing..." } else { "Sync Data" }}
                    </button>
                </div>
            </div>

            <Show when=move || syncing.get()>
                <div class="dashboard__banner">
                    <p class="dashboard__banner-title">"Syncing financial data from QuickBooks..."</p>
                    <p class="dashboard__banner-text">"Pulling latest reports and calculating metrics"</p>
                </div>
            </Show>

            <div class="dashboard__metrics">
                {metrics.into_iter().map(render_metric_card).collect_view()}
            </div>

            <div class="dashboard__charts">
                <RevenueChart points=chart.clone() />
                <CashFlowChart points=chart />
            </div>

            <div class="dashboard__lower">
                <InsightsPanel compact=true />
                <QuickActions />
            </div>
        </div>
    }
}

fn render_metric_card(card: MetricCard) -> impl IntoView {
    let tone = metric_change_tone(&card);
    let badge_class = format!("metric-card__change metric-card__change--{}", tone.modifier());
    let icon_class = format!("metric-card__icon metric-card__icon--{}", card.color);
    let icon = metric_icon(&card.icon);
    let value = metric_value(&card);
    let change = format_percent_change(card.value, card.previous_value);

    view! {
        <div class="metric-card">
            <div class="metric-card__top">
                <span class=icon_class>{icon}</span>
                <span class=badge_class>{change}</span>
            </div>
            <p class="metric-card__value">{value}</p>
            <p class="metric-card__title">{card.title}</p>
            <p class="metric-card__hint">"vs last period"</p>
        </div>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let insight_count = move || app.with(|s| s.insights.items.len());
    let connection_hint = move || {
        app.with(|s| match s.clients.selected() {
            Some(c) if c.connection_status == ConnectionStatus::Connected => {
                format!("Last sync {}", time_ago(c.last_sync.as_deref(), Timestamp::now()))
            }
            _ => "Not connected".to_owned(),
        })
    };

    view! {
        <div class="quick-actions">
            <button class="quick-actions__item" on:click=move |_| dispatch(app, Intent::Navigate(View::Reports))>
                <span class="quick-actions__title">"View Full Reports"</span>
                <span class="quick-actions__hint">"P&L, Balance Sheet, Cash Flow"</span>
            </button>
            <button class="quick-actions__item" on:click=move |_| dispatch(app, Intent::Navigate(View::Insights))>
                <span class="quick-actions__title">"All AI Insights"</span>
                <span class="quick-actions__hint">{move || format!("{} insights available", insight_count())}</span>
            </button>
            <button class="quick-actions__item" on:click=move |_| dispatch(app, Intent::Navigate(View::Connect))>
                <span class="quick-actions__title">"Connection Status"</span>
                <span class="quick-actions__hint">{connection_hint}</span>
            </button>
        </div>
    }
}
