//! Client list with search, a per-card action menu and the add-client form.

use leptos::prelude::*;

use crate::state::app::{AppState, Intent, dispatch};
use crate::state::clients::{Client, ClientDraft, ConnectionStatus};
use crate::state::router::View;
use crate::util::clock::Timestamp;
use crate::util::display::{client_status_style, connection_style};
use crate::util::format::time_ago;

/// Industry choices offered by the add-client form.
pub const INDUSTRIES: [&str; 8] =
    ["Technology", "Services", "Retail", "Food & Beverage", "Healthcare", "Construction", "Education", "Other"];

#[component]
pub fn ClientManager() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let query = RwSignal::new(String::new());
    let menu = RwSignal::new(None::<String>);
    let adding = RwSignal::new(false);

    let total = move || app.with(|s| s.clients.len());
    let matches = move || {
        let q = query.get();
        app.with(|s| s.clients.search(&q).into_iter().cloned().collect::<Vec<Client>>())
    };

    view! {
        <div class="client-manager">
            <div class="client-manager__header">
                <div>
                    <h1 class="client-manager__title">"Client Management"</h1>
                    <p class="client-manager__subtitle">{move || format!("{} clients total", total())}</p>
                </div>
                <button class="client-manager__add" on:click=move |_| adding.set(true)>
                    "+ Add Client"
                </button>
            </div>

            <input
                class="client-manager__search"
                type="text"
                placeholder="Search clients by name, company, or email..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="client-manager__list">
                {move || {
                    let found = matches();
                    if found.is_empty() {
                        return view! { <p class="client-manager__empty">"No clients found"</p> }.into_any();
                    }
                    found.into_iter().map(|client| render_client(app, menu, client)).collect_view().into_any()
                }}
            </div>

            <Show when=move || adding.get()>
                <AddClientForm on_close=Callback::new(move |()| adding.set(false)) />
            </Show>
        </div>
    }
}

fn render_client(app: RwSignal<AppState>, menu: RwSignal<Option<String>>, client: Client) -> impl IntoView {
    let connection = connection_style(client.connection_status);
    let status = client_status_style(client.status);
    let synced = (client.connection_status == ConnectionStatus::Connected)
        .then(|| client.last_sync.clone())
        .flatten()
        .map(|at| format!("Last synced {}", time_ago(Some(&at), Timestamp::now())));

    let id = StoredValue::new(client.id.clone());
    let menu_open = move || menu.with(|m| m.as_deref() == Some(id.get_value().as_str()));
    let toggle_menu = move |_| {
        let current = id.get_value();
        menu.update(|m| *m = if m.as_deref() == Some(current.as_str()) { None } else { Some(current) });
    };
    let open_in = move |target: View| {
        dispatch(app, Intent::SelectClient(id.get_value()));
        dispatch(app, Intent::Navigate(target));
        menu.set(None);
    };

    view! {
        <article class="client-card">
            <div class="client-card__main">
                <div class="client-card__identity">
                    <h3 class="client-card__company">{client.company_name}</h3>
                    <p class="client-card__contact">{client.name}</p>
                    <p class="client-card__details">
                        <span class="client-card__detail">{client.email}</span>
                        <span class="client-card__detail">{client.phone}</span>
                        <span class="client-card__detail">{client.industry}</span>
                    </p>
                </div>
                <div class="client-card__badges">
                    <span class=status.class("status-badge")>{status.icon} " " {status.label}</span>
                    <span class=connection.class("status-badge")>{connection.icon} " " {connection.label}</span>
                    <button class="client-card__menu-toggle" title="Actions" on:click=toggle_menu>
                        "⋮"
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="client-card__scrim" on:click=move |_| menu.set(None)></div>
                <div class="client-card__menu">
                    <button class="client-card__action" on:click=move |_| open_in(View::Dashboard)>
                        "View Dashboard"
                    </button>
                    <button class="client-card__action" on:click=move |_| open_in(View::Connect)>
                        "Manage Connection"
                    </button>
                    <button
                        class="client-card__action client-card__action--danger"
                        on:click=move |_| {
                            dispatch(app, Intent::RemoveClient(id.get_value()));
                            menu.set(None);
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </Show>

            {synced.map(|text| view! { <p class="client-card__sync">{text}</p> })}
        </article>
    }
}

#[component]
fn AddClientForm(on_close: Callback<()>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let draft = RwSignal::new(ClientDraft::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        dispatch(app, Intent::AddClient(current));
        draft.set(ClientDraft::default());
        error.set(None);
        on_close.run(());
    };

    view! {
        <div class="modal__backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal__header">
                    <h2 class="modal__title">"Add New Client"</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form class="modal__body client-form" on:submit=on_submit>
                    {move || error.get().map(|message| view! { <p class="client-form__error">{message}</p> })}
                    <label class="client-form__field">
                        <span class="client-form__label">"Contact Name"</span>
                        <input
                            class="client-form__input"
                            type="text"
                            placeholder="John Smith"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="client-form__field">
                        <span class="client-form__label">"Email"</span>
                        <input
                            class="client-form__input"
                            type="email"
                            placeholder="john@company.com"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="client-form__field">
                        <span class="client-form__label">"Company Name"</span>
                        <input
                            class="client-form__input"
                            type="text"
                            placeholder="Acme Corporation"
                            prop:value=move || draft.with(|d| d.company_name.clone())
                            on:input=move |ev| draft.update(|d| d.company_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="client-form__field">
                        <span class="client-form__label">"Industry"</span>
                        <select
                            class="client-form__input"
                            prop:value=move || draft.with(|d| d.industry.clone())
                            on:change=move |ev| draft.update(|d| d.industry = event_target_value(&ev))
                        >
                            <option value="">"Select..."</option>
                            {INDUSTRIES
                                .into_iter()
                                .map(|industry| view! { <option value=industry>{industry}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="client-form__field">
                        <span class="client-form__label">"Phone"</span>
                        <input
                            class="client-form__input"
                            type="tel"
                            placeholder="(555) 123-4567"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </label>
                    <div class="client-form__actions">
                        <button type="button" class="client-form__cancel" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="client-form__submit">
                            "Add Client"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
