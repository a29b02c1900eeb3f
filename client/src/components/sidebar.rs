//! Workspace sidebar: client switcher and panel navigation.
//!
//! On narrow screens the sidebar is a drawer toggled from the navbar; picking
//! a view or a client closes it.

use leptos::prelude::*;

use crate::components::icons::render_view_icon;
use crate::state::app::{AppState, Intent, dispatch};
use crate::state::router::View;
use crate::util::display::connection_style;

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let open = move || app.with(|s| s.sidebar_open);
    let selected_company = move || {
        app.with(|s| {
            s.clients
                .selected()
                .map_or_else(|| "No client selected".to_owned(), |c| c.company_name.clone())
        })
    };
    let selected_badge = move || {
        app.with(|s| s.clients.selected().map(|c| connection_style(c.connection_status)))
    };

    let on_client_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if !id.is_empty() {
            dispatch(app, Intent::SelectClient(id));
        }
    };

    view! {
        <Show when=open>
            <div class="sidebar__scrim" on:click=move |_| dispatch(app, Intent::ToggleSidebar)></div>
        </Show>
        <aside class="sidebar" class:sidebar--open=open>
            <div class="sidebar__client">
                <p class="sidebar__eyebrow">"Active Client"</p>
                <p class="sidebar__company">{selected_company}</p>
                {move || {
                    selected_badge()
                        .map(|style| {
                            view! {
                                <span class=style.class("status-badge")>
                                    <span class="status-badge__icon">{style.icon}</span>
                                    {style.label}
                                </span>
                            }
                        })
                }}
                <select class="sidebar__switcher" on:change=on_client_change>
                    {move || {
                        app.with(|s| {
                            let selected = s.clients.selected_id().map(str::to_owned);
                            s.clients
                                .list()
                                .iter()
                                .map(|c| {
                                    let is_selected = selected.as_deref() == Some(c.id.as_str());
                                    view! {
                                        <option value=c.id.clone() selected=is_selected>
                                            {c.company_name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </select>
            </div>

            <nav class="sidebar__nav">
                {View::WORKSPACE
                    .into_iter()
                    .map(|target| {
                        let active = move || app.with(|s| s.active_view() == target);
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=active
                                on:click=move |_| dispatch(app, Intent::Navigate(target))
                            >
                                <span class="sidebar__icon">{render_view_icon(target)}</span>
                                <span class="sidebar__label">{target.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <p class="sidebar__hint">
                    {move || app.with(|s| format!("{} clients", s.clients.len()))}
                </p>
            </div>
        </aside>
    }
}
