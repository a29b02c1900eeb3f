//! Top navigation bar: wordmark, landing anchors and the account control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-out runs here because the account control lives here. The identity
//! client announces `SignedOut` itself; the bar then applies the toast intent.

use leptos::prelude::*;

use crate::components::brand::Brand;
use crate::net::identity::IdentityClient;
use crate::state::app::{AppState, Intent, dispatch};
use crate::state::router::View;
use crate::state::session::Session;
use crate::util::dom;

/// Landing page sections reachable from the bar, as `(anchor id, label)`.
const LANDING_ANCHORS: [(&str, &str); 3] =
    [("features", "Features"), ("how-it-works", "How It Works"), ("pricing", "Pricing")];

#[component]
pub fn Navbar() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let identity = StoredValue::new(expect_context::<IdentityClient>());
    let signing_out = RwSignal::new(false);

    let authenticated = move || app.with(AppState::is_authenticated);
    let on_landing = move || app.with(|s| s.active_view() == View::Landing);
    let in_workspace = move || app.with(AppState::shows_workspace);
    let user_name = move || app.with(|s| s.session.user().map(Session::display_name).unwrap_or_default());

    let on_brand = move |_| dispatch(app, Intent::Navigate(View::Landing));
    let on_dashboard = move |_| dispatch(app, Intent::Navigate(View::Dashboard));
    let on_menu = move |_| dispatch(app, Intent::ToggleSidebar);

    let on_account = move |_| {
        if !app.with_untracked(AppState::is_authenticated) {
            dispatch(app, Intent::OpenLogin);
            return;
        }
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let token = app.with_untracked(|s| s.session.user().map(|u| u.access_token.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match token {
                Some(token) => identity.get_value().sign_out(&token).await.map_err(|e| e.to_string()),
                None => {
                    crate::util::session_store::clear_session();
                    Ok(())
                }
            };
            match result {
                Ok(()) => dispatch(app, Intent::SignOutSucceeded),
                Err(e) => dispatch(app, Intent::SignOutFailed(e)),
            }
            signing_out.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, identity);
            signing_out.set(false);
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <Show when=in_workspace>
                    <button class="navbar__menu" on:click=on_menu title="Toggle menu">
                        "☰"
                    </button>
                </Show>
                <button class="navbar__brand" on:click=on_brand>
                    <Brand/>
                </button>

                <Show when=on_landing>
                    <nav class="navbar__links">
                        {LANDING_ANCHORS
                            .iter()
                            .map(|&(id, label)| {
                                view! {
                                    <button class="navbar__link" on:click=move |_| dom::scroll_to_section(id)>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>

                <div class="navbar__spacer"></div>

                <Show when={move || authenticated() && on_landing()}>
                    <button class="navbar__cta" on:click=on_dashboard>
                        "Dashboard"
                    </button>
                </Show>
                <Show when=authenticated>
                    <span class="navbar__user">{user_name}</span>
                </Show>
                <button
                    class="navbar__account"
                    class:navbar__account--signed-in=authenticated
                    on:click=on_account
                    disabled=move || signing_out.get()
                >
                    {move || if authenticated() { "Sign Out" } else { "Sign In" }}
                </button>
            </div>
        </header>
    }
}
