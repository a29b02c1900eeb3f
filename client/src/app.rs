//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::identity::IdentityClient;
use crate::pages::home::HomePage;
use crate::state::app::AppState;
use crate::state::settings::SettingsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, then (in the browser) loads the
/// identity settings, restores any stored session and forwards identity
/// events into `AppState` until the component is torn down.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = RwSignal::new(AppState::with_fixtures());
    let settings = RwSignal::new(SettingsState::default());
    let identity = IdentityClient::default();

    provide_context(app);
    provide_context(settings);
    provide_context(identity.clone());

    #[cfg(feature = "hydrate")]
    bootstrap_session(app, identity);

    view! {
        <Stylesheet id="leptos" href="/pkg/primecfo.css"/>
        <Title text="PrimeCFO.ai"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn bootstrap_session(app: RwSignal<AppState>, identity: IdentityClient) {
    use crate::state::app::{Intent, dispatch};

    let subscription = identity.on_session_change(move |change| {
        dispatch(app, Intent::SessionChanged(change.clone()));
    });
    on_cleanup(move || drop(subscription));

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_identity_config().await {
            Some(config) if config.is_configured() => identity.configure(config),
            _ => leptos::logging::warn!("identity provider not configured; sign-in disabled"),
        }
        // An email-link redirect emits its own change; otherwise restore storage.
        if identity.consume_redirect().await.is_none() {
            let session = identity.current_session().await;
            dispatch(app, Intent::SessionRestored(session));
        }
    });
}
