//! The single route: landing page or workspace, plus the overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! View switching happens in `AppState`, not the URL, so this page owns the
//! scroll reset that a route change would normally give for free.

use leptos::prelude::*;

use crate::components::login_modal::LoginModal;
use crate::components::navbar::Navbar;
use crate::components::notice_tray::NoticeTray;
use crate::pages::landing::LandingPage;
use crate::pages::workspace::WorkspacePage;
use crate::state::app::AppState;
use crate::util::dom;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let loading = move || app.with(|s| s.session.loading);
    let in_workspace = Memo::new(move |_| app.with(AppState::shows_workspace));

    Effect::new(move |prev: Option<u64>| {
        let seq = app.with(|s| s.router.scroll_reset_seq);
        if prev.is_some_and(|p| p != seq) {
            dom::scroll_to_top();
        }
        seq
    });

    view! {
        <Show
            when=move || !loading()
            fallback=|| {
                view! {
                    <div class="app-loading">
                        <div class="app-loading__spinner"></div>
                        <p class="app-loading__text">"Loading PrimeCFO.ai..."</p>
                    </div>
                }
            }
        >
            <div class="app">
                <Navbar />
                <Show when=move || in_workspace.get() fallback=|| view! { <LandingPage /> }>
                    <WorkspacePage />
                </Show>
            </div>
        </Show>
        <LoginModal />
        <NoticeTray />
    }
}
