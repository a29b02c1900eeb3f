//! Toast stack in the bottom-right corner.
//!
//! Each notice dismisses itself after `NOTICE_TTL_MS`; the close button
//! dismisses it early.

use leptos::prelude::*;

use crate::state::app::{AppState, Intent, dispatch};
use crate::util::display::notice_style;

pub const NOTICE_TTL_MS: u32 = 5000;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    // Start one timer per notice id not seen before.
    #[cfg(feature = "hydrate")]
    Effect::new(move |seen: Option<u64>| {
        let seen = seen.unwrap_or(0);
        let fresh: Vec<u64> = app.with(|s| s.notices.items().iter().map(|n| n.id).filter(|&id| id > seen).collect());
        for id in &fresh {
            let id = *id;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                dispatch(app, Intent::DismissNotice(id));
            });
        }
        fresh.into_iter().fold(seen, u64::max)
    });

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            {move || {
                app.with(|s| {
                    s.notices
                        .items()
                        .iter()
                        .map(|notice| {
                            let style = notice_style(notice.kind);
                            let id = notice.id;
                            view! {
                                <div class=style.class("notice")>
                                    <span class="notice__icon">{style.icon}</span>
                                    <div class="notice__body">
                                        <p class="notice__title">{notice.title.clone()}</p>
                                        <p class="notice__description">{notice.description.clone()}</p>
                                    </div>
                                    <button
                                        class="notice__close"
                                        title="Dismiss"
                                        on:click=move |_| dispatch(app, Intent::DismissNotice(id))
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
