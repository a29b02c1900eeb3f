//! PrimeCFO.ai wordmark shared by the navbar, footer and login modal.

use leptos::prelude::*;

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <span class="brand">
            <span class="brand__mark">
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <line x1="4" y1="16" x2="4" y2="10" />
                    <line x1="10" y1="16" x2="10" y2="4" />
                    <line x1="16" y1="16" x2="16" y2="7" />
                </svg>
            </span>
            <span class="brand__name">
                "Prime"
                <span class="brand__accent">"CFO"</span>
                <span class="brand__suffix">".ai"</span>
            </span>
        </span>
    }
}
