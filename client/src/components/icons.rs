//! Inline SVG icons for workspace navigation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::router::View;

/// Render the sidebar icon for `view`.
pub fn render_view_icon(view: View) -> impl IntoView {
    match view {
        View::Landing => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 10 L10 3 L17 10" />
                <path d="M5 9 V17 H15 V9" />
            </svg>
        }
        .into_any(),
        View::Dashboard => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="3" y="3" width="6" height="6" />
                <rect x="11" y="3" width="6" height="6" />
                <rect x="3" y="11" width="6" height="6" />
                <rect x="11" y="11" width="6" height="6" />
            </svg>
        }
        .into_any(),
        View::Reports => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M5 2 H12 L16 6 V18 H5 Z" />
                <line x1="8" y1="10" x2="13" y2="10" />
                <line x1="8" y1="13" x2="13" y2="13" />
            </svg>
        }
        .into_any(),
        View::Insights => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2 L11.8 8.2 L18 10 L11.8 11.8 L10 18 L8.2 11.8 L2 10 L8.2 8.2 Z" />
            </svg>
        }
        .into_any(),
        View::Clients => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7" cy="7" r="3" />
                <circle cx="14" cy="8" r="2.5" />
                <path d="M2 17 C2 13 12 13 12 17" />
                <path d="M12 13.5 C15 12.5 18 14 18 17" />
            </svg>
        }
        .into_any(),
        View::Connect => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M8 12 L12 8" />
                <path d="M9 5 L11 3 A3.5 3.5 0 0 1 17 9 L15 11" />
                <path d="M11 15 L9 17 A3.5 3.5 0 0 1 3 11 L5 9" />
            </svg>
        }
        .into_any(),
        View::Settings => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3" />
                <path d="M10 2 V5 M10 15 V18 M2 10 H5 M15 10 H18 M4.3 4.3 L6.5 6.5 M13.5 13.5 L15.7 15.7 M4.3 15.7 L6.5 13.5 M13.5 6.5 L15.7 4.3" />
            </svg>
        }
        .into_any(),
    }
}
