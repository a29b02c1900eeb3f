//! Small browser DOM helpers: scrolling and the page origin.
//!
//! All calls are best-effort and browser-only; SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Scroll the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// `scheme://host[:port]` of the current page, used as the password-reset
/// redirect target. Empty on the server.
pub fn location_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
