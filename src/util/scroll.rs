//! Smooth center-scrolling to same-page anchor targets.
//!
//! Requires a browser environment; outside of it (SSR, native tests) every
//! function here is a no-op, matching the missing-anchor contract of the
//! widgets that call them.

/// Smoothly scroll the first element matching `selector` to the vertical
/// center of the viewport. Missing documents or targets are a silent no-op.
pub fn center_scroll_to(selector: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(target)) = document.query_selector(selector) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
    }
}

/// Center-scroll to `selector` after `delay_ms`, leaving room for a closing
/// transition to finish first. Fire-once; not cancellable.
pub fn center_scroll_after(delay_ms: u32, selector: &'static str) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(delay_ms, move || center_scroll_to(selector)).forget();
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, selector);
    }
}
