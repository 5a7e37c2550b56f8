//! Open/closed state for the slide-in mobile navigation panel.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Delay between closing the panel and scrolling to a link target, leaving
/// room for the close transition, in milliseconds.
pub const NAV_SCROLL_DELAY_MS: u32 = 240;

/// Binary panel state with derived ARIA attribute values.
///
/// The panel, its backdrop overlay, and the trigger's `aria-expanded` move in
/// lockstep, so all three are derived from the single `is_open` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub is_open: bool,
}

impl PanelState {
    /// Open the panel. Idempotent.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the panel. Idempotent.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// `aria-hidden` value for the panel element.
    #[must_use]
    pub fn panel_aria_hidden(&self) -> &'static str {
        if self.is_open { "false" } else { "true" }
    }

    /// `aria-hidden` value for the backdrop overlay.
    #[must_use]
    pub fn overlay_aria_hidden(&self) -> &'static str {
        self.panel_aria_hidden()
    }

    /// `aria-expanded` value for the hamburger trigger.
    #[must_use]
    pub fn trigger_aria_expanded(&self) -> &'static str {
        if self.is_open { "true" } else { "false" }
    }
}
