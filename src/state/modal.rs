//! State for the singleton work preview modal.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Preview modal state: `src` holds the loaded image source while open.
///
/// The element itself is constructed once by the component tree; this state
/// only drives its visibility and the image it loads. Closing clears the
/// source so any in-flight image load is abandoned and its memory released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    src: Option<String>,
}

impl ModalState {
    /// Open the modal on `src`. An empty source is a no-op and returns `false`.
    pub fn open(&mut self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        self.src = Some(src.to_owned());
        true
    }

    /// Hide the modal and clear the loaded image.
    pub fn close(&mut self) {
        self.src = None;
    }

    /// Close only if currently open; backs the Escape handler. Returns whether
    /// anything changed.
    pub fn close_if_open(&mut self) -> bool {
        let was_open = self.is_open();
        self.src = None;
        was_open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.src.is_some()
    }

    /// Source for the image element; empty when closed.
    #[must_use]
    pub fn image_src(&self) -> &str {
        self.src.as_deref().unwrap_or("")
    }

    /// `aria-hidden` value for the overlay element.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() { "false" } else { "true" }
    }
}
