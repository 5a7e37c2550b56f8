//! Submission lifecycle for the contact form's submit control.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// How long a success or error status stays on the submit control before it
/// reverts to its resting label, in milliseconds.
pub const STATUS_REVERT_DELAY_MS: u32 = 3000;

/// Lifecycle of one fire-and-forget submission.
///
/// The control is disabled for the whole round trip and through the status
/// display; only the timed revert back to `Idle` re-enables it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitPhase {
    /// Label shown on the submit control; `idle_label` is the control's
    /// original resting text.
    #[must_use]
    pub fn label(self, idle_label: &str) -> String {
        match self {
            Self::Idle => idle_label.to_owned(),
            Self::Sending => "Sending...".to_owned(),
            Self::Sent => "Message Sent!".to_owned(),
            Self::Failed => "Error. Try again.".to_owned(),
        }
    }

    /// Whether the submit control is disabled.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    /// Styling modifier for the control, if this phase carries one.
    #[must_use]
    pub fn status_class(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("contact-form__submit--success"),
            Self::Failed => Some("contact-form__submit--error"),
            Self::Idle | Self::Sending => None,
        }
    }

    /// Map a completed request onto the status phase.
    #[must_use]
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Sent,
            Err(_) => Self::Failed,
        }
    }

    /// The timed revert: back to the resting state.
    #[must_use]
    pub fn revert(self) -> Self {
        Self::Idle
    }
}
