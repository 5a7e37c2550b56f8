//! Pure, natively-testable state machines behind the page widgets.
//!
//! DESIGN
//! ======
//! State is split by widget (`highlight`, `panel`, `modal`, `contact`) so each
//! component depends on one small focused model. Nothing in here touches the
//! DOM; components translate these models into element attributes and styles.

pub mod contact;
pub mod highlight;
pub mod modal;
pub mod panel;
