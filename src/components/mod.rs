//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and interaction surfaces while reading and
//! writing the shared widget state from Leptos context providers. Browser-only
//! wiring (geometry reads, timers, document listeners) is gated behind the
//! `hydrate` feature.

pub mod contact_form;
pub mod nav_panel;
pub mod preview_modal;
pub mod service_list;
pub mod work_gallery;
