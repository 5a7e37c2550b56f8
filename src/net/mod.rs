//! Networking modules for the site's one outbound call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts the contact form to the external FormSubmit service. There is
//! no backend of our own and no other network traffic.

pub mod api;
