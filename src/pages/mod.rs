//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` owns section layout and delegates all
//! interaction to `components`.

pub mod home;
