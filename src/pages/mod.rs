//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state object, created on entry and dropped
//! on unmount, and delegates rendering details to `components`.

pub mod catalog;
pub mod dashboard;
pub mod login;
pub mod not_found;
