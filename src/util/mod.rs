//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure escaping, URL and price helpers used by every renderer, plus the few
//! browser DOM helpers that sit outside Leptos' reactive tree.

pub mod dom;
pub mod price;
pub mod sanitize;
