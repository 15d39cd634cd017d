//! Networking modules for the catalog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues JSON requests and interprets responses, `session` owns the
//! admin token, and `types` defines the wire schema.

pub mod api;
pub mod session;
pub mod types;
