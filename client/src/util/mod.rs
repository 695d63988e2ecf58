//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the session
//! policies from page logic to improve reuse and testability.

pub mod auth;
pub mod persistence;
pub mod route_guard;
