//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `credentials`, `toast`) so screens can
//! depend on small focused models. Everything here is plain data plus pure
//! transitions; reactivity lives in the wrappers and the pages.

pub mod auth;
pub mod credentials;
pub mod toast;
