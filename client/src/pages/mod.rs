//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its session store and route guard, and delegates rendering
//! details to `components`.

pub mod dashboard;
pub mod login;
