//! Networking modules for the identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the capability surface screens depend on, `gotrue`
//! implements it over HTTP, and `types` defines the shared wire schema.

pub mod gotrue;
pub mod identity;
pub mod types;

#[cfg(test)]
pub(crate) mod identity_fake;
