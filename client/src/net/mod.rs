//! Networking boundaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to this app's own server, `identity` talks to the hosted
//! identity provider, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
