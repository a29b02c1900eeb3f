//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `router`, `clients`, etc.) so the
//! reducers stay small and testable. `app` ties them together behind one
//! intent-driven mutator; panel-local state (`login`, `connect`, `settings`)
//! lives in the component that owns it.

pub mod app;
pub mod clients;
pub mod connect;
pub mod financials;
pub mod insights;
pub mod login;
pub mod router;
pub mod session;
pub mod settings;
