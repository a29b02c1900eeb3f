//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page and component logic to improve reuse and testability.

pub mod chart;
pub mod clock;
pub mod display;
pub mod dom;
pub mod format;
pub mod report;
pub mod session_store;
