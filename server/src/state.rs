//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed server config, the optional LLM client and the
//! rate limiter guarding insight generation. Nothing else is shared: the
//! financial data arrives with each request and is never stored.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::JsonModel;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn JsonModel>>,
    /// In-memory rate limiter for insight generation.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, llm: Option<Arc<dyn JsonModel>>, rate_limiter: RateLimiter) -> Self {
        Self { config: Arc::new(config), llm, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
