//! Public browser configuration.

use axum::extract::State;
use axum::response::Json;
use client::net::types::IdentityConfig;

use crate::state::AppState;

/// `GET /api/config`: identity-provider URL and publishable key.
///
/// Empty strings mean the provider is not configured; the browser then keeps
/// everyone signed out.
pub async fn identity_config(State(state): State<AppState>) -> Json<IdentityConfig> {
    Json(state.config.identity.clone())
}
