//! REST helpers for the app's own server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed insight
//! request leaves the cached insight list in place, so the error string only
//! feeds logs and the degrade notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FinancialSnapshot, GeneratedInsight, IdentityConfig};
#[cfg(any(test, feature = "hydrate"))]
use super::types::InsightResponse;

#[cfg(any(test, feature = "hydrate"))]
const CONFIG_ENDPOINT: &str = "/api/config";
#[cfg(any(test, feature = "hydrate"))]
const GENERATE_ENDPOINT: &str = "/api/insights/generate";

/// Failure text for a non-2xx insight reply. Prefers the server's
/// `{"error": "..."}` body over the bare status.
#[cfg(any(test, feature = "hydrate"))]
fn generate_failed_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => format!("generate insights failed: {status}: {}", parsed.error),
        _ => format!("generate insights failed: {status}"),
    }
}

/// Decode a successful insight reply; an empty list counts as a failure.
#[cfg(any(test, feature = "hydrate"))]
fn decode_insights(body: &str) -> Result<Vec<GeneratedInsight>, String> {
    let parsed: InsightResponse = serde_json::from_str(body).map_err(|e| format!("malformed insight reply: {e}"))?;
    if parsed.insights.is_empty() {
        return Err("insight reply was empty".to_owned());
    }
    Ok(parsed.insights)
}

/// Fetch public identity-provider settings from `/api/config`.
/// Returns `None` on failure or on the server.
pub async fn fetch_identity_config() -> Option<IdentityConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<IdentityConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Ask the server to generate insights for `snapshot`.
///
/// # Errors
///
/// Returns an error string for transport failures, non-2xx replies, and
/// malformed or empty insight lists.
pub async fn generate_insights(snapshot: &FinancialSnapshot) -> Result<Vec<GeneratedInsight>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::InsightRequest { financial_data: snapshot.clone() };
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(generate_failed_message(status, &text));
        }
        decode_insights(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = snapshot;
        Err("not available on server".to_owned())
    }
}
