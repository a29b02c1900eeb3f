//! Insight generation route.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{InsightRequest, InsightResponse};
use tracing::warn;

use super::error_response;
use crate::services::insights::{self, InsightError};
use crate::state::AppState;

impl IntoResponse for InsightError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

/// `POST /api/insights/generate`: `{financialData}` in, `{insights}` out.
pub async fn generate(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Result<Json<InsightRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection, "insights: malformed request body");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let caller = caller_key(&headers, addr, state.config.trust_forwarded_for);
    match insights::generate(&state, &caller, &request.financial_data).await {
        Ok(insights) => Json(InsightResponse { insights }).into_response(),
        Err(e) => {
            warn!(error = %e, %caller, status = e.status().as_u16(), retryable = e.retryable(), "insights: request failed");
            e.into_response()
        }
    }
}

/// Rate-limit key: the peer IP, or the first `X-Forwarded-For` hop when the
/// proxy in front is trusted to set it.
pub(crate) fn caller_key(headers: &HeaderMap, addr: SocketAddr, trust_forwarded_for: bool) -> String {
    if !trust_forwarded_for {
        return addr.ip().to_string();
    }
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| addr.ip().to_string(), str::to_owned)
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
