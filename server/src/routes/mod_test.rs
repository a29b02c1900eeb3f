use axum::body::to_bytes;
use axum::extract::State;
use client::net::types::IdentityConfig;

use super::*;
use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn error_response_wraps_message() {
    let response = error_response(StatusCode::BAD_GATEWAY, "upstream failed");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "upstream failed" }));
}

#[tokio::test]
async fn config_route_serves_identity_settings() {
    let config = ServerConfig {
        identity: IdentityConfig {
            identity_url: "https://auth.example.test".into(),
            identity_anon_key: "anon".into(),
        },
        ..ServerConfig::default()
    };
    let state = AppState::new(config, None, RateLimiter::default());

    let Json(served) = config::identity_config(State(state)).await;
    assert_eq!(served.identity_url, "https://auth.example.test");
    assert_eq!(served.identity_anon_key, "anon");

    let wire = serde_json::to_value(&served).unwrap();
    assert_eq!(wire["identityUrl"], "https://auth.example.test");
    assert_eq!(wire["identityAnonKey"], "anon");
}

#[tokio::test]
async fn config_route_serves_blank_settings_when_unconfigured() {
    let Json(served) = config::identity_config(State(crate::state::test_helpers::test_app_state())).await;
    assert!(!served.is_configured());
}
