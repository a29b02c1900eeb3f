use std::sync::Arc;

use axum::body::to_bytes;
use axum::http::HeaderValue;
use client::net::types::{FinancialSnapshot, SnapshotMetric};

use super::*;
use crate::config::ServerConfig;
use crate::llm::JsonModel;
use crate::llm::types::{JsonReply, ListPrompt, LlmError};
use crate::state::test_helpers;

struct FixedReply(&'static str);

#[async_trait::async_trait]
impl JsonModel for FixedReply {
    async fn generate_list(&self, _prompt: &ListPrompt<'_>) -> Result<JsonReply, LlmError> {
        Ok(JsonReply { json: self.0.to_owned(), model: "mock".into(), truncated: false, input_tokens: 1, output_tokens: 1 })
    }
}

fn limited_state(per_caller: usize, trust_forwarded_for: bool) -> AppState {
    let llm: Arc<dyn JsonModel> = Arc::new(FixedReply(r#"[{"title":"ok"}]"#));
    let mut state = test_helpers::test_app_state_with_limit(llm, per_caller);
    state.config = Arc::new(ServerConfig { trust_forwarded_for, ..ServerConfig::default() });
    state
}

fn forwarded(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(value));
    headers
}

fn peer() -> SocketAddr {
    SocketAddr::from(([192, 168, 1, 20], 50_000))
}

fn request() -> InsightRequest {
    InsightRequest {
        financial_data: FinancialSnapshot {
            metrics: vec![SnapshotMetric { title: "Net Profit".into(), value: 50.0, previous_value: 40.0 }],
            monthly_trend: Vec::new(),
        },
    }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn generate_returns_insights_envelope() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(FixedReply(r#"[{"title":"Margins up","urgency":"positive"}]"#)));
    let response = generate(State(state), ConnectInfo(peer()), HeaderMap::new(), Ok(Json(request()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["insights"][0]["title"], "Margins up");
    assert_eq!(body["insights"][0]["urgency"], "positive");
}

#[tokio::test]
async fn generate_without_llm_is_503_with_error_body() {
    let state = test_helpers::test_app_state();
    let response = generate(State(state), ConnectInfo(peer()), HeaderMap::new(), Ok(Json(request()))).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["error"], "insight generation is not configured");
}

#[tokio::test]
async fn generate_unusable_reply_is_502() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(FixedReply("Sorry, no insights today.")));
    let response = generate(State(state), ConnectInfo(peer()), HeaderMap::new(), Ok(Json(request()))).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn generate_empty_snapshot_is_400() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(FixedReply("[]")));
    let empty = InsightRequest { financial_data: FinancialSnapshot::default() };
    let response = generate(State(state), ConnectInfo(peer()), HeaderMap::new(), Ok(Json(empty))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn forged_forwarded_for_shares_the_peer_bucket() {
    let state = limited_state(1, false);

    let first = generate(State(state.clone()), ConnectInfo(peer()), forwarded("1.1.1.1"), Ok(Json(request()))).await;
    assert_eq!(first.status(), StatusCode::OK);
    let second = generate(State(state), ConnectInfo(peer()), forwarded("2.2.2.2"), Ok(Json(request()))).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn trusted_proxy_limits_by_forwarded_caller() {
    let state = limited_state(1, true);
    let headers = forwarded("203.0.113.7, 10.0.0.1");

    let first = generate(State(state.clone()), ConnectInfo(peer()), headers.clone(), Ok(Json(request()))).await;
    assert_eq!(first.status(), StatusCode::OK);
    let second = generate(State(state.clone()), ConnectInfo(peer()), headers, Ok(Json(request()))).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    let other = generate(State(state), ConnectInfo(peer()), forwarded("198.51.100.4"), Ok(Json(request()))).await;
    assert_eq!(other.status(), StatusCode::OK);
}

#[test]
fn caller_key_ignores_forwarded_for_unless_trusted() {
    let headers = forwarded("203.0.113.7");
    assert_eq!(caller_key(&headers, peer(), false), "192.168.1.20");
    assert_eq!(caller_key(&HeaderMap::new(), peer(), false), "192.168.1.20");
}

#[test]
fn trusted_caller_key_prefers_first_forwarded_hop() {
    assert_eq!(caller_key(&HeaderMap::new(), peer(), true), "192.168.1.20");
    assert_eq!(caller_key(&forwarded(" 203.0.113.7 , 10.0.0.1"), peer(), true), "203.0.113.7");
    assert_eq!(caller_key(&forwarded(""), peer(), true), "192.168.1.20");
}
