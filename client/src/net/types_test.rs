use super::*;

#[test]
fn identity_config_endpoint_joins_single_slash() {
    let cfg = IdentityConfig { identity_url: "https://id.example.test/".into(), identity_anon_key: "anon".into() };
    assert_eq!(cfg.endpoint("/auth/v1/signup"), "https://id.example.test/auth/v1/signup");
    assert_eq!(cfg.endpoint("auth/v1/logout"), "https://id.example.test/auth/v1/logout");
}

#[test]
fn identity_config_requires_url_and_key() {
    assert!(!IdentityConfig::default().is_configured());
    let cfg = IdentityConfig { identity_url: "https://id.example.test".into(), identity_anon_key: " ".into() };
    assert!(!cfg.is_configured());
    let cfg = IdentityConfig { identity_url: "https://id.example.test".into(), identity_anon_key: "anon".into() };
    assert!(cfg.is_configured());
}

#[test]
fn identity_config_deserializes_camel_case() {
    let cfg: IdentityConfig =
        serde_json::from_str(r#"{"identityUrl":"https://id.example.test","identityAnonKey":"k"}"#).unwrap();
    assert_eq!(cfg.identity_url, "https://id.example.test");
    assert_eq!(cfg.identity_anon_key, "k");
}

#[test]
fn fixture_snapshot_carries_six_metrics_and_twelve_months() {
    let snapshot = FinancialSnapshot::from_fixture();
    assert_eq!(snapshot.metrics.len(), 6);
    assert_eq!(snapshot.monthly_trend.len(), 12);
    assert_eq!(snapshot.metrics[0].title, "Total Revenue");
    assert!((snapshot.metrics[0].value - 487_250.0).abs() < f64::EPSILON);
    assert!((snapshot.metrics[0].previous_value - 435_800.0).abs() < f64::EPSILON);
}

#[test]
fn insight_request_uses_wire_field_names() {
    let request = InsightRequest { financial_data: FinancialSnapshot::from_fixture() };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("financialData").is_some());
    assert!(value["financialData"].get("monthlyTrend").is_some());
    assert!(value["financialData"]["metrics"][0].get("previousValue").is_some());
    assert_eq!(value["financialData"]["monthlyTrend"][0]["month"], "Mar");
}

#[test]
fn generated_insight_tolerates_missing_fields() {
    let reply: InsightResponse =
        serde_json::from_str(r#"{"insights":[{"title":"Cash is up"},{"metricValue":"YoY"}]}"#).unwrap();
    assert_eq!(reply.insights.len(), 2);
    assert_eq!(reply.insights[0].title.as_deref(), Some("Cash is up"));
    assert!(reply.insights[0].urgency.is_none());
    assert_eq!(reply.insights[1].metric_value.as_deref(), Some("YoY"));
}

#[test]
fn insight_response_without_list_is_empty() {
    let reply: InsightResponse = serde_json::from_str("{}").unwrap();
    assert!(reply.insights.is_empty());
}
