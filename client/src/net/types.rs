//! Wire DTOs shared with the server and the identity provider.
//!
//! DESIGN
//! ======
//! Field names are camelCase on the wire to match the browser-era payloads
//! the insight endpoint was built around. Every inbound field the generator
//! may omit is optional so a partial reply still maps into an insight.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::fixtures;
use crate::state::financials::{ChartPoint, MetricCard};

/// Public identity-provider settings served by `GET /api/config`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfig {
    /// Base URL of the identity service, without a trailing slash.
    pub identity_url: String,
    /// Publishable (anon) key sent as the `apikey` header.
    pub identity_anon_key: String,
}

impl IdentityConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.identity_url.trim().is_empty() && !self.identity_anon_key.trim().is_empty()
    }

    /// Join `path` onto the identity base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.identity_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// One metric as sent to the insight generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetric {
    pub title: String,
    pub value: f64,
    pub previous_value: f64,
}

impl From<&MetricCard> for SnapshotMetric {
    fn from(card: &MetricCard) -> Self {
        Self { title: card.title.clone(), value: card.value, previous_value: card.previous_value }
    }
}

/// Current metrics and monthly trend sent to the insight generator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub metrics: Vec<SnapshotMetric>,
    pub monthly_trend: Vec<ChartPoint>,
}

impl FinancialSnapshot {
    #[must_use]
    pub fn new(metrics: &[MetricCard], monthly_trend: &[ChartPoint]) -> Self {
        Self { metrics: metrics.iter().map(SnapshotMetric::from).collect(), monthly_trend: monthly_trend.to_vec() }
    }

    /// Snapshot of the bundled dashboard fixture.
    #[must_use]
    pub fn from_fixture() -> Self {
        Self::new(&fixtures::metrics(), &fixtures::monthly_chart())
    }
}

/// Request body for `POST /api/insights/generate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub financial_data: FinancialSnapshot,
}

/// One insight as returned by the generator; every field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInsight {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub metric_value: Option<String>,
}

/// Response body for `POST /api/insights/generate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResponse {
    #[serde(default)]
    pub insights: Vec<GeneratedInsight>,
}
