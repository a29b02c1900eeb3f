//! Financial fixture record shapes: metric cards, monthly trend points and
//! report line items.

use serde::{Deserialize, Serialize};

/// How a metric card renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    Currency,
    Percentage,
    Number,
    Days,
}

/// Direction of a metric relative to the prior period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A headline KPI on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub id: String,
    pub title: String,
    pub value: f64,
    pub previous_value: f64,
    pub format: MetricFormat,
    pub trend: Trend,
    /// Whether movement in `trend`'s direction is favorable (expenses going up is not).
    pub trend_is_good: bool,
    pub icon: String,
    pub color: String,
}

/// One month of the trailing-twelve-month trend chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub cash: f64,
}

/// A row of a financial statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLineItem {
    pub label: String,
    pub current: f64,
    pub previous: f64,
    #[serde(default)]
    pub is_header: bool,
    #[serde(default)]
    pub is_total: bool,
    #[serde(default)]
    pub indent: u8,
}
