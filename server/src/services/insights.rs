//! Insight service: financial snapshot → LLM → structured insights.
//!
//! DESIGN
//! ======
//! One request, one LLM call. The snapshot is rendered into a plain-text
//! brief and the model is asked for a JSON array. The provider layer makes
//! sure the reply starts at the JSON, which is either the array or an
//! `{"insights": [...]}` object; only text after that value is ignored.

use std::fmt::Write;
use std::sync::Arc;

use axum::http::StatusCode;
use client::net::types::{FinancialSnapshot, GeneratedInsight};
use tracing::{info, warn};

use crate::llm::JsonModel;
use crate::llm::types::{ListPrompt, LlmError};
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

const MAX_INSIGHTS: usize = 8;
const LIST_KEY: &str = "insights";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("insight generation is not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("could not read insights from model reply: {0}")]
    Parse(String),
    #[error("model returned no insights")]
    Empty,
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
    #[error("invalid financial data: {0}")]
    InvalidSnapshot(String),
}

impl InsightError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Llm(_) | Self::Parse(_) | Self::Empty => StatusCode::BAD_GATEWAY,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidSnapshot(_) => StatusCode::BAD_REQUEST,
        }
    }

    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable()) || matches!(self, Self::RateLimited(_) | Self::Empty)
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Generate insights for `snapshot` on behalf of `caller`.
///
/// # Errors
///
/// See [`InsightError`]; each variant carries its own HTTP status.
pub async fn generate(
    state: &AppState,
    caller: &str,
    snapshot: &FinancialSnapshot,
) -> Result<Vec<GeneratedInsight>, InsightError> {
    validate_snapshot(snapshot)?;
    let llm: &Arc<dyn JsonModel> = state.llm.as_ref().ok_or(InsightError::LlmNotConfigured)?;
    state.rate_limiter.check_and_record(caller)?;

    info!(
        caller,
        metrics = snapshot.metrics.len(),
        months = snapshot.monthly_trend.len(),
        "insights: generation requested"
    );

    let system = build_system_prompt();
    let user = build_user_message(snapshot);
    let prompt = ListPrompt { system: &system, user: &user, max_tokens: state.config.insights_max_tokens, list_key: LIST_KEY };
    let reply = llm.generate_list(&prompt).await?;

    info!(
        model = %reply.model,
        truncated = reply.truncated,
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        total_tokens = reply.total_tokens(),
        "insights: LLM response"
    );

    let insights = match parse_insights(&reply.json) {
        Ok(insights) => insights,
        Err(e) => {
            warn!(error = %e, truncated = reply.truncated, reply_len = reply.json.len(), "insights: unusable reply");
            return Err(e);
        }
    };

    info!(count = insights.len(), "insights: generated");
    Ok(insights)
}

// =============================================================================
// VALIDATION
// =============================================================================

pub(crate) fn validate_snapshot(snapshot: &FinancialSnapshot) -> Result<(), InsightError> {
    if snapshot.metrics.is_empty() && snapshot.monthly_trend.is_empty() {
        return Err(InsightError::InvalidSnapshot("no metrics or monthly trend supplied".into()));
    }
    if let Some(metric) = snapshot.metrics.iter().find(|m| m.title.trim().is_empty()) {
        return Err(InsightError::InvalidSnapshot(format!("metric with value {} has no title", metric.value)));
    }
    Ok(())
}

// =============================================================================
// PROMPTS
// =============================================================================

pub(crate) fn build_system_prompt() -> String {
    format!(
        "You are PrimeCFO, a fractional CFO advising small-business owners.\n\
         Review the financial data you are given and write between 4 and {MAX_INSIGHTS} insights.\n\
         Each insight must be concrete, cite the numbers it relies on, and suggest what to do next.\n\n\
         Reply with a JSON array only, no prose and no code fences. Each element is an object with:\n\
         - \"title\": short headline\n\
         - \"description\": two or three sentences\n\
         - \"urgency\": one of \"action_required\", \"watch\", \"positive\", \"info\"\n\
         - \"category\": e.g. \"Cash Flow\", \"Revenue\", \"Expenses\", \"Profitability\"\n\
         - \"metric\": the metric the insight is about\n\
         - \"metricValue\": the key figure, formatted for display (e.g. \"$45.2K\", \"-12.5%\")\n"
    )
}

pub(crate) fn build_user_message(snapshot: &FinancialSnapshot) -> String {
    let mut out = String::from("Current metrics (value vs previous period):\n");
    if snapshot.metrics.is_empty() {
        out.push_str("(none supplied)\n");
    }
    for metric in &snapshot.metrics {
        let change = percent_change(metric.value, metric.previous_value)
            .map_or_else(|| "n/a".to_owned(), |pct| format!("{pct:+.1}%"));
        let _ = writeln!(
            out,
            "- {}: {:.2} (previous {:.2}, change {change})",
            metric.title, metric.value, metric.previous_value
        );
    }

    out.push_str("\nMonthly trend (month | revenue | expenses | profit | cash):\n");
    if snapshot.monthly_trend.is_empty() {
        out.push_str("(none supplied)\n");
    }
    for point in &snapshot.monthly_trend {
        let _ = writeln!(
            out,
            "{} | {:.0} | {:.0} | {:.0} | {:.0}",
            point.month, point.revenue, point.expenses, point.profit, point.cash
        );
    }
    out
}

fn percent_change(current: f64, previous: f64) -> Option<f64> {
    (previous.abs() > f64::EPSILON).then(|| (current - previous) / previous.abs() * 100.0)
}

// =============================================================================
// REPLY PARSING
// =============================================================================

/// Decode the JSON array (or `{"insights": [...]}` object) at the start of
/// `json`.
///
/// Elements with neither a title nor a description are dropped, and at most
/// [`MAX_INSIGHTS`] are kept.
pub(crate) fn parse_insights(json: &str) -> Result<Vec<GeneratedInsight>, InsightError> {
    let insights: Vec<GeneratedInsight> = decode_list(json)?
        .into_iter()
        .filter(|insight| has_text(insight.title.as_deref()) || has_text(insight.description.as_deref()))
        .take(MAX_INSIGHTS)
        .collect();
    if insights.is_empty() {
        return Err(InsightError::Empty);
    }
    Ok(insights)
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum InsightList {
    Bare(Vec<GeneratedInsight>),
    Keyed { insights: Vec<GeneratedInsight> },
}

fn decode_list(json: &str) -> Result<Vec<GeneratedInsight>, InsightError> {
    let json = json.trim_start();
    if json.is_empty() {
        return Err(InsightError::Empty);
    }
    // Only the first value counts; models sometimes add a remark after it.
    let list = serde_json::Deserializer::from_str(json)
        .into_iter::<InsightList>()
        .next()
        .ok_or(InsightError::Empty)?
        .map_err(|e| InsightError::Parse(e.to_string()))?;
    Ok(match list {
        InsightList::Bare(items) | InsightList::Keyed { insights: items } => items,
    })
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
