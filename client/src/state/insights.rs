//! AI insight list with degrade-to-cache refresh.
//!
//! DESIGN
//! ======
//! A refresh is split into `begin_refresh` (before the network call) and
//! `finish_refresh` (after it), so the list is replaced in one step once the
//! generation call resolves. Failures, malformed replies, and empty replies
//! all keep the current list and raise the cached-data notice. There is no
//! retry loop.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use serde::{Deserialize, Serialize};

use crate::net::types::GeneratedInsight;
use crate::util::clock::Timestamp;

/// Shown when a refresh fails and the previous insights remain on screen.
pub const CACHED_INSIGHTS_NOTICE: &str = "Could not generate new insights. Using cached data.";

/// How many insights the compact dashboard card shows.
pub const COMPACT_LIMIT: usize = 4;

/// Priority class used for visual emphasis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    ActionRequired,
    Watch,
    Positive,
    #[default]
    Info,
}

impl Urgency {
    pub const ALL: [Self; 4] = [Self::ActionRequired, Self::Watch, Self::Positive, Self::Info];

    /// Lenient parse of a wire tag. Anything unrecognized is `Info`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim() {
            "action_required" => Self::ActionRequired,
            "watch" => Self::Watch,
            "positive" => Self::Positive,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActionRequired => "action_required",
            Self::Watch => "watch",
            Self::Positive => "positive",
            Self::Info => "info",
        }
    }
}

/// A single insight card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    pub category: String,
    pub metric: Option<String>,
    pub metric_value: Option<String>,
    pub created_at: String,
}

impl Insight {
    /// Map one generated insight into the card shape.
    ///
    /// The id combines the call timestamp and the position in the reply.
    #[must_use]
    pub fn from_generated(generated: GeneratedInsight, index: usize, now: Timestamp) -> Self {
        Self {
            id: format!("ai-{}-{index}", now.millis()),
            title: non_empty_or(generated.title, "Insight"),
            description: generated.description.unwrap_or_default(),
            urgency: generated
                .urgency
                .as_deref()
                .map_or(Urgency::Info, Urgency::parse_lenient),
            category: non_empty_or(generated.category, "General"),
            metric: generated.metric.filter(|m| !m.is_empty()),
            metric_value: generated.metric_value.filter(|m| !m.is_empty()),
            created_at: now.to_rfc3339(),
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Filter chip selection on the insights panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UrgencyFilter {
    #[default]
    All,
    Only(Urgency),
}

impl UrgencyFilter {
    pub const CHIPS: [Self; 5] = [
        Self::All,
        Self::Only(Urgency::ActionRequired),
        Self::Only(Urgency::Watch),
        Self::Only(Urgency::Positive),
        Self::Only(Urgency::Info),
    ];

    #[must_use]
    pub fn matches(self, urgency: Urgency) -> bool {
        match self {
            Self::All => true,
            Self::Only(u) => u == urgency,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(Urgency::ActionRequired) => "Action",
            Self::Only(Urgency::Watch) => "Watch",
            Self::Only(Urgency::Positive) => "Positive",
            Self::Only(Urgency::Info) => "Info",
        }
    }
}

/// Result of applying a finished refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with this many fresh insights.
    Replaced(usize),
    /// The call failed or returned nothing; the previous list stays.
    KeptCache,
}

/// Insight panel state shared by the dashboard card and the insights view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsightsState {
    pub items: Vec<Insight>,
    pub generating: bool,
    pub notice: Option<String>,
    pub filter: UrgencyFilter,
    pub expanded: Option<String>,
}

impl InsightsState {
    #[must_use]
    pub fn new(items: Vec<Insight>) -> Self {
        Self { items, ..Self::default() }
    }

    /// Mark a generation call in flight and clear any previous notice.
    pub fn begin_refresh(&mut self) {
        self.generating = true;
        self.notice = None;
    }

    /// Apply the result of a generation call.
    pub fn finish_refresh(&mut self, outcome: Result<Vec<GeneratedInsight>, String>, now: Timestamp) -> RefreshOutcome {
        self.generating = false;
        match outcome {
            Ok(generated) if !generated.is_empty() => {
                self.items = generated
                    .into_iter()
                    .enumerate()
                    .map(|(index, g)| Insight::from_generated(g, index, now))
                    .collect();
                self.expanded = None;
                RefreshOutcome::Replaced(self.items.len())
            }
            Ok(_) | Err(_) => {
                self.notice = Some(CACHED_INSIGHTS_NOTICE.to_owned());
                RefreshOutcome::KeptCache
            }
        }
    }

    /// Insights passing the current filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Insight> {
        self.items
            .iter()
            .filter(|i| self.filter.matches(i.urgency))
            .collect()
    }

    /// Insights for one panel. The compact dashboard card always shows the
    /// first `COMPACT_LIMIT` insights; the urgency filter only applies to the
    /// full view.
    #[must_use]
    pub fn visible(&self, compact: bool) -> Vec<&Insight> {
        if compact {
            return self.items.iter().take(COMPACT_LIMIT).collect();
        }
        self.filtered()
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    #[must_use]
    pub fn count_by_urgency(&self, urgency: Urgency) -> usize {
        self.items.iter().filter(|i| i.urgency == urgency).count()
    }
}
