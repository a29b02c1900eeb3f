//! Visual configuration keyed by closed enums.
//!
//! Every table is an exhaustive `match`, so adding a variant to `Urgency`,
//! `ConnectionStatus`, `ClientStatus` or `NoticeKind` fails to compile until it
//! has a style here.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::state::app::NoticeKind;
use crate::state::clients::{ClientStatus, ConnectionStatus};
use crate::state::financials::{MetricCard, MetricFormat};
use crate::state::insights::Urgency;
use crate::util::format::{format_currency, format_percentage};

/// Color family; rendered as a `--{tone}` BEM modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Muted,
}

impl Tone {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Muted => "muted",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

impl DisplayStyle {
    /// `block` plus its tone modifier, e.g. `badge badge--success`.
    #[must_use]
    pub fn class(&self, block: &str) -> String {
        format!("{block} {block}--{}", self.tone.modifier())
    }
}

#[must_use]
pub fn urgency_style(urgency: Urgency) -> DisplayStyle {
    match urgency {
        Urgency::ActionRequired => DisplayStyle { label: "Action Required", icon: "⚠", tone: Tone::Danger },
        Urgency::Watch => DisplayStyle { label: "Watch Closely", icon: "◉", tone: Tone::Warning },
        Urgency::Positive => DisplayStyle { label: "Positive Trend", icon: "↗", tone: Tone::Success },
        Urgency::Info => DisplayStyle { label: "Information", icon: "ℹ", tone: Tone::Info },
    }
}

#[must_use]
pub fn connection_style(status: ConnectionStatus) -> DisplayStyle {
    match status {
        ConnectionStatus::Connected => DisplayStyle { label: "Connected", icon: "✓", tone: Tone::Success },
        ConnectionStatus::Disconnected => DisplayStyle { label: "Disconnected", icon: "✕", tone: Tone::Muted },
        ConnectionStatus::Expired => DisplayStyle { label: "Expired", icon: "!", tone: Tone::Warning },
        ConnectionStatus::Error => DisplayStyle { label: "Error", icon: "✕", tone: Tone::Danger },
    }
}

#[must_use]
pub fn client_status_style(status: ClientStatus) -> DisplayStyle {
    match status {
        ClientStatus::Active => DisplayStyle { label: status.label(), icon: "●", tone: Tone::Success },
        ClientStatus::Inactive => DisplayStyle { label: status.label(), icon: "○", tone: Tone::Muted },
        ClientStatus::Pending => DisplayStyle { label: status.label(), icon: "◐", tone: Tone::Warning },
    }
}

#[must_use]
pub fn notice_style(kind: NoticeKind) -> DisplayStyle {
    match kind {
        NoticeKind::Success => DisplayStyle { label: "Success", icon: "✓", tone: Tone::Success },
        NoticeKind::Info => DisplayStyle { label: "Info", icon: "ℹ", tone: Tone::Info },
        NoticeKind::Warning => DisplayStyle { label: "Warning", icon: "!", tone: Tone::Warning },
        NoticeKind::Error => DisplayStyle { label: "Error", icon: "✕", tone: Tone::Danger },
    }
}

/// Glyph for a metric card's icon name. Unknown names get a neutral dot.
#[must_use]
pub fn metric_icon(name: &str) -> &'static str {
    match name {
        "dollar-sign" => "$",
        "credit-card" => "▭",
        "trending-up" => "↗",
        "pie-chart" => "◔",
        "wallet" => "▣",
        "file-text" => "≡",
        _ => "•",
    }
}

/// Headline value of a metric card in its own format.
#[must_use]
pub fn metric_value(card: &MetricCard) -> String {
    match card.format {
        MetricFormat::Currency => format_currency(card.value),
        MetricFormat::Percentage => format_percentage(card.value),
        MetricFormat::Number => format!("{}", card.value.round()),
        MetricFormat::Days => format!("{} days", card.value.round()),
    }
}

/// Tone of a metric's change badge: green when the move is the good direction.
#[must_use]
pub fn metric_change_tone(card: &MetricCard) -> Tone {
    let rising = card.value > card.previous_value;
    let falling = card.value < card.previous_value;
    if !rising && !falling {
        Tone::Muted
    } else if rising == card.trend_is_good {
        Tone::Success
    } else {
        Tone::Danger
    }
}
