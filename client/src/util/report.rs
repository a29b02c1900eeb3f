//! Row-level presentation for the financial statements table.
//!
//! Pure derivations over `ReportLineItem`: which cells show a value, the
//! percent change between periods and its direction.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::fixtures;
use crate::state::financials::ReportLineItem;
use crate::util::format::{fixed1, format_full_currency, percent_change};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportTab {
    #[default]
    ProfitLoss,
    BalanceSheet,
    CashFlow,
}

impl ReportTab {
    pub const ALL: [Self; 3] = [Self::ProfitLoss, Self::BalanceSheet, Self::CashFlow];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ProfitLoss => "Profit & Loss",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow",
        }
    }

    /// Statement rows for this tab.
    #[must_use]
    pub fn rows(self) -> Vec<ReportLineItem> {
        match self {
            Self::ProfitLoss => fixtures::profit_and_loss(),
            Self::BalanceSheet => fixtures::balance_sheet(),
            Self::CashFlow => fixtures::cash_flow(),
        }
    }
}

/// Reporting period picker. Selecting a period does not change the figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    #[default]
    TrailingTwelveMonths,
    Q4,
    Q3,
    YearToDate,
    Annual,
}

impl ReportPeriod {
    pub const ALL: [Self; 5] = [Self::TrailingTwelveMonths, Self::Q4, Self::Q3, Self::YearToDate, Self::Annual];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::TrailingTwelveMonths => "ttm",
            Self::Q4 => "q4",
            Self::Q3 => "q3",
            Self::YearToDate => "ytd",
            Self::Annual => "annual",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TrailingTwelveMonths => "Trailing 12 Months",
            Self::Q4 => "Q4 2025",
            Self::Q3 => "Q3 2025",
            Self::YearToDate => "Year to Date",
            Self::Annual => "FY 2025",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

/// Display-ready cells for one statement row.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRowView {
    pub label: String,
    pub is_header: bool,
    pub is_total: bool,
    /// Left padding in pixels.
    pub padding_px: u32,
    /// Empty when the cell is blank.
    pub current: String,
    pub previous: String,
    /// `None` when the change column is blank for this row.
    pub change: Option<String>,
    pub direction: ChangeDirection,
}

impl ReportRowView {
    #[must_use]
    pub fn from_line(item: &ReportLineItem) -> Self {
        let padding_px = u32::from(item.indent) * 24 + 16;
        if item.is_header {
            return Self {
                label: item.label.clone(),
                is_header: true,
                is_total: false,
                padding_px,
                current: String::new(),
                previous: String::new(),
                change: None,
                direction: ChangeDirection::Flat,
            };
        }

        let change = if item.previous == 0.0 { 0.0 } else { percent_change(item.current, item.previous) };
        let direction = if change > 0.0 {
            ChangeDirection::Up
        } else if change < 0.0 {
            ChangeDirection::Down
        } else {
            ChangeDirection::Flat
        };
        let shows = |value: f64| value != 0.0 || item.is_total;
        let change_text = (shows(item.current) && item.previous != 0.0).then(|| {
            if change == 0.0 { "-".to_owned() } else { format!("{}%", fixed1(change.abs())) }
        });

        Self {
            label: item.label.clone(),
            is_header: false,
            is_total: item.is_total,
            padding_px,
            current: if shows(item.current) { format_full_currency(item.current) } else { String::new() },
            previous: if shows(item.previous) { format_full_currency(item.previous) } else { String::new() },
            change: change_text,
            direction,
        }
    }
}

/// Rows of `tab` ready for rendering.
#[must_use]
pub fn statement_rows(tab: ReportTab) -> Vec<ReportRowView> {
    tab.rows().iter().map(ReportRowView::from_line).collect()
}
