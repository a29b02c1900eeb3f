//! Number, currency, and relative-time formatting for dashboard panels.
//!
//! `percent_change` is the one piece of numeric logic the reports rely on; a
//! zero previous value always yields `0` (and `"N/A"` in the text form) rather
//! than an infinite or NaN change.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use super::clock::Timestamp;

/// Relative change from `previous` to `current`, in percent.
///
/// The denominator is `|previous|`, so a move from -100 to -50 reads as +50%.
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / previous.abs()) * 100.0
}

/// Signed one-decimal percent change, e.g. `+11.8%`, or `N/A` when `previous` is zero.
#[must_use]
pub fn format_percent_change(current: f64, previous: f64) -> String {
    if previous == 0.0 {
        return "N/A".to_owned();
    }
    let change = percent_change(current, previous);
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", fixed1(change))
}

/// Compact currency for metric cards: `$1.2M`, `$487.3K`, `$950`.
///
/// Compact negatives keep the sign after the dollar (`$-13.6K`); below a
/// thousand the full form is used (`-$950`).
#[must_use]
pub fn format_currency(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        return format!("${}M", fixed1(value / 1_000_000.0));
    }
    if magnitude >= 1_000.0 {
        return format!("${}K", fixed1(value / 1_000.0));
    }
    format_full_currency(value)
}

/// Whole-dollar currency with thousands separators: `$487,250`, `-$1,200`.
#[must_use]
pub fn format_full_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rounded.abs() as u64;
    format!("{sign}${}", group_thousands(whole))
}

/// Percent with one decimal and no sign, e.g. `29.8%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{}%", fixed1(value))
}

/// One decimal place, rounding the exact binary value.
///
/// Exact ties go away from zero (`487.25` -> `487.3`, `-2.25` -> `-2.3`);
/// values that only look like ties round by their true value (`0.15` is
/// stored just below, so it gives `0.1`).
#[must_use]
pub fn fixed1(value: f64) -> String {
    let scaled = value * 10.0;
    let product_is_exact = value.mul_add(10.0, -scaled) == 0.0;
    if product_is_exact && scaled.fract().abs() == 0.5 {
        return format!("{:.1}", scaled.round() / 10.0);
    }
    format!("{value:.1}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable age of an RFC 3339 timestamp relative to `now`.
///
/// Missing or unparseable timestamps read as `Never`; future timestamps read
/// as `Just now`.
#[must_use]
pub fn time_ago(timestamp: Option<&str>, now: Timestamp) -> String {
    let Some(then) = timestamp.and_then(Timestamp::parse_rfc3339) else {
        return "Never".to_owned();
    };
    let diff_mins = (now.millis() - then.millis()).div_euclid(60_000);
    if diff_mins < 1 {
        return "Just now".to_owned();
    }
    if diff_mins < 60 {
        return format!("{diff_mins}m ago");
    }
    let diff_hours = diff_mins / 60;
    if diff_hours < 24 {
        return format!("{diff_hours}h ago");
    }
    format!("{}d ago", diff_hours / 24)
}
