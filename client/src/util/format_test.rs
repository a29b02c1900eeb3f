use super::*;

// =============================================================
// percent_change
// =============================================================

#[test]
fn percent_change_increase() {
    assert!((percent_change(110.0, 100.0) - 10.0).abs() < 1e-9);
}

#[test]
fn percent_change_decrease() {
    assert!((percent_change(90.0, 100.0) + 10.0).abs() < 1e-9);
}

#[test]
fn percent_change_zero_previous_is_zero() {
    for current in [0.0, 1.0, -250.0, 487_250.0] {
        assert_eq!(percent_change(current, 0.0), 0.0);
    }
}

#[test]
fn percent_change_uses_absolute_previous() {
    // Interest expense moving from -1500 to -1200 is an improvement.
    assert!((percent_change(-1200.0, -1500.0) - 20.0).abs() < 1e-9);
}

#[test]
fn format_percent_change_signs_and_rounds() {
    assert_eq!(format_percent_change(110.0, 100.0), "+10.0%");
    assert_eq!(format_percent_change(90.0, 100.0), "-10.0%");
    assert_eq!(format_percent_change(100.0, 100.0), "+0.0%");
    assert_eq!(format_percent_change(487_250.0, 435_800.0), "+11.8%");
}

#[test]
fn format_percent_change_zero_previous_is_na() {
    assert_eq!(format_percent_change(5.0, 0.0), "N/A");
}

// =============================================================
// currency
// =============================================================

#[test]
fn format_currency_compacts_thousands_and_millions() {
    assert_eq!(format_currency(487_260.0), "$487.3K");
    assert_eq!(format_currency(1_260_000.0), "$1.3M");
    assert_eq!(format_currency(950.0), "$950");
    assert_eq!(format_currency(-13_600.0), "$-13.6K");
    assert_eq!(format_currency(-1_240_000.0), "$-1.2M");
    assert_eq!(format_currency(-950.0), "-$950");
}

#[test]
fn one_decimal_ties_round_away_from_zero() {
    assert_eq!(format_currency(487_250.0), "$487.3K");
    assert_eq!(format_currency(1_250_000.0), "$1.3M");
    assert_eq!(fixed1(-2.25), "-2.3");
    assert_eq!(fixed1(0.75), "0.8");
}

#[test]
fn one_decimal_rounds_stored_value_not_scaled_value() {
    assert_eq!(fixed1(0.15), "0.1");
    assert_eq!(fixed1(1.45), "1.4");
    assert_eq!(fixed1(-0.15), "-0.1");
    assert_eq!(fixed1(11.78), "11.8");
}

#[test]
fn format_full_currency_groups_thousands() {
    assert_eq!(format_full_currency(487_250.0), "$487,250");
    assert_eq!(format_full_currency(1_234_567.0), "$1,234,567");
    assert_eq!(format_full_currency(0.0), "$0");
    assert_eq!(format_full_currency(-1200.0), "-$1,200");
    assert_eq!(format_full_currency(999.0), "$999");
}

#[test]
fn format_percentage_one_decimal() {
    assert_eq!(format_percentage(29.8), "29.8%");
}

// =============================================================
// time_ago
// =============================================================

const NOW: Timestamp = Timestamp(1_771_223_400_000); // 2026-02-16T06:30:00Z

#[test]
fn time_ago_missing_is_never() {
    assert_eq!(time_ago(None, NOW), "Never");
    assert_eq!(time_ago(Some(""), NOW), "Never");
    assert_eq!(time_ago(Some("not a date"), NOW), "Never");
}

#[test]
fn time_ago_buckets() {
    assert_eq!(time_ago(Some("2026-02-16T06:29:30Z"), NOW), "Just now");
    assert_eq!(time_ago(Some("2026-02-16T06:25:00Z"), NOW), "5m ago");
    assert_eq!(time_ago(Some("2026-02-16T03:30:00Z"), NOW), "3h ago");
    assert_eq!(time_ago(Some("2026-02-10T12:00:00Z"), NOW), "5d ago");
}

#[test]
fn time_ago_future_is_just_now() {
    assert_eq!(time_ago(Some("2026-02-17T00:00:00Z"), NOW), "Just now");
}
