use std::collections::HashMap;

use super::*;

fn small_limiter(per_caller: usize, global: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig {
        per_caller_limit: per_caller,
        per_caller_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_caller_allows_up_to_limit() {
    let rl = small_limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at("10.0.0.1", now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at("10.0.0.1", now),
        Err(RateLimitError::PerCallerExceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn global_allows_up_to_limit() {
    let rl = small_limiter(100, 4);
    let now = Instant::now();

    for i in 0..4 {
        let caller = format!("caller-{i}");
        assert!(rl.check_and_record_at(&caller, now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("caller-new", now),
        Err(RateLimitError::GlobalExceeded { limit: 4, .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = small_limiter(2, 100);
    let start = Instant::now();

    rl.check_and_record_at("a", start).unwrap();
    rl.check_and_record_at("a", start).unwrap();
    assert!(rl.check_and_record_at("a", start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at("a", after_window).is_ok());
}

#[test]
fn distinct_callers_do_not_interfere() {
    let rl = small_limiter(1, 100);
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    assert!(rl.check_and_record_at("a", now).is_err());
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn refused_request_consumes_no_global_quota() {
    let rl = small_limiter(1, 2);
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    assert!(rl.check_and_record_at("a", now).is_err());
    // The refused request above must not count toward the global window.
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn idle_callers_are_swept_after_their_window() {
    let rl = small_limiter(10, 10_000);
    let start = Instant::now();

    for i in 0..5_000 {
        rl.check_and_record_at(&format!("10.0.{}.{}", i / 256, i % 256), start).unwrap();
    }
    assert_eq!(rl.tracked_callers(), 5_000);

    let an_hour_later = start + Duration::from_secs(3_600);
    rl.check_and_record_at("10.9.9.9", an_hour_later).unwrap();
    assert_eq!(rl.tracked_callers(), 1);
}

#[test]
fn sweep_keeps_callers_still_inside_their_window() {
    let rl = small_limiter(1, 100);
    let start = Instant::now();

    rl.check_and_record_at("old", start).unwrap();
    let later = start + Duration::from_secs(50);
    rl.check_and_record_at("recent", later).unwrap();

    let after_first_window = start + Duration::from_secs(61);
    rl.check_and_record_at("new", after_first_window).unwrap();
    assert_eq!(rl.tracked_callers(), 2);
    assert!(rl.check_and_record_at("recent", after_first_window).is_err());
}

#[test]
fn config_defaults_and_overrides() {
    assert_eq!(RateLimitConfig::from_lookup(|_| None), RateLimitConfig::default());

    let vars: HashMap<&str, &str> = HashMap::from([
        ("RATE_LIMIT_PER_CALLER", "5"),
        ("RATE_LIMIT_GLOBAL_WINDOW_SECS", "120"),
        ("RATE_LIMIT_GLOBAL", "not-a-number"),
    ]);
    let cfg = RateLimitConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()));
    assert_eq!(cfg.per_caller_limit, 5);
    assert_eq!(cfg.global_window, Duration::from_secs(120));
    assert_eq!(cfg.global_limit, DEFAULT_GLOBAL_LIMIT);
}
