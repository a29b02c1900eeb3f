//! In-memory rate limiting for insight generation.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by caller (client address, or `"anonymous"` when unknown).
//! Two limits enforced:
//! - Per-caller: 10 generation requests/min
//! - Global: 30 LLM calls/min across all callers
//!
//! Both limits are checked before anything is recorded, so a refused request
//! never consumes quota. Callers whose window has emptied are swept out once
//! per per-caller window, so the map only holds recently active callers.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_PER_CALLER_LIMIT: usize = 10;
const DEFAULT_PER_CALLER_WINDOW_SECS: u64 = 60;

const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_caller_limit: usize,
    pub per_caller_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_caller_limit: DEFAULT_PER_CALLER_LIMIT,
            per_caller_window: Duration::from_secs(DEFAULT_PER_CALLER_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
        }
    }
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read `RATE_LIMIT_*` overrides through `lookup`; unparseable values
    /// fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        let limit = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };

        Self {
            per_caller_limit: limit("RATE_LIMIT_PER_CALLER", DEFAULT_PER_CALLER_LIMIT),
            per_caller_window: Duration::from_secs(parse(
                "RATE_LIMIT_PER_CALLER_WINDOW_SECS",
                DEFAULT_PER_CALLER_WINDOW_SECS,
            )),
            global_limit: limit("RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(parse("RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS)),
        }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-caller rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerCallerExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-caller request timestamps.
    caller_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
    last_sweep: Option<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    #[must_use]
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Check both per-caller and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns which limit would be exceeded; nothing is recorded in that case.
    pub fn check_and_record(&self, caller: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(caller, Instant::now())
    }

    fn check_and_record_at(&self, caller: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        if inner.last_sweep.is_none_or(|at| now.duration_since(at) >= cfg.per_caller_window) {
            inner.caller_requests.retain(|_, deque| {
                prune_window(deque, now, cfg.per_caller_window);
                !deque.is_empty()
            });
            inner.last_sweep = Some(now);
        }

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let caller_deque = inner.caller_requests.entry(caller.to_owned()).or_default();
        prune_window(caller_deque, now, cfg.per_caller_window);
        if caller_deque.len() >= cfg.per_caller_limit {
            return Err(RateLimitError::PerCallerExceeded {
                limit: cfg.per_caller_limit,
                window_secs: cfg.per_caller_window.as_secs(),
            });
        }

        caller_deque.push_back(now);
        inner.global_requests.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_callers(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .caller_requests
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
