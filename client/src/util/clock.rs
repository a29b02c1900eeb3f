//! Wall-clock timestamps shared by state reducers and formatters.
//!
//! DESIGN
//! ======
//! Reducers never read the clock themselves; callers pass a `Timestamp` in so
//! tests can pin time. Only `Timestamp::now` touches the environment, using
//! `js_sys::Date` in the browser and `SystemTime` elsewhere.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Milliseconds since the Unix epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current wall-clock time.
    pub fn now() -> Self {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            Self(js_sys::Date::now() as i64)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let ms = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));
            Self(ms)
        }
    }

    #[must_use]
    pub fn millis(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn seconds(self) -> i64 {
        self.0.div_euclid(1000)
    }

    fn to_datetime(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000).ok()
    }

    /// Full RFC 3339 rendering, e.g. `2026-02-16T06:30:00Z`.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        self.to_datetime()
            .and_then(|dt| dt.format(&Rfc3339).ok())
            .unwrap_or_default()
    }

    /// Calendar date only, e.g. `2026-02-16`.
    #[must_use]
    pub fn to_iso_date(self) -> String {
        let fmt = format_description!("[year]-[month]-[day]");
        self.to_datetime()
            .and_then(|dt| dt.format(&fmt).ok())
            .unwrap_or_default()
    }

    /// Parse an RFC 3339 timestamp. Returns `None` for empty or malformed input.
    #[must_use]
    pub fn parse_rfc3339(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let dt = OffsetDateTime::parse(trimmed, &Rfc3339).ok()?;
        let ms = dt.unix_timestamp_nanos() / 1_000_000;
        i64::try_from(ms).ok().map(Self)
    }
}
