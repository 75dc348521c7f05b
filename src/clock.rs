// src/clock.rs
//! Timestamps: current time at a fixed +05:30 (IST) offset, ISO-8601.

use chrono::{FixedOffset, SecondsFormat, Utc};
use once_cell::sync::Lazy;

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

// Fixed offset, no tz database. Built once per process.
static IST: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(IST_OFFSET_SECS).expect("valid IST offset"));

/// Current time in IST as an ISO-8601 string, e.g. `2025-01-02T10:04:05.123456+05:30`.
pub fn ist_now_iso() -> String {
    Utc::now()
        .with_timezone(&*IST)
        .to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_carries_ist_offset() {
        let ts = ist_now_iso();
        assert!(ts.contains('T'), "missing date/time separator: {ts}");
        assert!(ts.ends_with("+05:30"), "missing IST offset: {ts}");
    }

    #[test]
    fn timestamp_parses_back_as_rfc3339() {
        let ts = ist_now_iso();
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).expect("rfc3339");
        assert_eq!(parsed.offset().local_minus_utc(), IST_OFFSET_SECS);
    }
}
