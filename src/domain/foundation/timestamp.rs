//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Sub-second digits kept; matches PostgreSQL `TIMESTAMPTZ`.
const SUBSEC_DIGITS: u16 = 6;

/// Immutable point in time, always UTC, at microsecond precision.
///
/// Every constructor truncates to microseconds so a value reads back from
/// PostgreSQL unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    ///
    /// Use cases never call this directly; they read time through the `Clock` port.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>, dropping nanoseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(SUBSEC_DIGITS))
    }

    /// Parses an RFC 3339 string such as `2050-01-01T10:00:00.000Z`.
    pub fn parse_rfc3339(value: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::from_datetime(
            DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc),
        ))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns a new timestamp offset by the given duration, or `None` if it
    /// falls outside the representable range.
    pub fn checked_plus(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self::from_datetime)
    }

    /// Formats the timestamp as RFC 3339.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DateTime::<Utc>::deserialize(deserializer).map(Self::from_datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn at(value: &str) -> Timestamp {
        Timestamp::parse_rfc3339(value).unwrap()
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn parse_rfc3339_accepts_millisecond_precision() {
        let ts = at("2050-01-01T10:00:00.000Z");
        assert_eq!(ts.as_datetime().year(), 2050);
        assert_eq!(ts.as_datetime().hour(), 10);
    }

    #[test]
    fn parse_rfc3339_normalizes_offsets_to_utc() {
        let ts = at("2024-01-10T12:00:00+02:00");
        assert_eq!(ts, at("2024-01-10T10:00:00Z"));
    }

    #[test]
    fn parse_rfc3339_rejects_garbage() {
        assert!(Timestamp::parse_rfc3339("next tuesday").is_err());
    }

    #[test]
    fn ordering_helpers_agree_with_ord() {
        let start = at("2024-01-10T10:00:00Z");
        let end = at("2024-01-10T11:00:00Z");

        assert!(start.is_before(&end));
        assert!(end.is_after(&start));
        assert!(start < end);
        assert!(!start.is_before(&start));
    }

    #[test]
    fn checked_plus_offsets_by_duration() {
        let ts = at("2024-01-01T00:00:00Z").checked_plus(Duration::days(3));
        assert_eq!(ts, Some(at("2024-01-04T00:00:00Z")));
    }

    #[test]
    fn checked_plus_returns_none_past_the_calendar() {
        let now = at("2024-01-01T00:00:00Z");
        assert_eq!(now.checked_plus(Duration::hours(3_000_000_000)), None);
    }

    #[test]
    fn parse_rfc3339_drops_nanoseconds() {
        let ts = at("2050-01-01T10:00:00.123456789Z");
        assert_eq!(ts, at("2050-01-01T10:00:00.123456Z"));
        assert_eq!(ts.as_datetime().timestamp_subsec_nanos(), 123_456_000);
    }

    #[test]
    fn deserialize_drops_nanoseconds() {
        let ts: Timestamp = serde_json::from_str("\"2050-01-01T10:00:00.123456789Z\"").unwrap();
        assert_eq!(ts, at("2050-01-01T10:00:00.123456Z"));
    }

    #[test]
    fn microseconds_survive_untouched() {
        let ts = at("2050-01-01T10:00:00.000001Z");
        assert_eq!(ts.as_datetime().timestamp_subsec_micros(), 1);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let json = serde_json::to_string(&at("2024-01-15T10:30:00Z")).unwrap();
        assert!(json.contains("2024-01-15"));
    }
}
