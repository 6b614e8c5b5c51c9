//! Plain value types produced by the extraction views.
//!
//! These carry no reference to the XML tree and can outlive it.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Geographic coordinates of a forecast location.
///
/// Coordinates that are missing or not numeric in the source are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

/// One applicability window of a forecast value.
///
/// The instant keeps the literal UTC offset written in the source, and the
/// offset is also exposed in seconds east of UTC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidTimeInterval {
    pub start: DateTime<FixedOffset>,
    pub start_offset_seconds: i32,
    pub start_raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_raw: Option<String>,
}

impl ValidTimeInterval {
    /// Create an open interval with only a start.
    #[must_use]
    pub fn starting(start: DateTime<FixedOffset>, raw: impl Into<String>) -> Self {
        Self {
            start,
            start_offset_seconds: start.offset().local_minus_utc(),
            start_raw: raw.into(),
            end: None,
            end_offset_seconds: None,
            end_raw: None,
        }
    }

    /// Close the interval.
    #[must_use]
    pub fn with_end(mut self, end: DateTime<FixedOffset>, raw: impl Into<String>) -> Self {
        self.end = Some(end);
        self.end_offset_seconds = Some(end.offset().local_minus_utc());
        self.end_raw = Some(raw.into());
        self
    }

    /// Whether an end time was paired with this interval.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }
}

/// Metadata encoded in a `k-period-times-seq` layout key.
///
/// All fields are best-effort: a key that doesn't follow the convention
/// leaves the missing positions empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLayoutKey {
    pub period: Option<String>,
    pub times: Option<String>,
    pub seq: Option<i64>,
}

/// A numeric sample paired with its valid time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericEntry<'s> {
    pub time: &'s ValidTimeInterval,
    pub value: f64,
}

/// A condition icon paired with its valid time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconEntry<'s> {
    pub time: &'s ValidTimeInterval,
    pub url: &'s str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn test_interval_keeps_offset() {
        let interval = ValidTimeInterval::starting(
            ts("2024-01-15T06:00:00-05:00"),
            "2024-01-15T06:00:00-05:00",
        );
        assert_eq!(interval.start_offset_seconds, -5 * 3600);
        assert_eq!(interval.start.to_rfc3339(), "2024-01-15T06:00:00-05:00");
        assert!(!interval.is_closed());
    }

    #[test]
    fn test_interval_with_end() {
        let interval = ValidTimeInterval::starting(ts("2024-01-15T06:00:00+09:30"), "a")
            .with_end(ts("2024-01-15T18:00:00+00:00"), "b");
        assert!(interval.is_closed());
        assert_eq!(interval.start_offset_seconds, 9 * 3600 + 1800);
        assert_eq!(interval.end_offset_seconds, Some(0));
        assert_eq!(interval.end_raw.as_deref(), Some("b"));
    }

    #[test]
    fn test_open_interval_serialization_omits_end() {
        let interval = ValidTimeInterval::starting(
            ts("2024-01-15T06:00:00-05:00"),
            "2024-01-15T06:00:00-05:00",
        );
        let json = serde_json::to_value(&interval).unwrap();
        assert_eq!(json["start"], "2024-01-15T06:00:00-05:00");
        assert_eq!(json["start_offset_seconds"], -18000);
        assert!(json.get("end").is_none());
        assert!(json.get("end_raw").is_none());
    }

    #[test]
    fn test_point_nan_serializes_as_null() {
        let point = Point {
            latitude: f64::NAN,
            longitude: -97.5,
        };
        let json = serde_json::to_value(point).unwrap();
        assert!(json["latitude"].is_null());
        assert_eq!(json["longitude"], -97.5);
    }
}
