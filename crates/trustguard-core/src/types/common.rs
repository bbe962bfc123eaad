//! Shared helpers for the wire types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Health document returned by `GET /health` on either service.
///
/// Only `status` is interpreted; everything else is kept verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Reported status, `"healthy"` when the service is up
    #[serde(default)]
    pub status: String,

    /// Service-reported timestamp, if any
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Any additional fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ServiceHealth {
    /// Returns true if the service reports itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Deserialize a timestamp that may be RFC 3339 or a naive ISO 8601 string.
///
/// Naive timestamps are taken as UTC.
pub(crate) fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Parse an RFC 3339 or naive ISO 8601 timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339() {
        let dt = parse_timestamp("2024-01-13T08:30:00Z").unwrap();
        assert_eq!(dt.day(), 13);
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn parses_naive_iso_as_utc() {
        let dt = parse_timestamp("2024-05-01T12:00:00.123456").unwrap();
        assert_eq!(dt.month(), 5);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn health_keeps_extra_fields() {
        let health: ServiceHealth = serde_json::from_str(
            r#"{"status":"healthy","timestamp":"2024-01-01T00:00:00","services":{"kafka":"demo_mode"}}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert!(health.extra.contains_key("services"));
    }
}
