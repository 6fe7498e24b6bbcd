//! # Timestamp Value Object
//!
//! DateTime wrapper for upstream effective dates.
//!
//! The ERP reports dates as Unix milliseconds; a few endpoints (and older
//! tenants) send RFC 3339 strings instead. Both end up as a [`Timestamp`],
//! and the price resolver compares them through [`Timestamp::sort_key`].
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::domain::value_objects::timestamp::Timestamp;
//!
//! let ts = Timestamp::from_millis(1_700_000_000_000).unwrap();
//! assert_eq!(ts.to_iso8601(), "2023-11-14T22:13:20.000Z");
//! ```

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A UTC timestamp with millisecond precision on output.
///
/// # Invariants
///
/// - Always in UTC timezone
/// - Serialized as ISO 8601 with milliseconds and a `Z` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of chrono's range.
    ///
    /// # Examples
    ///
    /// ```
    /// use article_ek_proxy::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_millis(1704067200000).unwrap();
    /// assert_eq!(ts.timestamp_millis(), 1704067200000);
    /// ```
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Parses an RFC 3339 string such as `2024-01-01T00:00:00Z`.
    ///
    /// Returns `None` on any parse failure.
    #[must_use]
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value.trim())
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Returns the Unix timestamp in milliseconds.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Sort key used when comparing candidate dates.
    ///
    /// A missing timestamp sorts as `0`, i.e. as old as the Unix epoch.
    #[inline]
    #[must_use]
    pub fn sort_key(timestamp: Option<Self>) -> i64 {
        timestamp.map_or(0, |ts| ts.timestamp_millis())
    }

    /// Formats the timestamp as ISO 8601, e.g. `2023-11-14T22:13:20.000Z`.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
