//! Timestamp helpers for persisted session state.
//!
//! Activity timestamps are persisted as epoch milliseconds in decimal form so the stored value
//! stays readable and stable across client versions.

use chrono::{DateTime, TimeDelta, Utc};

/// Encodes a timestamp as epoch milliseconds.
pub fn to_epoch_millis(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Parses a persisted epoch-milliseconds value.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - The value is a valid millisecond timestamp
/// - `None` - The value is not an integer or lies outside the representable range
pub fn from_epoch_millis(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp_millis(millis)
}

/// Time elapsed between `since` and `now`, zero if `since` lies in the future.
pub fn elapsed_since(since: DateTime<Utc>, now: DateTime<Utc>) -> TimeDelta {
    (now - since).max(TimeDelta::zero())
}
