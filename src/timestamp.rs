//! Reconstruction of transaction times from on-card minute offsets.
//!
//! The card does not store absolute times. Each record carries the
//! number of minutes elapsed between the transaction and the read
//! instant, so a decoded timestamp is only meaningful relative to the
//! scan that produced it. Callers capture the scan time once and pass
//! it to every decode in that batch; replaying a stored buffer with a
//! later `now` shifts every timestamp by the replay delay.

use chrono::{DateTime, Duration, Utc};

/// Render format for decoded timestamps, minute precision, UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Convert a minute offset into an absolute `yyyy-MM-dd HH:mm` string.
///
/// The offset is read straight off the card as a `u16`, so it is
/// non-negative by construction and bounded at 65535 minutes (roughly
/// 45 days); the whole range is accepted and subtracted from `now`
/// without clamping. The result is rendered in UTC.
#[must_use]
pub fn decode_minutes_ago(minutes: u16, now: DateTime<Utc>) -> String {
    let instant = now - Duration::minutes(i64::from(minutes));
    instant.format(TIMESTAMP_FORMAT).to_string()
}
