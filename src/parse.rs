//! Standard date-string parsing.
//!
//! Both entry points delegate the actual calendar work to chrono and
//! normalize the result to UTC. Full RFC 2822 / ISO 8601 grammar coverage is
//! chrono's job, not ours.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;

use crate::error::TimeError;

/// Parse an RFC 2822 date string, e.g. `"Tue, 1 Jul 2003 10:52:37 +0200"`.
///
/// # Returns
/// * `Result<DateTime<Utc>, TimeError>` - The instant normalized to UTC, or
///   a [`TimeError::Parse`] on malformed input.
pub fn parse_rfc2822(text: &str) -> Result<DateTime<Utc>, TimeError> {
    let parsed = DateTime::parse_from_rfc2822(text)?;
    Ok(parsed.with_timezone(&Utc))
}

/// Parse an ISO 8601 date string.
///
/// Accepts RFC 3339 input (e.g. `"2025-01-15T14:30:00Z"`), offset-less
/// datetimes (`"2025-01-15T14:30:00"`, with an optional fractional part, or
/// the space-separated variant), and bare dates (`"2025-01-15"`).
/// Offset-less values are read as UTC.
///
/// # Returns
/// * `Result<DateTime<Utc>, TimeError>` - The instant normalized to UTC, or
///   a [`TimeError::Parse`] on malformed input.
pub fn parse_iso8601(text: &str) -> Result<DateTime<Utc>, TimeError> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(err) => {
            debug!("RFC 3339 parse failed for {text:?}, trying offset-less forms");
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
                return Ok(dt.and_utc());
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
                return Ok(dt.and_utc());
            }
            if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                    return Ok(dt.and_utc());
                }
            }
            Err(TimeError::Parse(err))
        }
    }
}
