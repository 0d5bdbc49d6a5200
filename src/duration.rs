//! Duration formatting driven by a field template.
//!
//! A template such as `"HH:mm:ss.sss"` is scanned once into a list of
//! [`FieldSpec`]s, then each field run is replaced in place with its
//! zero-padded value. Literal separators (`:`, `.`) pass through untouched.
//!
//! Field values wrap into their natural ranges independently: a duration of
//! more than 24 hours wraps the hour field, more than 60 minutes wraps the
//! minute field, and so on. There is no carry between fields.

use chrono::{DateTime, Utc};
use log::debug;
use once_cell::sync::Lazy;

use crate::constants::{
    DURATION_TEMPLATE, HOURS_PER_DAY, MINUTES_PER_HOUR, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
    SECONDS_PER_MINUTE,
};
use crate::error::TimeError;

/// Time unit a template field renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldUnit {
    Hour,
    Minute,
    Second,
    /// Fractional seconds; the digit count equals the field width.
    Fraction,
}

/// One field of a scanned duration template: a maximal run of a repeated
/// letter, `len` characters long, starting at byte `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub unit: FieldUnit,
    pub start: usize,
    pub len: usize,
}

/// Field list for [`DURATION_TEMPLATE`], scanned once on first use
static DEFAULT_FIELDS: Lazy<Vec<FieldSpec>> =
    Lazy::new(|| scan_template(DURATION_TEMPLATE).expect("default duration template is valid"));

/// Scan `template` into its field list.
///
/// A run of identical ASCII letters is one field. A run immediately preceded
/// by a literal `.` is the fractional-second field; otherwise the leading
/// character selects the unit: `H` hours, `m` minutes, `s` seconds. Any other
/// unit code is rejected with [`TimeError::InvalidFormat`].
pub fn scan_template(template: &str) -> Result<Vec<FieldSpec>, TimeError> {
    let bytes = template.as_bytes();
    let mut fields = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let code = bytes[i];
        if !code.is_ascii_alphabetic() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i] == code {
            i += 1;
        }
        let unit = if start > 0 && bytes[start - 1] == b'.' {
            FieldUnit::Fraction
        } else {
            match code {
                b'H' => FieldUnit::Hour,
                b'm' => FieldUnit::Minute,
                b's' => FieldUnit::Second,
                other => {
                    debug!("rejecting duration template {template:?}: unknown unit {:?}", other as char);
                    return Err(TimeError::InvalidFormat(other as char));
                }
            }
        };
        fields.push(FieldSpec {
            unit,
            start,
            len: i - start,
        });
    }
    Ok(fields)
}

/// Format the duration between two instants as `"HH:mm:ss.sss"`.
///
/// The delta is sign-agnostic: swapping `start` and `end` yields the same
/// string. A duration of exactly 24 hours wraps the hour field back to `00`.
///
/// # Example
/// Five hours, twenty minutes and 10.453 seconds render as `"05:20:10.453"`.
#[must_use]
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let millis = (end - start).num_milliseconds();
    render(DURATION_TEMPLATE, &DEFAULT_FIELDS, millis)
}

/// Format `millis` through an arbitrary duration template.
///
/// # Arguments
/// * `template` - Field template, e.g. `"HH:mm:ss.sss"` or `"mm:ss"`
/// * `millis` - Duration in milliseconds; the absolute value is formatted
///
/// # Returns
/// * `Result<String, TimeError>` - The rendered string, or
///   [`TimeError::InvalidFormat`] if the template contains an unknown unit
pub fn format_duration_ms(template: &str, millis: i64) -> Result<String, TimeError> {
    let fields = scan_template(template)?;
    Ok(render(template, &fields, millis))
}

/// Replace each field run of `template` with its rendered value.
fn render(template: &str, fields: &[FieldSpec], millis: i64) -> String {
    let ms = millis.abs();
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;
    for field in fields {
        out.push_str(&template[pos..field.start]);
        let value = match field.unit {
            FieldUnit::Hour => (ms / MS_PER_HOUR) % HOURS_PER_DAY,
            FieldUnit::Minute => (ms / MS_PER_MINUTE) % MINUTES_PER_HOUR,
            FieldUnit::Second => (ms / MS_PER_SECOND) % SECONDS_PER_MINUTE,
            FieldUnit::Fraction => fraction_digits(ms % MS_PER_SECOND, field.len),
        };
        out.push_str(&format!("{value:0width$}", width = field.len));
        pos = field.start + field.len;
    }
    out.push_str(&template[pos..]);
    out
}

/// First `digits` fractional digits of a sub-second millisecond remainder.
///
/// Truncates, never rounds: 999 ms with three digits is 999, not 1000.
fn fraction_digits(subsec_ms: i64, digits: usize) -> i64 {
    if digits >= 3 {
        subsec_ms * 10_i64.pow((digits - 3) as u32)
    } else {
        subsec_ms / 10_i64.pow((3 - digits) as u32)
    }
}
