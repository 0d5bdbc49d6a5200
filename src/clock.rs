//! Clock-hand angle computation.
//!
//! Computes the angle between the hour and minute hands of an analog clock,
//! always as the smaller of the two angles the hands form.

use chrono::{DateTime, Duration, Timelike, Utc};

use crate::constants::{FULL_TURN_DEG, HALF_TURN_DEG, HOUR_HAND_DEG_PER_MINUTE, MINUTE_HAND_DEG_PER_MINUTE};

/// Angle in radians between the clock hands at `instant`, read as UTC.
///
/// Equivalent to [`clock_angle_with_offset`] with a zero offset.
#[must_use]
pub fn clock_angle(instant: DateTime<Utc>) -> f64 {
    clock_angle_with_offset(instant, 0)
}

/// Angle in radians between the clock hands at `instant`, after shifting it
/// by `utc_offset_minutes`.
///
/// The offset is an explicit parameter so the result depends only on the
/// arguments, never on the ambient system timezone.
///
/// # Returns
/// * `f64` - Radians in `[0, π]`, never the reflex angle
#[must_use]
pub fn clock_angle_with_offset(instant: DateTime<Utc>, utc_offset_minutes: i32) -> f64 {
    let local = instant + Duration::minutes(i64::from(utc_offset_minutes));
    hand_angle(local.hour(), local.minute())
}

/// Angle in radians between the hands of a clock showing `hour`:`minute`.
///
/// The hour hand moves 0.5° per minute, the minute hand 6° per minute. The
/// difference is folded to the non-reflex angle and converted to radians
/// only after normalization, so no floating-point error compounds across
/// the subtraction.
#[must_use]
pub fn hand_angle(hour: u32, minute: u32) -> f64 {
    let hour = f64::from(hour % 12);
    let minute = f64::from(minute % 60);
    let hour_deg = HOUR_HAND_DEG_PER_MINUTE * (60.0 * hour + minute);
    let minute_deg = MINUTE_HAND_DEG_PER_MINUTE * minute;
    let raw = (hour_deg - minute_deg).abs();
    let folded = if raw <= HALF_TURN_DEG { raw } else { FULL_TURN_DEG - raw };
    folded.to_radians()
}
