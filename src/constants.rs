//! Constants used throughout the crate
//!
//! This module centralizes unit conversion factors and default templates
//! to improve maintainability and consistency.

// Millisecond conversion factors
pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;

// Natural field ranges for duration formatting
pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Default template used by [`crate::duration::format_duration`]
pub const DURATION_TEMPLATE: &str = "HH:mm:ss.sss";

// Clock-hand speeds in degrees per minute of wall-clock time
pub const HOUR_HAND_DEG_PER_MINUTE: f64 = 0.5;
pub const MINUTE_HAND_DEG_PER_MINUTE: f64 = 6.0;

// Degree bounds used when folding to the non-reflex angle
pub const HALF_TURN_DEG: f64 = 180.0;
pub const FULL_TURN_DEG: f64 = 360.0;
