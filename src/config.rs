//! Formatting configuration
//!
//! Bundles the configurable formatting knobs into a single serializable
//! struct so applications can persist them alongside their own settings.
//! This crate never reads or writes files itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DURATION_TEMPLATE;
use crate::error::TimeError;
use crate::{clock, duration};

/// Formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Template used when formatting durations
    pub duration_template: String,
    /// UTC offset in minutes applied before reading clock-hand fields
    pub utc_offset_minutes: i32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            duration_template: DURATION_TEMPLATE.to_string(),
            utc_offset_minutes: 0,
        }
    }
}

impl FormatConfig {
    /// Format the duration between two instants with the configured template.
    pub fn format_duration(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<String, TimeError> {
        duration::format_duration_ms(&self.duration_template, (end - start).num_milliseconds())
    }

    /// Clock-hand angle at `instant` under the configured UTC offset.
    #[must_use]
    pub fn clock_angle(&self, instant: DateTime<Utc>) -> f64 {
        clock::clock_angle_with_offset(instant, self.utc_offset_minutes)
    }
}
