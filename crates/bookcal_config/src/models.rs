// --- File: crates/bookcal_config/src/models.rs ---

use bookcal_common::{invalid_constraints, invalid_settings, invalid_timezone, CalendarError};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Booking Constraints ---

/// Unit of the maximum booking horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxTimeOutUnit {
    Week,
    Month,
    Year,
}

/// Unit of the minimum lead time. `None` disables the lead-time check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MinAdvanceUnit {
    Hour,
    Day,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MaxTimeOut {
    pub value: u32, // must be > 0
    pub unit: MaxTimeOutUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MinTimeInAdvance {
    pub value: u32, // ignored when unit is None
    pub unit: MinAdvanceUnit,
}

/// How far ahead and how soon a booking may be made.
/// Generated once per session and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BookingConstraints {
    pub max_time_out: MaxTimeOut,
    pub min_time_in_advance: MinTimeInAdvance,
}

impl Default for BookingConstraints {
    /// Three months out, two days in advance.
    fn default() -> Self {
        Self {
            max_time_out: MaxTimeOut {
                value: 3,
                unit: MaxTimeOutUnit::Month,
            },
            min_time_in_advance: MinTimeInAdvance {
                value: 2,
                unit: MinAdvanceUnit::Day,
            },
        }
    }
}

/// Longest booking horizon accepted, in years. The availability map and the
/// week strip hold one entry per day of the window.
pub const MAX_HORIZON_YEARS: u32 = 5;

impl MaxTimeOutUnit {
    /// Largest `value` that keeps the horizon within [`MAX_HORIZON_YEARS`].
    pub fn max_value(self) -> u32 {
        match self {
            MaxTimeOutUnit::Week => MAX_HORIZON_YEARS * 52,
            MaxTimeOutUnit::Month => MAX_HORIZON_YEARS * 12,
            MaxTimeOutUnit::Year => MAX_HORIZON_YEARS,
        }
    }
}

impl BookingConstraints {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.max_time_out.value == 0 {
            return Err(invalid_constraints("max_time_out.value must be > 0"));
        }
        let limit = self.max_time_out.unit.max_value();
        if self.max_time_out.value > limit {
            return Err(invalid_constraints(format!(
                "max_time_out of {} exceeds the {} year limit",
                self.max_time_out, MAX_HORIZON_YEARS
            )));
        }
        Ok(())
    }
}

fn plural(value: u32, singular: &str) -> String {
    if value == 1 {
        format!("{} {}", value, singular)
    } else {
        format!("{} {}s", value, singular)
    }
}

impl fmt::Display for MaxTimeOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            MaxTimeOutUnit::Week => "week",
            MaxTimeOutUnit::Month => "month",
            MaxTimeOutUnit::Year => "year",
        };
        f.write_str(&plural(self.value, unit))
    }
}

impl fmt::Display for MinTimeInAdvance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            MinAdvanceUnit::None => f.write_str("None"),
            MinAdvanceUnit::Hour => f.write_str(&plural(self.value, "hour")),
            MinAdvanceUnit::Day => f.write_str(&plural(self.value, "day")),
        }
    }
}

// --- Calendar Config ---

/// Where the session's constraints come from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ConstraintsSource {
    /// `BookingConstraints::default()`
    Default,
    /// Randomized within the documented demo ranges, once per session
    #[default]
    Random,
    Fixed(BookingConstraints),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CalendarConfig {
    /// IANA name; "today" is judged in this zone
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub constraints: ConstraintsSource,
}

fn default_timezone() -> String {
    "Europe/Zurich".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            constraints: ConstraintsSource::default(),
        }
    }
}

impl CalendarConfig {
    pub fn tz(&self) -> Result<Tz, CalendarError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| invalid_timezone(&self.timezone))
    }
}

// --- Week Strip Config ---

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WeekStripSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Fraction of a day cell that must be inside the viewport to count as visible
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_settle_delay_ms() -> u64 {
    100
}

fn default_visibility_threshold() -> f64 {
    0.3
}

/// Upper bound for `debounce_ms` and `settle_delay_ms`.
pub const MAX_STRIP_DELAY_MS: u64 = 60_000;

impl WeekStripSettings {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.debounce_ms > MAX_STRIP_DELAY_MS {
            return Err(invalid_settings(format!(
                "week_strip.debounce_ms must be <= {}, got {}",
                MAX_STRIP_DELAY_MS, self.debounce_ms
            )));
        }
        if self.settle_delay_ms > MAX_STRIP_DELAY_MS {
            return Err(invalid_settings(format!(
                "week_strip.settle_delay_ms must be <= {}, got {}",
                MAX_STRIP_DELAY_MS, self.settle_delay_ms
            )));
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(invalid_settings(format!(
                "week_strip.visibility_threshold must be within 0..=1, got {}",
                self.visibility_threshold
            )));
        }
        Ok(())
    }
}

impl Default for WeekStripSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            visibility_threshold: default_visibility_threshold(),
        }
    }
}

// --- Logging Config ---

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub week_strip: WeekStripSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}
