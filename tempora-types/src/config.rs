//! Strategy enums and configuration shared by the core engine and the facade.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Policy applied when a new observation shares a key with a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConflictResolution {
    /// Keep the stored value and discard the new one (first wins).
    Skip,
    /// The new value replaces the stored one (last wins).
    Replace,
    /// Keep the running arithmetic mean of every value seen for the key.
    #[default]
    Average,
    /// Keep the larger of the stored and new value.
    Maximum,
    /// Keep the smaller of the stored and new value.
    Minimum,
}

/// Unit in which time differences are expressed for derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeUnits {
    /// Milliseconds.
    #[default]
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
}

impl TimeUnits {
    /// Express `delta` as a fractional number of this unit.
    #[must_use]
    pub fn of(self, delta: TimeDelta) -> f64 {
        let seconds = total_seconds(delta);
        match self {
            Self::Milliseconds => seconds * 1_000.0,
            Self::Seconds => seconds,
            Self::Minutes => seconds / 60.0,
            Self::Hours => seconds / 3_600.0,
        }
    }
}

/// Fractional seconds in `delta`, keeping sub-second precision.
#[must_use]
pub fn total_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

/// Fractional days in `delta`.
#[must_use]
pub fn total_days(delta: TimeDelta) -> f64 {
    total_seconds(delta) / 86_400.0
}

/// Width of an aggregation bucket when splitting a time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationTimeSpan {
    /// Fifteen-minute buckets aligned to :00, :15, :30, :45.
    FifteenMinutes,
    /// One-hour buckets aligned to the top of the hour.
    Hour,
    /// One-day buckets aligned to the configured day start.
    Day,
    /// Seven-day buckets starting on Monday.
    Week,
    /// Calendar-month buckets starting on the first of the month.
    Month,
}

impl AggregationTimeSpan {
    /// Fixed width of a bucket; `Month` reports the 30-day approximation.
    #[must_use]
    pub const fn nominal_width(self) -> TimeDelta {
        match self {
            Self::FifteenMinutes => TimeDelta::minutes(15),
            Self::Hour => TimeDelta::hours(1),
            Self::Day => TimeDelta::days(1),
            Self::Week => TimeDelta::days(7),
            Self::Month => TimeDelta::days(30),
        }
    }
}

/// Two-sided confidence level used by t-tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Confidence {
    /// 90% confidence.
    C90,
    /// 95% confidence.
    #[default]
    C95,
    /// 99% confidence.
    C99,
    /// 99.9% confidence.
    C99p9,
}

impl Confidence {
    /// The confidence level as a fraction in (0, 1).
    #[must_use]
    pub const fn level(self) -> f64 {
        match self {
            Self::C90 => 0.90,
            Self::C95 => 0.95,
            Self::C99 => 0.99,
            Self::C99p9 => 0.999,
        }
    }
}

/// Elementwise operation applied between two aligned series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathOperation {
    /// `lhs + rhs`.
    Add,
    /// `lhs - rhs`.
    Subtract,
    /// `lhs * rhs`.
    Multiply,
    /// `lhs / rhs`; points with a zero divisor are omitted.
    Divide,
}

impl MathOperation {
    /// Apply the operation; `None` when dividing by exactly zero.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide => (rhs != 0.0).then(|| lhs / rhs),
        }
    }
}

/// Defaults used by the `tempora` analyzer when a call does not specify them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Conflict policy for series built from raw pairs.
    pub conflict_resolution: ConflictResolution,
    /// Unit for derivative denominators.
    pub time_units: TimeUnits,
    /// UTC offset (seconds) of the local day start used by day/week/month aggregation.
    pub day_start_offset_seconds: i64,
    /// Confidence for t-test outlier screening.
    pub outlier_confidence: Confidence,
    /// Confidence in [0, 1] for Wilson score lower bounds.
    pub wilson_confidence: f64,
}

impl AnalysisConfig {
    /// The configured day-start offset as a duration (zero if it is out of range).
    #[must_use]
    pub fn day_start_offset(&self) -> TimeDelta {
        TimeDelta::try_seconds(self.day_start_offset_seconds).unwrap_or_else(TimeDelta::zero)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            conflict_resolution: ConflictResolution::Average,
            time_units: TimeUnits::Milliseconds,
            day_start_offset_seconds: -7 * 3_600,
            outlier_confidence: Confidence::C95,
            wilson_confidence: 0.95,
        }
    }
}
