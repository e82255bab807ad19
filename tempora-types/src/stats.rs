//! Immutable result objects returned by the statistics routines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DateRange;

/// A single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation time.
    pub ts: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
}

impl DataPoint {
    /// Create a data point.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

impl From<(DateTime<Utc>, f64)> for DataPoint {
    fn from((ts, value): (DateTime<Utc>, f64)) -> Self {
        Self { ts, value }
    }
}

impl From<DataPoint> for (DateTime<Utc>, f64) {
    fn from(p: DataPoint) -> Self {
        (p.ts, p.value)
    }
}

/// Commonly reported percentiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardPercentiles {
    /// 1st percentile.
    pub p01: f64,
    /// 5th percentile.
    pub p05: f64,
    /// 10th percentile.
    pub p10: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
}

/// Summary of a raw sample computed in one pass.
///
/// An empty sample reports zeros everywhere rather than NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStatistics {
    /// Largest value.
    pub maximum: f64,
    /// Smallest value.
    pub minimum: f64,
    /// Sum of values.
    pub sum: f64,
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub average: f64,
    /// Euclidean norm of the sample.
    pub l2_norm: f64,
    /// Sample standard deviation (N-1 divisor, 0 when `count <= 2`).
    pub standard_deviation: f64,
    /// Mean absolute deviation from the average.
    pub mean_deviation: f64,
}

/// Snapshot of a time series' aggregate statistics.
///
/// Numeric fields are NaN and the point fields `None` for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    /// Range of keys seen so far; `None` until the first point is added.
    pub date_range: Option<DateRange>,
    /// Number of stored points.
    pub count: usize,
    /// Largest stored value.
    pub maximum: f64,
    /// Smallest stored value.
    pub minimum: f64,
    /// Mean of stored values.
    pub average: f64,
    /// Sample standard deviation (N-1 divisor, 0 when `count <= 2`).
    pub standard_deviation: f64,
    /// Sum of stored values.
    pub sum: f64,
    /// Point with the greatest timestamp.
    pub latest: Option<DataPoint>,
    /// First point (in time order) holding the maximum.
    pub maximum_point: Option<DataPoint>,
    /// First point (in time order) holding the minimum.
    pub minimum_point: Option<DataPoint>,
}

impl SeriesStatistics {
    /// Statistics of a series without points.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            date_range: None,
            count: 0,
            maximum: f64::NAN,
            minimum: f64::NAN,
            average: f64::NAN,
            standard_deviation: f64::NAN,
            sum: f64::NAN,
            latest: None,
            maximum_point: None,
            minimum_point: None,
        }
    }
}

impl Default for SeriesStatistics {
    fn default() -> Self {
        Self::empty()
    }
}
