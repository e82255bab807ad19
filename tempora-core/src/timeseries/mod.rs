//! Timestamp-keyed series with conflict resolution and cached statistics.
//!
//! Modules include:
//! - `align`: point interpolation and grid alignment
//! - `derive`: derivatives, relative change, rolling averages and cross-series arithmetic
mod align;
mod cache;
mod derive;
mod policy;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tempora_types::{ConflictResolution, DataPoint, DateRange, SeriesStatistics};

use crate::series::DataSeries;
use policy::TimeSeriesPolicy;

/// Ordered `DateTime<Utc> -> f64` series.
///
/// Behavior:
/// - The conflict mode is fixed at construction and applies to every duplicate key.
/// - Aggregate statistics are computed together on first read after a change and
///   then served from a cache until the next insert.
/// - Empty series report NaN statistics and `None` data points.
/// - Derived series (derivatives, interpolation, arithmetic) are new, independent
///   instances; the source is never modified.
///
/// A `TimeSeries` may be shared across threads; inserts and statistics reads are
/// serialized by one internal lock.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_core::{ConflictResolution, TimeSeries};
///
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let series = TimeSeries::new(ConflictResolution::Average);
/// series.add_data_point(t0, 10.0);
/// series.add_data_point(t0, 20.0);
/// assert_eq!(series.count(), 1);
/// assert_eq!(series.average(), 15.0);
/// ```
#[derive(Clone)]
pub struct TimeSeries {
    inner: DataSeries<DateTime<Utc>, f64, TimeSeriesPolicy>,
    resolution: ConflictResolution,
}

impl TimeSeries {
    /// Create an empty series using `resolution` for duplicate keys.
    #[must_use]
    pub fn new(resolution: ConflictResolution) -> Self {
        Self {
            inner: DataSeries::new(TimeSeriesPolicy::new(resolution)),
            resolution,
        }
    }

    /// Create a series and merge `points` into it in iteration order.
    pub fn with_points<I>(resolution: ConflictResolution, points: I) -> Self
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        let series = Self::new(resolution);
        series.add_data_points(points);
        series
    }

    /// Conflict mode this series was created with.
    #[must_use]
    pub const fn resolution(&self) -> ConflictResolution {
        self.resolution
    }

    /// Merge one observation.
    pub fn add_data_point(&self, ts: DateTime<Utc>, value: f64) {
        self.inner.add_data_point(ts, value);
    }

    /// Merge observations in iteration order as one atomic update.
    pub fn add_data_points<I>(&self, points: I)
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.inner.add_data_points(points);
    }

    /// Independent sorted copy of the stored points.
    #[must_use]
    pub fn data_points(&self) -> BTreeMap<DateTime<Utc>, f64> {
        self.inner.data_points()
    }

    /// Stored points as ordered pairs.
    #[must_use]
    pub fn key_value_pairs(&self) -> Vec<(DateTime<Utc>, f64)> {
        self.inner.key_value_pairs()
    }

    /// Number of distinct timestamps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Smallest and largest key seen; `None` for an empty series.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        self.inner.with_locked(|_, policy| policy.range())
    }

    /// Consistent snapshot of every cached statistic, recomputed if stale.
    #[must_use]
    pub fn statistics(&self) -> SeriesStatistics {
        self.inner
            .with_locked(|points, policy| policy.statistics(points))
    }

    /// `true` if a point was added since statistics were last computed.
    #[must_use]
    pub fn statistics_are_stale(&self) -> bool {
        self.inner.with_locked(|_, policy| policy.is_stale())
    }

    /// Number of points.
    #[must_use]
    pub fn count(&self) -> usize {
        self.statistics().count
    }

    /// Sum of values; NaN when empty.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.statistics().sum
    }

    /// Mean of values; NaN when empty.
    #[must_use]
    pub fn average(&self) -> f64 {
        self.statistics().average
    }

    /// Sample standard deviation (N-1); 0 for two points or fewer, NaN when empty.
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.statistics().standard_deviation
    }

    /// Largest value; NaN when empty.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.statistics().maximum
    }

    /// Smallest value; NaN when empty.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.statistics().minimum
    }

    /// Point with the greatest timestamp.
    #[must_use]
    pub fn latest_data_point(&self) -> Option<DataPoint> {
        self.statistics().latest
    }

    /// Earliest point holding the maximum value.
    #[must_use]
    pub fn maximum_data_point(&self) -> Option<DataPoint> {
        self.statistics().maximum_point
    }

    /// Earliest point holding the minimum value.
    #[must_use]
    pub fn minimum_data_point(&self) -> Option<DataPoint> {
        self.statistics().minimum_point
    }

    /// Number of stored values strictly greater than `threshold`.
    #[must_use]
    pub fn number_of_times_greater_than(&self, threshold: f64) -> usize {
        self.inner
            .with_locked(|points, _| points.values().filter(|v| **v > threshold).count())
    }

    /// Number of stored values strictly less than `threshold`.
    #[must_use]
    pub fn number_of_times_less_than(&self, threshold: f64) -> usize {
        self.inner
            .with_locked(|points, _| points.values().filter(|v| **v < threshold).count())
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::new(ConflictResolution::default())
    }
}

impl FromIterator<(DateTime<Utc>, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (DateTime<Utc>, f64)>>(iter: I) -> Self {
        Self::with_points(ConflictResolution::default(), iter)
    }
}

impl From<BTreeMap<DateTime<Utc>, f64>> for TimeSeries {
    fn from(points: BTreeMap<DateTime<Utc>, f64>) -> Self {
        points.into_iter().collect()
    }
}

impl std::fmt::Debug for TimeSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeSeries")
            .field("resolution", &self.resolution)
            .field("points", &self.inner)
            .finish()
    }
}
