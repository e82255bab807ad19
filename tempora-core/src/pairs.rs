//! Helpers over raw `(timestamp, value)` pairs.
//!
//! Functions that summarize pairs first merge them into an `Average` series,
//! so duplicate timestamps count once with their mean value.

use chrono::{DateTime, TimeDelta, Utc};
use tempora_types::{ConflictResolution, SeriesStatistics, StandardPercentiles, TemporaError};

use crate::TimeSeries;
use crate::statistics::Percentile;

fn averaged<I>(pairs: I) -> TimeSeries
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    TimeSeries::with_points(ConflictResolution::Average, pairs)
}

/// Aggregate statistics of `pairs`.
pub fn series_statistics<I>(pairs: I) -> SeriesStatistics
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    averaged(pairs).statistics()
}

/// Standard percentiles of the raw values, duplicates included.
///
/// Timestamps play no part, so repeated observations are not merged first.
///
/// # Errors
/// Propagates percentile lookup failures.
pub fn standard_percentiles_of<I>(pairs: I) -> Result<StandardPercentiles, TemporaError>
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    Percentile::new(pairs.into_iter().map(|(_, v)| v)).standard_percentiles()
}

/// Number of merged values strictly above `threshold`.
pub fn count_greater_than<I>(pairs: I, threshold: f64) -> usize
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    averaged(pairs).number_of_times_greater_than(threshold)
}

/// Number of merged values strictly below `threshold`.
pub fn count_less_than<I>(pairs: I, threshold: f64) -> usize
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    averaged(pairs).number_of_times_less_than(threshold)
}

/// Move every timestamp by `shift`, keeping order and values.
///
/// # Errors
/// Returns `Computation` if a shifted timestamp is out of range.
pub fn time_shift<I>(pairs: I, shift: TimeDelta) -> Result<Vec<(DateTime<Utc>, f64)>, TemporaError>
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    pairs
        .into_iter()
        .map(|(ts, v)| {
            ts.checked_add_signed(shift).map(|shifted| (shifted, v)).ok_or_else(|| {
                TemporaError::computation("time_shift", format!("{ts} shifted by {shift} overflows"))
            })
        })
        .collect()
}

/// Every value multiplied by `multiplier`; timestamps are left alone.
pub fn multiply_by_value<I>(pairs: I, multiplier: f64) -> Vec<(DateTime<Utc>, f64)>
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    pairs.into_iter().map(|(ts, v)| (ts, v * multiplier)).collect()
}
