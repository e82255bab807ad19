//! Tempora stores, aligns and summarizes irregularly sampled time series in memory.
//!
//! Overview
//! - [`TimeSeries`] keeps timestamp-keyed values ordered, merges duplicate
//!   timestamps through a [`ConflictResolution`] policy and caches statistics.
//! - Series can be differentiated, interpolated onto grids, smoothed with a
//!   forward rolling mean and combined elementwise with other series.
//! - The splitter cuts ranges into aligned buckets and averages values per bucket.
//! - Statistical helpers cover percentiles, t-test outlier screening, z and
//!   Wilson scores, Beta sampling and weighted choice.
//! - [`Analyzer`] runs all of the above over raw `(timestamp, value)` pairs with
//!   the defaults held in an [`AnalysisConfig`].
//!
//! Key behaviors and trade-offs
//! - Conflict resolution:
//!   - `Average` keeps a running mean per timestamp; cheap and order independent.
//!   - `Skip`/`Replace` keep the first or last value; order dependent under races.
//! - Buckets are `(start, end]`: a value sitting exactly on the first bucket start
//!   belongs to no bucket.
//! - Day, week and month buckets start at the configured local day start
//!   (07:00 UTC by default); shorter spans align in plain UTC.
//!
//! Examples
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use tempora::{Analyzer, ConflictResolution, TimeUnits};
//!
//! let analyzer = Analyzer::builder()
//!     .conflict_resolution(ConflictResolution::Replace)
//!     .time_units(TimeUnits::Seconds)
//!     .build()?;
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let pairs = vec![(t0, 1.0), (t0 + TimeDelta::seconds(2), 5.0)];
//! let slope = analyzer.first_derivative(pairs);
//! assert_eq!(slope, vec![(t0 + TimeDelta::seconds(2), 2.0)]);
//! # Ok::<(), tempora::TemporaError>(())
//! ```
//!
//! Enable the `tracing` feature to instrument entry points across the workspace.
#![warn(missing_docs)]

mod analyzer;

pub use analyzer::{Analyzer, AnalyzerBuilder};

pub use tempora_core::{numerics, pairs, series, splitter, statistics, timeseries};

// Re-export core types for convenience
pub use tempora_core::{
    AggregationTimeSpan,
    AnalysisConfig,
    Confidence,
    ConflictResolution,
    ContinuousSample,
    DataPoint,
    DataSeries,
    DateRange,
    DateTimeGrid,
    DescriptiveStatistics,
    FnPolicy,
    LastWins,
    MathOperation,
    MergePolicy,
    OutlierScreen,
    Percentile,
    SeriesStatistics,
    StandardPercentiles,
    TemporaError,
    TimeSegment,
    TimeSeries,
    TimeUnits,
    build_grid_points,
    complete_parts,
    compute_time_range_averages,
    split_into_complete_parts,
    split_into_parts,
};
