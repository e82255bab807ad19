//! tempora-core
//!
//! In-memory engine for storing, aligning and summarizing irregularly sampled
//! time series.
//!
//! - `series`: ordered keyed storage with pluggable conflict resolution.
//! - `timeseries`: the `TimeSeries` type with cached statistics, derivatives,
//!   interpolation and cross-series arithmetic.
//! - `numerics`: interpolation, differentiation, grids and sequences.
//! - `splitter`: aligned aggregation buckets and per-bucket averages.
//! - `statistics`: percentiles, descriptive statistics, t-tests, z and Wilson scores.
//! - `pairs`: helpers working directly on `(timestamp, value)` pairs.
//!
//! Concurrency
//! -----------
//! Every series guards its points and bookkeeping with a single
//! `parking_lot::Mutex`; inserts and statistics reads on the same instance are
//! serialized, and snapshots handed to callers are independent copies. Nothing
//! here is async.
//!
//! Logging
//! -------
//! With the `tracing` feature enabled, entry points that do non-trivial work are
//! instrumented and a few notable events are logged at debug level.
#![warn(missing_docs)]

/// Numeric helpers: interpolation, differentiation, grids, sequences.
pub mod numerics;
/// Helpers over raw `(timestamp, value)` pairs.
pub mod pairs;
/// Generic ordered keyed series.
pub mod series;
/// Range splitting and bucket averages.
pub mod splitter;
/// Sample statistics and statistical tests.
pub mod statistics;
/// Timestamp-keyed series.
pub mod timeseries;
pub mod types;

pub use numerics::grid::{DateTimeGrid, build_grid_points};
pub use series::{DataSeries, FnPolicy, LastWins, MergePolicy};
pub use splitter::{
    complete_parts, compute_time_range_averages, split_into_complete_parts, split_into_parts,
};
pub use statistics::{ContinuousSample, OutlierScreen, Percentile};
pub use timeseries::TimeSeries;
pub use types::*;
