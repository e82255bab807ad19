//! Tempora-specific value objects, configuration primitives, and the shared error type.
#![warn(missing_docs)]

mod config;
mod error;
mod range;
mod stats;

pub use config::{
    AggregationTimeSpan, AnalysisConfig, Confidence, ConflictResolution, MathOperation,
    TimeUnits, total_days, total_seconds,
};
pub use error::TemporaError;
pub use range::{DateRange, TimeSegment};
pub use stats::{DataPoint, DescriptiveStatistics, SeriesStatistics, StandardPercentiles};
