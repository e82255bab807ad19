//! Re-export of foundational types from `tempora-types`.
// Consolidated re-exports so downstream crates can depend on `tempora-core` only

pub use tempora_types::TemporaError;

pub use tempora_types::{
    AggregationTimeSpan, AnalysisConfig, Confidence, ConflictResolution, MathOperation, TimeUnits,
};

pub use tempora_types::{DataPoint, DateRange, TimeSegment};
pub use tempora_types::{DescriptiveStatistics, SeriesStatistics, StandardPercentiles};

pub use tempora_types::{total_days, total_seconds};
