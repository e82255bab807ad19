use chrono::{DateTime, TimeDelta, Utc};
use tempora_core::pairs::standard_percentiles_of;
use tempora_core::splitter::compute_time_range_averages;
use tempora_core::statistics::wilson_score;
use tempora_core::{ContinuousSample, OutlierScreen, TimeSeries, split_into_parts};
use tempora_types::{
    AggregationTimeSpan, AnalysisConfig, Confidence, ConflictResolution, MathOperation,
    SeriesStatistics, StandardPercentiles, TemporaError, TimeSegment, TimeUnits,
};

/// Largest accepted day-start offset, in either direction.
const MAX_DAY_START_OFFSET_SECONDS: i64 = 86_400;

type Pairs = Vec<(DateTime<Utc>, f64)>;

/// Builder for [`Analyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    cfg: AnalysisConfig,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerBuilder {
    /// Create a builder seeded with [`AnalysisConfig::default`].
    ///
    /// Behavior and trade-offs:
    /// - Defaults average duplicate timestamps, express derivatives per
    ///   millisecond and start local days at 07:00 UTC.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: AnalysisConfig::default(),
        }
    }

    /// Start from an existing configuration, for example one loaded with serde.
    #[must_use]
    pub const fn from_config(cfg: AnalysisConfig) -> Self {
        Self { cfg }
    }

    /// Policy for series built from raw pairs.
    ///
    /// Behavior and trade-offs:
    /// - Applies to every intermediate series the analyzer builds, so it also
    ///   decides how duplicate timestamps feed derivatives and arithmetic.
    #[must_use]
    pub const fn conflict_resolution(mut self, resolution: ConflictResolution) -> Self {
        self.cfg.conflict_resolution = resolution;
        self
    }

    /// Unit used for derivative denominators.
    #[must_use]
    pub const fn time_units(mut self, units: TimeUnits) -> Self {
        self.cfg.time_units = units;
        self
    }

    /// UTC offset of the local day start used by day, week and month buckets.
    ///
    /// Behavior and trade-offs:
    /// - Stored with whole-second precision; sub-second parts are dropped.
    /// - Offsets larger than one day are rejected by [`build`](Self::build).
    #[must_use]
    pub fn day_start_offset(mut self, offset: TimeDelta) -> Self {
        self.cfg.day_start_offset_seconds = offset.num_seconds();
        self
    }

    /// Confidence of the t-test used to screen outliers.
    #[must_use]
    pub const fn outlier_confidence(mut self, confidence: Confidence) -> Self {
        self.cfg.outlier_confidence = confidence;
        self
    }

    /// Confidence in [0, 1] for Wilson score lower bounds.
    #[must_use]
    pub const fn wilson_confidence(mut self, confidence: f64) -> Self {
        self.cfg.wilson_confidence = confidence;
        self
    }

    /// Validate the configuration and build the analyzer.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the Wilson confidence is outside [0, 1] or the
    /// day-start offset exceeds one day.
    pub fn build(self) -> Result<Analyzer, TemporaError> {
        if !(0.0..=1.0).contains(&self.cfg.wilson_confidence) {
            return Err(TemporaError::invalid_arg(format!(
                "wilson confidence must be within [0, 1], got {}",
                self.cfg.wilson_confidence
            )));
        }
        if self.cfg.day_start_offset_seconds.abs() > MAX_DAY_START_OFFSET_SECONDS {
            return Err(TemporaError::invalid_arg(format!(
                "day start offset must be within one day, got {}s",
                self.cfg.day_start_offset_seconds
            )));
        }
        Ok(Analyzer { cfg: self.cfg })
    }
}

/// Runs series operations over raw `(timestamp, value)` pairs with configured defaults.
///
/// Every call builds its own intermediate [`TimeSeries`], so an analyzer holds no
/// data and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    cfg: AnalysisConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            cfg: AnalysisConfig::default(),
        }
    }
}

impl Analyzer {
    /// Start building an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.cfg
    }

    /// Merge `pairs` into a series using the configured conflict policy.
    pub fn series<I>(&self, pairs: I) -> TimeSeries
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        TimeSeries::with_points(self.cfg.conflict_resolution, pairs)
    }

    /// Aggregate statistics of the merged series.
    pub fn statistics<I>(&self, pairs: I) -> SeriesStatistics
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs).statistics()
    }

    /// Standard percentiles of the raw values, duplicate timestamps included.
    ///
    /// Unlike the other summaries this does not merge through the conflict
    /// policy; it matches [`standard_percentiles_of`].
    ///
    /// # Errors
    /// Propagates percentile lookup failures.
    pub fn percentiles<I>(&self, pairs: I) -> Result<StandardPercentiles, TemporaError>
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        standard_percentiles_of(pairs)
    }

    /// Merged values strictly above `threshold`.
    pub fn count_greater_than<I>(&self, pairs: I, threshold: f64) -> usize
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs).number_of_times_greater_than(threshold)
    }

    /// Merged values strictly below `threshold`.
    pub fn count_less_than<I>(&self, pairs: I, threshold: f64) -> usize
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs).number_of_times_less_than(threshold)
    }

    /// First derivative in the configured time unit.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tempora::analyzer::first_derivative", skip(self, pairs)))]
    pub fn first_derivative<I>(&self, pairs: I) -> Pairs
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs)
            .compute_first_derivative(self.cfg.time_units)
            .key_value_pairs()
    }

    /// Second derivative in the configured time unit.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tempora::analyzer::second_derivative", skip(self, pairs)))]
    pub fn second_derivative<I>(&self, pairs: I) -> Pairs
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs)
            .compute_second_derivative(self.cfg.time_units)
            .key_value_pairs()
    }

    /// Step-to-step relative increase in percent.
    pub fn relative_increase<I>(&self, pairs: I) -> Pairs
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs)
            .compute_relative_increase_in_percent()
            .key_value_pairs()
    }

    /// Step-to-step relative decrease in percent.
    pub fn relative_decrease<I>(&self, pairs: I) -> Pairs
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs)
            .compute_relative_decrease_in_percent()
            .key_value_pairs()
    }

    /// Linearly interpolated value at `ts`, or `None` outside the merged range.
    pub fn interpolate_value_at<I>(&self, pairs: I, ts: DateTime<Utc>) -> Option<f64>
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs).interpolate_value_at(ts)
    }

    /// Merged series resampled onto `grid`.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tempora::analyzer::interpolate_onto_grid", skip(self, pairs, grid), fields(grid = grid.len())))]
    pub fn interpolate_onto_grid<I>(&self, pairs: I, grid: &[DateTime<Utc>]) -> Pairs
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs).interpolate_onto_grid(grid).key_value_pairs()
    }

    /// Forward rolling mean over `window` consecutive points.
    pub fn rolling_average<I>(&self, pairs: I, window: usize) -> Pairs
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(pairs)
            .compute_forward_rolling_average(window)
            .key_value_pairs()
    }

    /// Apply `operation` at the timestamps both inputs share.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tempora::analyzer::combine", skip(self, lhs, rhs)))]
    pub fn combine<L, R>(&self, lhs: L, rhs: R, operation: MathOperation) -> Pairs
    where
        L: IntoIterator<Item = (DateTime<Utc>, f64)>,
        R: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.series(lhs)
            .perform_math_on(&self.series(rhs), operation)
            .key_value_pairs()
    }

    /// `lhs + rhs` at shared timestamps.
    pub fn add<L, R>(&self, lhs: L, rhs: R) -> Pairs
    where
        L: IntoIterator<Item = (DateTime<Utc>, f64)>,
        R: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.combine(lhs, rhs, MathOperation::Add)
    }

    /// `lhs - rhs` at shared timestamps.
    pub fn subtract<L, R>(&self, lhs: L, rhs: R) -> Pairs
    where
        L: IntoIterator<Item = (DateTime<Utc>, f64)>,
        R: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.combine(lhs, rhs, MathOperation::Subtract)
    }

    /// `lhs * rhs` at shared timestamps.
    pub fn multiply<L, R>(&self, lhs: L, rhs: R) -> Pairs
    where
        L: IntoIterator<Item = (DateTime<Utc>, f64)>,
        R: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.combine(lhs, rhs, MathOperation::Multiply)
    }

    /// `lhs / rhs` at shared timestamps; zero divisors are skipped.
    pub fn divide<L, R>(&self, lhs: L, rhs: R) -> Pairs
    where
        L: IntoIterator<Item = (DateTime<Utc>, f64)>,
        R: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        self.combine(lhs, rhs, MathOperation::Divide)
    }

    /// Per-bucket averages aligned to the configured local day start.
    ///
    /// # Errors
    /// Returns `Computation` if a bucket boundary is not representable.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tempora::analyzer::time_range_averages", skip(self, pairs)))]
    pub fn time_range_averages<I>(
        &self,
        pairs: I,
        span: AggregationTimeSpan,
    ) -> Result<Pairs, TemporaError>
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        let merged = self.series(pairs).key_value_pairs();
        compute_time_range_averages(merged, span, self.cfg.day_start_offset())
    }

    /// Aligned buckets covering `[start, end]`.
    ///
    /// # Errors
    /// Returns `Computation` if a bucket boundary is not representable.
    pub fn split(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        span: AggregationTimeSpan,
    ) -> Result<Vec<TimeSegment>, TemporaError> {
        split_into_parts(start, end, span, self.cfg.day_start_offset())
    }

    /// Screen `values` for outliers at the configured confidence.
    ///
    /// # Errors
    /// Propagates t-table failures.
    pub fn outlier_screen<I>(&self, values: I) -> Result<OutlierScreen, TemporaError>
    where
        I: IntoIterator<Item = f64>,
    {
        ContinuousSample::new(values).screen_outliers(self.cfg.outlier_confidence)
    }

    /// Wilson score lower bound at the configured confidence.
    ///
    /// # Errors
    /// Only fails if the configured confidence is out of range, which `build` rejects.
    pub fn wilson(&self, positive: f64, total: f64) -> Result<f64, TemporaError> {
        wilson_score(positive, total, self.cfg.wilson_confidence)
    }
}
