use serde::{Deserialize, Serialize};
use tempora_types::{Confidence, DescriptiveStatistics, TemporaError};

use super::tdist::sample_mean_is_statistically_different;

/// Result of t-test outlier screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierScreen {
    /// Statistics of the values that were kept.
    pub retained: DescriptiveStatistics,
    /// Statistics of the full sample, outliers included.
    pub baseline: DescriptiveStatistics,
    /// Values removed as outliers, in input order.
    pub outliers: Vec<f64>,
}

/// A raw sample of continuous values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContinuousSample {
    values: Vec<f64>,
}

impl ContinuousSample {
    /// Wrap `values`, keeping their order.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One-pass descriptive statistics of the whole sample.
    #[must_use]
    pub fn calculate_statistics(&self) -> DescriptiveStatistics {
        describe(&self.values)
    }

    /// Statistics after dropping values whose deviation from the mean is
    /// significant at `confidence`.
    ///
    /// # Errors
    /// Returns `Computation` if the t-distribution table is unavailable.
    pub fn calculate_statistics_without_outliers(
        &self,
        confidence: Confidence,
    ) -> Result<DescriptiveStatistics, TemporaError> {
        self.screen_outliers(confidence).map(|screen| screen.retained)
    }

    /// Split the sample into retained values and t-test outliers.
    ///
    /// Every value is tested against the mean and standard deviation of the
    /// full sample; statistics are then recomputed over the retained values.
    ///
    /// # Errors
    /// Returns `Computation` if the t-distribution table is unavailable.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tempora_core::statistics::screen_outliers",
            skip(self),
            fields(len = self.values.len()),
        )
    )]
    pub fn screen_outliers(&self, confidence: Confidence) -> Result<OutlierScreen, TemporaError> {
        let baseline = describe(&self.values);
        let mut kept = Vec::with_capacity(self.values.len());
        let mut outliers = Vec::new();
        for &value in &self.values {
            let different = sample_mean_is_statistically_different(
                value,
                baseline.average,
                baseline.count,
                baseline.standard_deviation,
                confidence,
            )
            .map_err(|e| e.within("outlier screening"))?;
            if different {
                outliers.push(value);
            } else {
                kept.push(value);
            }
        }
        Ok(OutlierScreen {
            retained: describe(&kept),
            baseline,
            outliers,
        })
    }
}

impl FromIterator<f64> for ContinuousSample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Sample standard deviation with an N-1 divisor; 0 for two values or fewer.
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    let count = values.len();
    if count <= 2 {
        return 0.0;
    }
    let average = values.iter().sum::<f64>() / count as f64;
    let squares: f64 = values.iter().map(|v| (v - average).powi(2)).sum();
    (squares / (count - 1) as f64).sqrt()
}

fn describe(data: &[f64]) -> DescriptiveStatistics {
    let count = data.len();
    if count == 0 {
        return DescriptiveStatistics {
            maximum: 0.0,
            minimum: 0.0,
            sum: 0.0,
            count: 0,
            average: 0.0,
            l2_norm: 0.0,
            standard_deviation: 0.0,
            mean_deviation: 0.0,
        };
    }

    let mut maximum = f64::MIN;
    let mut minimum = f64::MAX;
    let mut sum = 0.0;
    let mut squares = 0.0;
    for &v in data {
        maximum = maximum.max(v);
        minimum = minimum.min(v);
        sum += v;
        squares += v * v;
    }
    let n = count as f64;
    let average = sum / n;
    let mean_deviation = data.iter().map(|v| (v - average).abs()).sum::<f64>() / n;

    DescriptiveStatistics {
        maximum,
        minimum,
        sum,
        count,
        average,
        l2_norm: squares.sqrt(),
        standard_deviation: standard_deviation(data),
        mean_deviation,
    }
}
