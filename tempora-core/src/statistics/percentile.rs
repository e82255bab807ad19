use tempora_types::{StandardPercentiles, TemporaError};

/// Sorted sample supporting nearest-rank-below percentile lookups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Percentile {
    values: Vec<f64>,
}

impl Percentile {
    /// Take ownership of `values` and sort them ascending (NaN last).
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values: Vec<f64> = values.into_iter().collect();
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    /// Sorted values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at index `floor((count - 1) * p / 100)`; 0 for an empty sample.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `p > 100`.
    pub fn get_percentile(&self, p: u32) -> Result<f64, TemporaError> {
        if p > 100 {
            return Err(TemporaError::invalid_arg(format!(
                "percentile {p} must be between 0 and 100"
            )));
        }
        let count = self.values.len();
        if count == 0 {
            return Ok(0.0);
        }
        let index = (count - 1) * p as usize / 100;
        self.values.get(index).copied().ok_or_else(|| {
            TemporaError::computation(
                "percentile",
                format!("index {index} out of range for {count} values"),
            )
        })
    }

    /// P01, P05, P10, P25, P50, P75, P95 and P99 in one call.
    ///
    /// # Errors
    /// Propagates lookup failures from [`Percentile::get_percentile`].
    pub fn standard_percentiles(&self) -> Result<StandardPercentiles, TemporaError> {
        Ok(StandardPercentiles {
            p01: self.get_percentile(1)?,
            p05: self.get_percentile(5)?,
            p10: self.get_percentile(10)?,
            p25: self.get_percentile(25)?,
            p50: self.get_percentile(50)?,
            p75: self.get_percentile(75)?,
            p95: self.get_percentile(95)?,
            p99: self.get_percentile(99)?,
        })
    }
}

impl FromIterator<f64> for Percentile {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}
