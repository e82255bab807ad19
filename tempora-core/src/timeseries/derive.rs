use tempora_types::{ConflictResolution, MathOperation, TimeUnits};

use super::TimeSeries;
use crate::numerics::differentiation::{first_derivative, second_derivative};

impl TimeSeries {
    /// First derivative keyed by the later point of each adjacent pair.
    ///
    /// The first point has no predecessor and produces nothing. The result uses
    /// `Maximum` resolution.
    #[must_use]
    pub fn compute_first_derivative(&self, units: TimeUnits) -> Self {
        let pairs = self.key_value_pairs();
        Self::with_points(
            ConflictResolution::Maximum,
            pairs.windows(2).map(|w| {
                let (x_prev, y_prev) = w[0];
                let (x_i, y_i) = w[1];
                (x_i, first_derivative(y_i, y_prev, x_i, x_prev, units))
            }),
        )
    }

    /// Second derivative keyed by the last point of each window of three.
    #[must_use]
    pub fn compute_second_derivative(&self, units: TimeUnits) -> Self {
        let pairs = self.key_value_pairs();
        Self::with_points(
            ConflictResolution::Maximum,
            pairs.windows(3).map(|w| {
                let (x_prev2, y_prev2) = w[0];
                let (_, y_prev) = w[1];
                let (x_i, y_i) = w[2];
                (x_i, second_derivative(y_i, y_prev, y_prev2, x_i, x_prev2, units))
            }),
        )
    }

    /// Percent change of each point relative to its predecessor, passed through `post`.
    ///
    /// Behavior:
    /// - `(curr - prev) / |prev| * 100` for a non-zero predecessor, with infinities
    ///   clamped to `f64::MAX` / `f64::MIN`.
    /// - A zero predecessor gives `post(f64::MAX)` for a positive current value,
    ///   `post(f64::MIN)` for a negative one and a plain `0.0` when both are zero.
    pub fn compute_relative_change_in_percent<F>(&self, post: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let pairs = self.key_value_pairs();
        Self::with_points(
            ConflictResolution::Maximum,
            pairs.windows(2).map(|w| {
                let (_, prev) = w[0];
                let (ts, curr) = w[1];
                (ts, relative_change(prev, curr, &post))
            }),
        )
    }

    /// Magnitude of percent increases; non-positive changes become 0.
    #[must_use]
    pub fn compute_relative_increase_in_percent(&self) -> Self {
        self.compute_relative_change_in_percent(|v| if v <= 0.0 { 0.0 } else { v.abs() })
    }

    /// Magnitude of percent decreases; non-negative changes become 0.
    #[must_use]
    pub fn compute_relative_decrease_in_percent(&self) -> Self {
        self.compute_relative_change_in_percent(|v| if v >= 0.0 { 0.0 } else { v.abs() })
    }

    /// Mean of each run of `window` consecutive values, keyed by the run's first key.
    ///
    /// A zero window, or one longer than the series, gives an empty result. The
    /// result keeps this series' conflict mode.
    #[must_use]
    pub fn compute_forward_rolling_average(&self, window: usize) -> Self {
        let out = Self::new(self.resolution);
        if window == 0 {
            return out;
        }
        let pairs = self.key_value_pairs();
        let width = window as f64;
        out.add_data_points(
            pairs
                .windows(window)
                .map(|w| (w[0].0, w.iter().map(|(_, v)| v).sum::<f64>() / width)),
        );
        out
    }

    /// Combine with `other` after interpolating it onto this series' keys.
    ///
    /// Keys without an interpolated counterpart are omitted, as are keys where a
    /// division would be by exactly zero. The result uses `Replace` resolution.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tempora_core::timeseries::perform_math_on",
            skip(self, other),
        )
    )]
    #[must_use]
    pub fn perform_math_on(&self, other: &Self, operation: MathOperation) -> Self {
        let pairs = self.key_value_pairs();
        let keys: Vec<_> = pairs.iter().map(|(ts, _)| *ts).collect();
        let aligned = other.interpolate_onto_grid(&keys).data_points();

        let combined: Vec<_> = pairs
            .into_iter()
            .filter_map(|(ts, value)| {
                aligned
                    .get(&ts)
                    .map(|&rhs| (ts, operation.apply(value, rhs)))
            })
            .collect();
        #[cfg(feature = "tracing")]
        {
            let skipped = combined.iter().filter(|(_, r)| r.is_none()).count();
            if skipped > 0 {
                tracing::debug!(skipped, "omitted points with a zero divisor");
            }
        }
        Self::with_points(
            ConflictResolution::Replace,
            combined
                .into_iter()
                .filter_map(|(ts, result)| result.map(|v| (ts, v))),
        )
    }

    /// `self + other` on this series' keys.
    #[must_use]
    pub fn add_to(&self, other: &Self) -> Self {
        self.perform_math_on(other, MathOperation::Add)
    }

    /// `self - other` on this series' keys.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.perform_math_on(other, MathOperation::Subtract)
    }

    /// `self * other` on this series' keys.
    #[must_use]
    pub fn multiply_by(&self, other: &Self) -> Self {
        self.perform_math_on(other, MathOperation::Multiply)
    }

    /// `self / other` on this series' keys, skipping zero divisors.
    #[must_use]
    pub fn divide_by(&self, other: &Self) -> Self {
        self.perform_math_on(other, MathOperation::Divide)
    }

    /// Every value scaled by `constant`, with `Replace` resolution.
    #[must_use]
    pub fn multiply_by_constant(&self, constant: f64) -> Self {
        Self::with_points(
            ConflictResolution::Replace,
            self.key_value_pairs()
                .into_iter()
                .map(|(ts, v)| (ts, constant * v)),
        )
    }
}

fn relative_change(prev: f64, curr: f64, post: impl Fn(f64) -> f64) -> f64 {
    if prev == 0.0 {
        return if curr > 0.0 {
            post(f64::MAX)
        } else if curr < 0.0 {
            post(f64::MIN)
        } else {
            0.0
        };
    }
    let change = (curr - prev) / prev.abs() * 100.0;
    if change == f64::INFINITY {
        post(f64::MAX)
    } else if change == f64::NEG_INFINITY {
        post(f64::MIN)
    } else {
        post(change)
    }
}
