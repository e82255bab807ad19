use chrono::{DateTime, Utc};

use super::TimeSeries;
use crate::numerics::interpolation::{interpolate_ordered_onto_grid, linearly_interpolate};

impl TimeSeries {
    /// Linearly interpolated value at `ts`.
    ///
    /// Returns `None` outside the key range (and for an empty series). The first
    /// and last keys return their stored values exactly; anything else is
    /// interpolated between the first key at or after `ts` and its predecessor.
    #[must_use]
    pub fn interpolate_value_at(&self, ts: DateTime<Utc>) -> Option<f64> {
        self.inner.with_locked(|points, _| {
            let (&first, &first_value) = points.first_key_value()?;
            let (&last, &last_value) = points.last_key_value()?;
            if ts < first || ts > last {
                return None;
            }
            if ts == first {
                return Some(first_value);
            }
            if ts == last {
                return Some(last_value);
            }
            let (&x_i, &y_i) = points.range(ts..).next()?;
            let (&x_prev, &y_prev) = points.range(..ts).next_back()?;
            Some(linearly_interpolate(y_i, y_prev, x_i, x_prev, ts))
        })
    }

    /// Series of interpolated values at each point of `grid`.
    ///
    /// The grid is sorted first; points outside `(first key, last key]` are
    /// dropped. The result keeps this series' conflict mode.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tempora_core::timeseries::interpolate_onto_grid",
            skip_all,
            fields(grid_len = grid.len()),
        )
    )]
    #[must_use]
    pub fn interpolate_onto_grid(&self, grid: &[DateTime<Utc>]) -> Self {
        let mut sorted = grid.to_vec();
        sorted.sort_unstable();
        let pairs = self.key_value_pairs();
        Self::with_points(
            self.resolution,
            interpolate_ordered_onto_grid(&pairs, &sorted),
        )
    }
}
