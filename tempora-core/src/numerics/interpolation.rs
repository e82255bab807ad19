use chrono::{DateTime, Utc};
use tempora_types::total_days;

/// Value on the line through `(x_prev, y_prev)` and `(x_i, y_i)` at `x`.
///
/// Distances along the time axis are measured in fractional days. `x` is not
/// checked against `[x_prev, x_i]`; points outside extrapolate.
#[must_use]
pub fn linearly_interpolate(
    y_i: f64,
    y_prev: f64,
    x_i: DateTime<Utc>,
    x_prev: DateTime<Utc>,
    x: DateTime<Utc>,
) -> f64 {
    y_prev + (y_i - y_prev) / total_days(x_i - x_prev) * total_days(x - x_prev)
}

/// [`linearly_interpolate`] over optional inputs; `None` if any bracket value is missing.
#[must_use]
pub fn linearly_interpolate_opt(
    y_i: Option<f64>,
    y_prev: Option<f64>,
    x_i: Option<DateTime<Utc>>,
    x_prev: Option<DateTime<Utc>>,
    x: DateTime<Utc>,
) -> Option<f64> {
    Some(linearly_interpolate(y_i?, y_prev?, x_i?, x_prev?, x))
}

/// Plain numeric linear interpolation; extrapolates outside `[x_prev, x_i]`.
#[must_use]
pub fn linearly_interpolate_f64(y_i: f64, y_prev: f64, x_i: f64, x_prev: f64, x: f64) -> f64 {
    y_prev + (y_i - y_prev) / (x_i - x_prev) * (x - x_prev)
}

/// Interpolate ordered `pairs` onto an ordered `grid`.
///
/// Behavior:
/// - A grid point `g` uses the first bracket with `x_prev < g <= x_i`, so a grid
///   point equal to a key resolves through the bracket ending at that key.
/// - The bracket cursor only moves forward; after a match it resumes one bracket
///   back so repeated or dense grid points reuse it.
/// - Grid points before the second key or after the last key produce nothing.
/// - Fewer than two pairs, or an empty grid, yield an empty result.
#[must_use]
pub fn interpolate_ordered_onto_grid(
    pairs: &[(DateTime<Utc>, f64)],
    grid: &[DateTime<Utc>],
) -> Vec<(DateTime<Utc>, f64)> {
    if grid.is_empty() || pairs.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(grid.len());
    let mut cursor = 1;
    for &g in grid {
        for j in cursor..pairs.len() {
            let (x_prev, y_prev) = pairs[j - 1];
            let (x_i, y_i) = pairs[j];
            if g > x_prev && g <= x_i {
                out.push((g, linearly_interpolate(y_i, y_prev, x_i, x_prev, g)));
                cursor = if j == 1 { 1 } else { j - 1 };
                break;
            }
        }
    }
    out
}
