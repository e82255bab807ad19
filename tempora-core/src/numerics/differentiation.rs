use chrono::{DateTime, Utc};
use tempora_types::TimeUnits;

/// Backward difference `(y_i - y_prev) / Δt` with Δt in `units`.
///
/// Coincident timestamps give 0 rather than an infinite slope.
#[must_use]
pub fn first_derivative(
    y_i: f64,
    y_prev: f64,
    x_i: DateTime<Utc>,
    x_prev: DateTime<Utc>,
    units: TimeUnits,
) -> f64 {
    let dt = units.of(x_i - x_prev);
    if dt == 0.0 { 0.0 } else { (y_i - y_prev) / dt }
}

/// Central second difference over three consecutive points.
///
/// Computes `(y_i - 2*y_prev + y_prev2) / (0.5 * Δt)^2` where Δt spans
/// `x_prev2..x_i` in `units`.
#[must_use]
pub fn second_derivative(
    y_i: f64,
    y_prev: f64,
    y_prev2: f64,
    x_i: DateTime<Utc>,
    x_prev2: DateTime<Utc>,
    units: TimeUnits,
) -> f64 {
    let dt = units.of(x_i - x_prev2);
    (y_i - 2.0 * y_prev + y_prev2) / (0.5 * dt).powi(2)
}

/// Adjacent differences `input[i + 1] - input[i]`; one shorter than the input.
#[must_use]
pub fn differentiate_series(input: &[f64]) -> Vec<f64> {
    input.windows(2).map(|w| w[1] - w[0]).collect()
}
