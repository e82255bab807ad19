use std::f64::consts::PI;

// e scaled by 1000, paired with the `m` factor in `logistic`.
const LOGISTIC_BASE: f64 = 2_718.281_828_459_045_3;

const STATUTE_MILES_PER_NAUTICAL: f64 = 1.1515;

/// Generalized logistic curve `b + k / (1 + (1000e * m)^(c - x))`.
#[must_use]
pub fn logistic(m: f32, k: f32, b: f32, c: f32, x: f32) -> f32 {
    let power = (LOGISTIC_BASE * f64::from(m)).powf(f64::from(c - x)) as f32;
    b + k * (1.0 / (1.0 + power))
}

/// Great-circle distance in statute miles between two coordinates in degrees.
///
/// Uses the spherical law of cosines; the cosine is clamped into `[-1, 1]` so
/// identical points give 0 rather than NaN.
#[must_use]
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let rlat1 = PI * lat1 / 180.0;
    let rlat2 = PI * lat2 / 180.0;
    let rtheta = PI * (lon1 - lon2) / 180.0;
    let cosine = rlat1.sin() * rlat2.sin() + rlat1.cos() * rlat2.cos() * rtheta.cos();
    // Degrees of arc -> nautical miles -> statute miles.
    cosine.clamp(-1.0, 1.0).acos() * 180.0 / PI * 60.0 * STATUTE_MILES_PER_NAUTICAL
}
