use tempora_types::TemporaError;

use super::zscore::z_score;

/// Lower bound of the Wilson score interval for `positive` successes out of `total`.
///
/// Returns 0 when `total <= 0`, `positive < 0` or `positive > total`.
///
/// ```
/// use tempora_core::statistics::wilson_score;
///
/// let lower = wilson_score(80.0, 100.0, 0.95).unwrap();
/// assert!(lower > 0.7 && lower < 0.8);
/// ```
///
/// # Errors
/// Returns `InvalidArg` if `confidence` is outside `[0, 1]`.
pub fn wilson_score(positive: f64, total: f64, confidence: f64) -> Result<f64, TemporaError> {
    let z = z_score(confidence)?;
    let negative = total - positive;
    if !(total > 0.0 && positive >= 0.0 && negative >= 0.0) {
        return Ok(0.0);
    }
    let z2 = z * z;
    let center = (positive + z2 / 2.0) / total;
    let spread = z * (positive * negative / total + z2 / 4.0).sqrt() / total;
    let denominator = 1.0 + z2 / total;
    Ok((center - spread) / denominator)
}
