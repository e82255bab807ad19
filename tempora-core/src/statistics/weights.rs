use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempora_types::TemporaError;

/// Rescale integer weights into `[0, 1]`, carrying each payload along.
///
/// The smallest weight maps to 0 and the largest to 1. When every weight is
/// equal each entry gets 1.
#[must_use]
pub fn normalize_weights<T: Clone>(values: &[(i64, T)]) -> Vec<(f32, T)> {
    let (Some(min), Some(max)) = (
        values.iter().map(|(w, _)| *w).min(),
        values.iter().map(|(w, _)| *w).max(),
    ) else {
        return Vec::new();
    };
    let delta = i128::from(max) - i128::from(min);
    values
        .iter()
        .map(|(w, payload)| {
            let scaled = if delta == 0 {
                1.0
            } else {
                ((i128::from(*w) - i128::from(min)) as f64 / delta as f64) as f32
            };
            (scaled, payload.clone())
        })
        .collect()
}

/// Index drawn with probability proportional to its weight.
///
/// The same `seed` always picks the same index for the same weights.
///
/// # Errors
/// Returns `InvalidArg` for an empty slice or a negative (or NaN) weight.
pub fn weighted_random_index(weights: &[f32], seed: u64) -> Result<usize, TemporaError> {
    if weights.is_empty() {
        return Err(TemporaError::invalid_arg("weights cannot be empty"));
    }
    if let Some(bad) = weights.iter().find(|w| !(**w >= 0.0)) {
        return Err(TemporaError::invalid_arg(format!(
            "weights must be non-negative, got {bad}"
        )));
    }

    let total: f32 = weights.iter().sum();
    let offset = StdRng::seed_from_u64(seed).random::<f64>() * f64::from(total);
    let mut cumulative = 0.0f32;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if offset <= f64::from(cumulative) {
            return Ok(index);
        }
    }
    Err(TemporaError::computation(
        "weighted_random_index",
        format!("offset {offset} exceeds cumulative weight {cumulative}"),
    ))
}
