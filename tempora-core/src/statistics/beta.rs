use rand::Rng;
use rand_distr::{Beta, Distribution};
use tempora_types::TemporaError;

/// Draw one sample from `Beta(alpha, beta)` using `rng`.
///
/// # Errors
/// Returns `InvalidArg` for negative parameters, and for zero or non-finite
/// ones the distribution cannot be built from.
pub fn beta_sample<R>(alpha: f64, beta: f64, rng: &mut R) -> Result<f64, TemporaError>
where
    R: Rng + ?Sized,
{
    if alpha < 0.0 || beta < 0.0 {
        return Err(TemporaError::invalid_arg(format!(
            "beta parameters cannot be negative (alpha={alpha}, beta={beta})"
        )));
    }
    let dist = Beta::new(alpha, beta).map_err(|e| {
        TemporaError::invalid_arg(format!("beta(alpha={alpha}, beta={beta}): {e}"))
    })?;
    Ok(dist.sample(rng))
}
