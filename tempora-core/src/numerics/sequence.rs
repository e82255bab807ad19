use tempora_types::TemporaError;

/// `start, start + step, ...` up to and including `end`.
///
/// An `end` below `start` yields an empty sequence.
///
/// # Errors
/// Returns `InvalidArg` if `step` is not positive.
pub fn generate_sequence_i64(start: i64, end: i64, step: i64) -> Result<Vec<i64>, TemporaError> {
    if step <= 0 {
        return Err(TemporaError::invalid_arg(format!(
            "sequence step must be positive, got {step}"
        )));
    }
    Ok(std::iter::successors(Some(start), |v| v.checked_add(step))
        .take_while(|v| *v <= end)
        .collect())
}

/// Floating-point counterpart of [`generate_sequence_i64`].
///
/// Values accumulate by repeated addition, so the last element is subject to
/// rounding: `0.0..=1.0` by `0.1` may stop at `0.9999999999999999`.
///
/// # Errors
/// Returns `InvalidArg` if `step` is not positive or either bound is not finite.
pub fn generate_sequence_f64(start: f64, end: f64, step: f64) -> Result<Vec<f64>, TemporaError> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(TemporaError::invalid_arg(format!(
            "sequence step must be positive and finite, got {step}"
        )));
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(TemporaError::invalid_arg(
            "sequence bounds must be finite",
        ));
    }
    let mut out = Vec::new();
    let mut value = start;
    while value <= end {
        out.push(value);
        let next = value + step;
        // A step below the ulp of `value` would never advance.
        if next == value {
            break;
        }
        value = next;
    }
    Ok(out)
}
