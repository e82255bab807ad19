use tempora_types::TemporaError;

const Z_MAX: f64 = 6.0;
const Z_EPSILON: f64 = 1e-6;

/// Critical `|z|` for a two-sided interval at `confidence`.
///
/// Inverts [`normal_cdf`] by bisection on `[-6, 6]` at the right-side quantile
/// `(1 + confidence) / 2`, e.g. 0.95 gives about 1.96.
///
/// # Errors
/// Returns `InvalidArg` if `confidence` is outside `[0, 1]` or NaN.
pub fn z_score(confidence: f64) -> Result<f64, TemporaError> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(TemporaError::invalid_arg(format!(
            "confidence {confidence} must be between 0 and 1"
        )));
    }
    Ok(critical_normal_z((1.0 + confidence) / 2.0).abs())
}

fn critical_normal_z(p: f64) -> f64 {
    let mut lo = -Z_MAX;
    let mut hi = Z_MAX;
    let mut z = 0.0;
    while hi - lo > Z_EPSILON {
        if normal_cdf(z) > p {
            hi = z;
        } else {
            lo = z;
        }
        z = (hi + lo) * 0.5;
    }
    z
}

/// Standard normal cumulative probability `P(Z <= z)`.
///
/// Polynomial approximation (Ibbetson, CACM Algorithm 209) with about six
/// digits of accuracy; saturates to 0 or 1 beyond `|z| = 6`.
#[must_use]
pub fn normal_cdf(z: f64) -> f64 {
    let x = if z == 0.0 {
        0.0
    } else {
        let y = 0.5 * z.abs();
        if y > Z_MAX * 0.5 {
            1.0
        } else if y < 1.0 {
            let w = y * y;
            ((((((((0.000_124_818_987 * w - 0.001_075_204_047) * w + 0.005_198_775_019) * w
                - 0.019_198_292_004)
                * w
                + 0.059_054_035_642)
                * w
                - 0.151_968_751_364)
                * w
                + 0.319_152_932_694)
                * w
                - 0.531_923_007_3)
                * w
                + 0.797_884_560_593)
                * y
                * 2.0
        } else {
            let y = y - 2.0;
            (((((((((((((-0.000_045_255_659 * y + 0.000_152_529_29) * y - 0.000_019_538_132)
                * y
                - 0.000_676_904_986)
                * y
                + 0.001_390_604_284)
                * y
                - 0.000_794_620_82)
                * y
                - 0.002_034_254_874)
                * y
                + 0.006_549_791_214)
                * y
                - 0.010_557_625_006)
                * y
                + 0.011_630_447_319)
                * y
                - 0.009_279_453_341)
                * y
                + 0.005_353_579_108)
                * y
                - 0.002_141_268_741)
                * y
                + 0.000_535_310_849)
                * y
                + 0.999_936_657_524
        }
    };
    if z > 0.0 { (x + 1.0) * 0.5 } else { (1.0 - x) * 0.5 }
}
