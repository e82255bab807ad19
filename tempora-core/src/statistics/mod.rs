//! Statistics over raw samples.
//!
//! Modules include:
//! - `percentile`: sorted-sample percentile lookups
//! - `sample`: descriptive statistics and t-test outlier screening
//! - `tdist`: Student-t critical values from an embedded table
//! - `zscore` / `wilson`: normal quantiles and Wilson score bounds
//! - `beta` / `weights`: random sampling helpers
mod beta;
mod percentile;
mod sample;
mod tdist;
mod weights;
mod wilson;
mod zscore;

pub use beta::beta_sample;
pub use percentile::Percentile;
pub use sample::{ContinuousSample, OutlierScreen, standard_deviation};
pub use tdist::{map_degrees_of_freedom, sample_mean_is_statistically_different, t_critical};
pub use weights::{normalize_weights, weighted_random_index};
pub use wilson::wilson_score;
pub use zscore::{normal_cdf, z_score};
