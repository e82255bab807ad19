//! Stateless numeric helpers used by the series types and exposed for direct use.
//!
//! Modules include:
//! - `interpolation`: linear interpolation over timestamps and plain floats
//! - `differentiation`: finite-difference derivatives
//! - `grid`: evenly spaced timestamp grids
//! - `sequence`: inclusive arithmetic sequences
//! - `functions`: logistic curve and great-circle distance
/// Finite-difference formulas parameterized by time unit.
pub mod differentiation;
/// Closed-form scalar functions.
pub mod functions;
/// Evenly spaced timestamp grids.
pub mod grid;
/// Linear interpolation helpers.
pub mod interpolation;
/// Inclusive arithmetic sequences.
pub mod sequence;
