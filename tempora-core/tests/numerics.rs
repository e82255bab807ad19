use assert_approx_eq::assert_approx_eq;
use chrono::{DateTime, TimeDelta, Utc};
use tempora_core::numerics::differentiation::{differentiate_series, first_derivative, second_derivative};
use tempora_core::numerics::functions::{distance_miles, logistic};
use tempora_core::numerics::interpolation::{
    interpolate_ordered_onto_grid, linearly_interpolate, linearly_interpolate_f64,
    linearly_interpolate_opt,
};
use tempora_core::numerics::sequence::{generate_sequence_f64, generate_sequence_i64};
use tempora_core::{DateTimeGrid, TimeUnits, build_grid_points};

fn ts(s: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(s, 0).unwrap()
}

#[test]
fn interpolation_extrapolates_silently() {
    let t0 = ts(0);
    let t1 = t0 + TimeDelta::days(2);
    assert_approx_eq!(linearly_interpolate(20.0, 0.0, t1, t0, t0 + TimeDelta::days(1)), 10.0);
    assert_approx_eq!(linearly_interpolate(20.0, 0.0, t1, t0, t0 + TimeDelta::days(3)), 30.0);
    assert_approx_eq!(linearly_interpolate_f64(10.0, 0.0, 10.0, 0.0, -5.0), -5.0);

    assert_eq!(linearly_interpolate_opt(None, Some(0.0), Some(t1), Some(t0), t0), None);
    assert_eq!(linearly_interpolate_opt(Some(1.0), Some(0.0), Some(t1), None, t0), None);
    assert_approx_eq!(
        linearly_interpolate_opt(Some(20.0), Some(0.0), Some(t1), Some(t0), t1).unwrap(),
        20.0
    );
}

#[test]
fn ordered_grid_matches_upper_inclusive_brackets() {
    let pairs = [(ts(0), 0.0), (ts(100), 100.0), (ts(200), 0.0)];
    let grid = [ts(0), ts(50), ts(100), ts(100), ts(150), ts(250)];
    let out = interpolate_ordered_onto_grid(&pairs, &grid);
    let keys: Vec<_> = out.iter().map(|(t, _)| *t).collect();
    assert_eq!(keys, vec![ts(50), ts(100), ts(100), ts(150)]);
    assert_approx_eq!(out[0].1, 50.0);
    assert_approx_eq!(out[1].1, 100.0);
    assert_approx_eq!(out[3].1, 50.0);

    assert!(interpolate_ordered_onto_grid(&pairs[..1], &grid).is_empty());
    assert!(interpolate_ordered_onto_grid(&pairs, &[]).is_empty());
}

#[test]
fn finite_differences() {
    let t0 = ts(0);
    assert_eq!(first_derivative(5.0, 1.0, t0, t0, TimeUnits::Seconds), 0.0);
    assert_approx_eq!(
        first_derivative(5.0, 1.0, t0 + TimeDelta::minutes(2), t0, TimeUnits::Minutes),
        2.0
    );
    assert_approx_eq!(
        second_derivative(4.0, 1.0, 0.0, t0 + TimeDelta::hours(2), t0, TimeUnits::Hours),
        2.0
    );
    assert_eq!(differentiate_series(&[1.0, 4.0, 9.0]), vec![3.0, 5.0]);
    assert!(differentiate_series(&[1.0]).is_empty());
    assert!(differentiate_series(&[]).is_empty());
}

#[test]
fn grids_are_evenly_spaced() {
    let start = ts(1_000);
    let points = build_grid_points(start, start + TimeDelta::hours(10), 5).unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points[1] - points[0], TimeDelta::hours(2));
    assert_eq!(points[4], start + TimeDelta::hours(8));
    assert!(build_grid_points(start, start, 0).unwrap_err().is_validation());

    let grid = DateTimeGrid::new(start, TimeDelta::minutes(15), 4).unwrap();
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.start(), start);
    assert_eq!(grid.interval(), TimeDelta::minutes(15));
    assert_eq!(grid.points()[3], start + TimeDelta::minutes(45));
    assert!(DateTimeGrid::new(start, TimeDelta::minutes(15), 0).unwrap().is_empty());

    let overflow = DateTimeGrid::new(DateTime::<Utc>::MAX_UTC, TimeDelta::days(1), 2);
    assert!(!overflow.unwrap_err().is_validation());
}

#[test]
fn sequences_include_the_end() {
    assert_eq!(generate_sequence_i64(1, 10, 3).unwrap(), vec![1, 4, 7, 10]);
    assert_eq!(generate_sequence_i64(1, 9, 3).unwrap(), vec![1, 4, 7]);
    assert!(generate_sequence_i64(5, 1, 1).unwrap().is_empty());
    assert_eq!(
        generate_sequence_i64(i64::MAX - 1, i64::MAX, 1).unwrap(),
        vec![i64::MAX - 1, i64::MAX]
    );
    assert!(generate_sequence_i64(0, 1, 0).unwrap_err().is_validation());

    assert_eq!(
        generate_sequence_f64(0.0, 1.0, 0.25).unwrap(),
        vec![0.0, 0.25, 0.5, 0.75, 1.0]
    );
    assert!(generate_sequence_f64(0.0, 1.0, -1.0).unwrap_err().is_validation());
    assert!(generate_sequence_f64(0.0, f64::INFINITY, 1.0).unwrap_err().is_validation());
}

#[test]
fn logistic_midpoint_and_distance() {
    assert_approx_eq!(logistic(1.0, 1.0, 0.0, 3.0, 3.0), 0.5f32, 1e-6f32);
    assert_approx_eq!(logistic(1.0, 4.0, 1.0, 2.0, 2.0), 3.0f32, 1e-6f32);
    assert!(logistic(1.0, 1.0, 0.0, 0.0, 5.0) > 0.99);

    assert_eq!(distance_miles(0.0, 0.0, 0.0, 0.0), 0.0);
    assert!(distance_miles(45.0, -122.0, 45.0, -122.0) < 1e-3);
    assert_approx_eq!(distance_miles(0.0, 0.0, 0.0, 1.0), 60.0 * 1.1515, 1e-6);
    assert_approx_eq!(
        distance_miles(10.0, 20.0, 30.0, 40.0),
        distance_miles(30.0, 40.0, 10.0, 20.0)
    );
}
