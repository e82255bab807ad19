use tempora_types::{MathOperation, TemporaError, TimeUnits};

#[test]
fn within_relabels_only_computation_failures() {
    let e = TemporaError::computation("grid", "overflow").within("interpolate_onto_grid");
    match e {
        TemporaError::Computation { context, cause } => {
            assert_eq!(context, "interpolate_onto_grid");
            assert_eq!(cause, "grid: overflow");
        }
        other => panic!("unexpected {other:?}"),
    }

    let v = TemporaError::invalid_arg("bad").within("anything");
    assert_eq!(v, TemporaError::InvalidArg("bad".into()));
}

#[test]
fn divide_skips_zero_divisor() {
    assert_eq!(MathOperation::Divide.apply(1.0, 0.0), None);
    assert_eq!(MathOperation::Divide.apply(1.0, 4.0), Some(0.25));
    assert_eq!(MathOperation::Subtract.apply(1.0, 4.0), Some(-3.0));
}

#[test]
fn time_units_scale_fractional_deltas() {
    let d = chrono::TimeDelta::milliseconds(90_500);
    assert!((TimeUnits::Milliseconds.of(d) - 90_500.0).abs() < 1e-9);
    assert!((TimeUnits::Seconds.of(d) - 90.5).abs() < 1e-12);
    assert!((TimeUnits::Minutes.of(d) - 90.5 / 60.0).abs() < 1e-12);
    assert!((TimeUnits::Hours.of(d) - 90.5 / 3600.0).abs() < 1e-12);
}
