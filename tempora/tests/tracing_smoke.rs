use chrono::{DateTime, TimeDelta, Utc};
use tempora::{AggregationTimeSpan, Analyzer};
use tracing_subscriber::EnvFilter;

#[test]
fn analyzer_runs_under_a_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("tempora=debug,tempora_core=debug"))
        .with_test_writer()
        .try_init();

    let t0 = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    let pairs: Vec<_> = (0..48)
        .map(|h| (t0 + TimeDelta::hours(h), f64::from(h as i32)))
        .collect();

    let analyzer = Analyzer::default();
    let daily = analyzer
        .time_range_averages(pairs.clone(), AggregationTimeSpan::Day)
        .unwrap();
    assert!(!daily.is_empty());
    assert!(analyzer.divide(pairs.clone(), pairs).iter().all(|(_, v)| *v == 1.0 || v.is_nan()));
}
