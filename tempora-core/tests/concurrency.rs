use std::sync::Arc;
use std::thread;

use assert_approx_eq::assert_approx_eq;
use chrono::{DateTime, Utc};
use tempora_core::{ConflictResolution, TimeSeries};

const THREADS: u32 = 8;
const KEYS: i64 = 500;

fn ts(s: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(s, 0).unwrap()
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn time_series_is_send_and_sync() {
    assert_send_sync::<TimeSeries>();
}

#[test]
fn concurrent_adds_keep_a_consistent_view() {
    let series = Arc::new(TimeSeries::new(ConflictResolution::Average));
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let series = Arc::clone(&series);
            thread::spawn(move || {
                for i in 0..KEYS {
                    series.add_data_point(ts(i), f64::from(t));
                    if i % 50 == 0 {
                        let stats = series.statistics();
                        assert!(stats.count >= 1 && stats.count <= KEYS as usize);
                        let mean = stats.sum / stats.count as f64;
                        assert!((mean - stats.average).abs() < 1e-9);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(series.count(), KEYS as usize);
    let expected = f64::from(THREADS - 1) / 2.0;
    for value in series.data_points().values() {
        assert_approx_eq!(*value, expected, 1e-9);
    }
}

#[test]
fn batch_inserts_are_atomic_for_readers() {
    let series = Arc::new(TimeSeries::new(ConflictResolution::Replace));
    let writer = {
        let series = Arc::clone(&series);
        thread::spawn(move || {
            for batch in 0..200 {
                series.add_data_points((0..10).map(|i| (ts(batch * 10 + i), 1.0)));
            }
        })
    };
    for _ in 0..200 {
        assert_eq!(series.len() % 10, 0);
    }
    writer.join().unwrap();
    assert_eq!(series.len(), 2_000);
}
