use std::cell::Cell;
use std::rc::Rc;

use tempora_core::{DataSeries, FnPolicy, LastWins, MergePolicy};

#[test]
fn last_wins_policy_keeps_latest_value() {
    let series: DataSeries<u32, &str, LastWins> = DataSeries::default();
    series.add_data_points([(2, "b"), (1, "a"), (2, "c")]);
    assert_eq!(series.key_value_pairs(), vec![(1, "a"), (2, "c")]);
    assert_eq!(series.len(), 2);
    assert!(!series.is_empty());
}

#[test]
fn hooks_run_for_every_insert() {
    let inserted = Rc::new(Cell::new(0));
    let counter = Rc::clone(&inserted);
    let policy = FnPolicy::new(
        |_: &u32, stored: &i64, incoming: i64| stored + incoming,
        move |_: &u32, _: &i64| counter.set(counter.get() + 1),
    );
    let series: DataSeries<u32, i64, _> = DataSeries::new(policy);
    series.add_data_point(1, 5);
    series.add_data_point(1, 7);
    series.add_data_point(2, 1);

    assert_eq!(inserted.get(), 3);
    assert_eq!(series.data_points().get(&1), Some(&12));
}

#[test]
fn resolve_is_only_called_for_existing_keys() {
    #[derive(Default)]
    struct Counting {
        resolved: usize,
        inserted: usize,
    }

    impl MergePolicy<char, u8> for Counting {
        fn resolve(&mut self, _key: &char, stored: &u8, incoming: u8) -> u8 {
            self.resolved += 1;
            (*stored).max(incoming)
        }

        fn on_inserted(&mut self, _key: &char, _value: &u8) {
            self.inserted += 1;
        }
    }

    let series: DataSeries<char, u8, Counting> = DataSeries::new(Counting::default());
    series.add_data_points([('a', 1), ('b', 2), ('a', 9), ('a', 3)]);
    let (resolved, inserted) = series.with_locked(|points, policy| {
        assert_eq!(points.get(&'a'), Some(&9));
        (policy.resolved, policy.inserted)
    });
    assert_eq!((resolved, inserted), (2, 4));
}

#[test]
fn empty_batches_leave_the_series_untouched() {
    let series: DataSeries<u32, f64, LastWins> = DataSeries::default();
    series.add_data_points(Vec::new());
    assert!(series.is_empty());
    assert!(series.data_points().is_empty());
}
