use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tempora_types::{DataPoint, DateRange, SeriesStatistics};

/// Last computed statistics plus a dirty bit.
///
/// Starts stale; any insert marks it stale again and the next read recomputes
/// it in one pass over the points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatsCache {
    stale: bool,
    value: SeriesStatistics,
}

impl Default for StatsCache {
    fn default() -> Self {
        Self {
            stale: true,
            value: SeriesStatistics::empty(),
        }
    }
}

impl StatsCache {
    pub(crate) const fn is_stale(&self) -> bool {
        self.stale
    }

    pub(crate) const fn invalidate(&mut self) {
        self.stale = true;
    }

    pub(crate) fn get_or_refresh(
        &mut self,
        points: &BTreeMap<DateTime<Utc>, f64>,
        date_range: Option<DateRange>,
    ) -> SeriesStatistics {
        if self.stale {
            self.value = compute(points, date_range);
            self.stale = false;
        }
        self.value
    }
}

fn compute(points: &BTreeMap<DateTime<Utc>, f64>, date_range: Option<DateRange>) -> SeriesStatistics {
    let (Some((&first_ts, &first_value)), Some((&last_ts, &last_value))) =
        (points.first_key_value(), points.last_key_value())
    else {
        return SeriesStatistics {
            date_range,
            ..SeriesStatistics::empty()
        };
    };

    let count = points.len();
    let mut sum = 0.0;
    let mut maximum_point = DataPoint::new(first_ts, first_value);
    let mut minimum_point = maximum_point;

    // Strict comparisons keep the earliest point on ties.
    for (&ts, &value) in points {
        sum += value;
        if value > maximum_point.value {
            maximum_point = DataPoint::new(ts, value);
        }
        if value < minimum_point.value {
            minimum_point = DataPoint::new(ts, value);
        }
    }

    let average = sum / count as f64;
    let standard_deviation = if count > 2 {
        let squares: f64 = points.values().map(|v| (v - average).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    SeriesStatistics {
        date_range,
        count,
        maximum: maximum_point.value,
        minimum: minimum_point.value,
        average,
        standard_deviation,
        sum,
        latest: Some(DataPoint::new(last_ts, last_value)),
        maximum_point: Some(maximum_point),
        minimum_point: Some(minimum_point),
    }
}
