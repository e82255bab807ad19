use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use tempora_types::{ConflictResolution, DateRange, SeriesStatistics};

use super::cache::StatsCache;
use crate::series::MergePolicy;

/// Bookkeeping a [`super::TimeSeries`] keeps next to its points.
///
/// Everything here lives inside the series mutex, so counters, the running
/// range and the statistics cache always change together with the map.
#[derive(Debug, Clone)]
pub(crate) struct TimeSeriesPolicy {
    resolution: ConflictResolution,
    // Contributions per key for `Average`; absent means one.
    average_counts: HashMap<DateTime<Utc>, u32>,
    range: Option<DateRange>,
    cache: StatsCache,
}

impl TimeSeriesPolicy {
    pub(crate) fn new(resolution: ConflictResolution) -> Self {
        Self {
            resolution,
            average_counts: HashMap::new(),
            range: None,
            cache: StatsCache::default(),
        }
    }

    pub(crate) const fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub(crate) const fn is_stale(&self) -> bool {
        self.cache.is_stale()
    }

    pub(crate) fn statistics(&mut self, points: &BTreeMap<DateTime<Utc>, f64>) -> SeriesStatistics {
        self.cache.get_or_refresh(points, self.range)
    }
}

impl MergePolicy<DateTime<Utc>, f64> for TimeSeriesPolicy {
    fn resolve(&mut self, key: &DateTime<Utc>, stored: &f64, incoming: f64) -> f64 {
        let stored = *stored;
        match self.resolution {
            ConflictResolution::Skip => stored,
            ConflictResolution::Replace => incoming,
            ConflictResolution::Average => {
                let seen = self.average_counts.entry(*key).or_insert(1);
                let n = f64::from(*seen);
                *seen = seen.saturating_add(1);
                (stored * n + incoming) / (n + 1.0)
            }
            ConflictResolution::Maximum => {
                if stored > incoming {
                    stored
                } else {
                    incoming
                }
            }
            ConflictResolution::Minimum => {
                if stored < incoming {
                    stored
                } else {
                    incoming
                }
            }
        }
    }

    fn on_inserted(&mut self, key: &DateTime<Utc>, _value: &f64) {
        self.cache.invalidate();
        match &mut self.range {
            Some(range) => {
                range.update(*key);
            }
            None => self.range = Some(DateRange::at(*key)),
        }
    }
}
