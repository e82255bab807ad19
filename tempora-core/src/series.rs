//! Generic ordered keyed series with pluggable conflict resolution.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use parking_lot::Mutex;

/// Hooks a [`DataSeries`] calls while merging new entries.
///
/// Both hooks run inside the series' critical section, so a policy may keep
/// per-key bookkeeping (counters, caches, ranges) without its own locking.
pub trait MergePolicy<K, V> {
    /// Combine the stored value for `key` with an incoming one.
    ///
    /// Only called when `key` is already present; a first insert stores the raw value.
    fn resolve(&mut self, key: &K, stored: &V, incoming: V) -> V;

    /// Observe a key/value pair after it has been written.
    fn on_inserted(&mut self, key: &K, value: &V);
}

/// Policy where the most recently added value wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastWins;

impl<K, V> MergePolicy<K, V> for LastWins {
    fn resolve(&mut self, _key: &K, _stored: &V, incoming: V) -> V {
        incoming
    }

    fn on_inserted(&mut self, _key: &K, _value: &V) {}
}

/// Policy assembled from a resolve function and a post-insert callback.
#[derive(Clone)]
pub struct FnPolicy<R, H> {
    resolve: R,
    inserted: H,
}

impl<R, H> FnPolicy<R, H> {
    /// Build a policy from its two hooks.
    pub const fn new(resolve: R, inserted: H) -> Self {
        Self { resolve, inserted }
    }
}

impl<K, V, R, H> MergePolicy<K, V> for FnPolicy<R, H>
where
    R: FnMut(&K, &V, V) -> V,
    H: FnMut(&K, &V),
{
    fn resolve(&mut self, key: &K, stored: &V, incoming: V) -> V {
        (self.resolve)(key, stored, incoming)
    }

    fn on_inserted(&mut self, key: &K, value: &V) {
        (self.inserted)(key, value);
    }
}

struct SeriesState<K, V, P> {
    points: BTreeMap<K, V>,
    policy: P,
}

/// Mapping from an ordered key to a value, iterated in key order.
///
/// Behavior:
/// - Each key appears at most once; duplicates are merged through the policy.
/// - All mutation and policy access is serialized by one mutex per instance.
/// - [`DataSeries::data_points`] hands out an independent sorted copy.
pub struct DataSeries<K, V, P> {
    state: Mutex<SeriesState<K, V, P>>,
}

impl<K, V, P> DataSeries<K, V, P>
where
    K: Ord + Clone,
    V: Clone,
    P: MergePolicy<K, V>,
{
    /// Create an empty series governed by `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            state: Mutex::new(SeriesState {
                points: BTreeMap::new(),
                policy,
            }),
        }
    }

    /// Merge a single entry.
    pub fn add_data_point(&self, key: K, value: V) {
        let mut guard = self.state.lock();
        let SeriesState { points, policy } = &mut *guard;
        merge(points, policy, key, value);
    }

    /// Merge a batch of entries in iteration order, atomically with respect to readers.
    ///
    /// The input is drained before the lock is taken, so the iterator may
    /// itself read from this series.
    pub fn add_data_points<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries: Vec<(K, V)> = entries.into_iter().collect();
        if entries.is_empty() {
            return;
        }
        let mut guard = self.state.lock();
        let SeriesState { points, policy } = &mut *guard;
        for (key, value) in entries {
            merge(points, policy, key, value);
        }
    }

    /// Sorted snapshot of the stored entries.
    pub fn data_points(&self) -> BTreeMap<K, V> {
        self.state.lock().points.clone()
    }

    /// Sorted snapshot as a vector of pairs.
    pub fn key_value_pairs(&self) -> Vec<(K, V)> {
        self.state
            .lock()
            .points
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.state.lock().points.len()
    }

    /// `true` if no entry has been added.
    pub fn is_empty(&self) -> bool {
        self.state.lock().points.is_empty()
    }

    /// Run `f` against the live entries and the policy inside the critical section.
    ///
    /// `f` must not call back into this series.
    pub fn with_locked<R>(&self, f: impl FnOnce(&BTreeMap<K, V>, &mut P) -> R) -> R {
        let mut guard = self.state.lock();
        let SeriesState { points, policy } = &mut *guard;
        f(points, policy)
    }
}

fn merge<K, V, P>(points: &mut BTreeMap<K, V>, policy: &mut P, key: K, value: V)
where
    K: Ord + Clone,
    P: MergePolicy<K, V>,
{
    match points.entry(key) {
        Entry::Occupied(mut slot) => {
            let merged = policy.resolve(slot.key(), slot.get(), value);
            slot.insert(merged);
            policy.on_inserted(slot.key(), slot.get());
        }
        Entry::Vacant(slot) => {
            let key = slot.key().clone();
            let stored = slot.insert(value);
            policy.on_inserted(&key, stored);
        }
    }
}

impl<K, V, P> Default for DataSeries<K, V, P>
where
    K: Ord + Clone,
    V: Clone,
    P: MergePolicy<K, V> + Default,
{
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<K, V, P> Clone for DataSeries<K, V, P>
where
    K: Clone,
    V: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        let guard = self.state.lock();
        Self {
            state: Mutex::new(SeriesState {
                points: guard.points.clone(),
                policy: guard.policy.clone(),
            }),
        }
    }
}

impl<K, V, P> fmt::Debug for DataSeries<K, V, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.state.lock();
        f.debug_struct("DataSeries")
            .field("points", &guard.points)
            .finish_non_exhaustive()
    }
}
