//! Date ranges and aggregation segments.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::TemporaError;

/// Closed range `[start, end]` of timestamps with `start <= end`.
///
/// Behavior:
/// - Construction and the setters reject any combination with `start > end`.
/// - [`DateRange::update`] only ever widens the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RangeRepr> for DateRange {
    type Error = TemporaError;

    fn try_from(r: RangeRepr) -> Result<Self, Self::Error> {
        Self::new(r.start, r.end)
    }
}

impl From<DateRange> for RangeRepr {
    fn from(r: DateRange) -> Self {
        Self {
            start: r.start,
            end: r.end,
        }
    }
}

fn ensure_ordered(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), TemporaError> {
    if end < start {
        return Err(TemporaError::invalid_state(format!(
            "range start {start} must be less than or equal to end {end}"
        )));
    }
    Ok(())
}

impl DateRange {
    /// Build a range.
    ///
    /// # Errors
    /// Returns `InvalidState` if `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporaError> {
        ensure_ordered(start, end)?;
        Ok(Self { start, end })
    }

    /// Degenerate range covering a single instant.
    #[must_use]
    pub const fn at(ts: DateTime<Utc>) -> Self {
        Self { start: ts, end: ts }
    }

    /// Inclusive start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Inclusive end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Replace the start.
    ///
    /// # Errors
    /// Returns `InvalidState` (leaving the range unchanged) if `start` would follow the end.
    pub fn set_start(&mut self, start: DateTime<Utc>) -> Result<(), TemporaError> {
        ensure_ordered(start, self.end)?;
        self.start = start;
        Ok(())
    }

    /// Replace the end.
    ///
    /// # Errors
    /// Returns `InvalidState` (leaving the range unchanged) if `end` would precede the start.
    pub fn set_end(&mut self, end: DateTime<Utc>) -> Result<(), TemporaError> {
        ensure_ordered(self.start, end)?;
        self.end = end;
        Ok(())
    }

    /// Widen the range to include `candidate`. Returns `true` if the range changed.
    pub fn update(&mut self, candidate: DateTime<Utc>) -> bool {
        if candidate < self.start {
            self.start = candidate;
            return true;
        }
        if candidate > self.end {
            self.end = candidate;
            return true;
        }
        false
    }

    /// `true` if `ts` lies within `[start, end]`.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Length of the range.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// One aggregation bucket produced by the time splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSegment {
    /// Bucket start.
    pub start: DateTime<Utc>,
    /// Bucket end; the next bucket starts here.
    pub end: DateTime<Utc>,
}

impl TimeSegment {
    /// Create a segment.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// `true` if `ts` lies within `[start, end]`.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// `true` if `ts` falls in the aggregation window `(start, end]`.
    #[must_use]
    pub fn owns(&self, ts: DateTime<Utc>) -> bool {
        self.start < ts && ts <= self.end
    }

    /// Bucket width.
    #[must_use]
    pub fn width(&self) -> TimeDelta {
        self.end - self.start
    }
}
