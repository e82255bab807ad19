use chrono::{DateTime, TimeDelta, Utc};
use tempora_types::TemporaError;

/// Evenly spaced timestamps `start, start + interval, ...` with `count` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeGrid {
    start: DateTime<Utc>,
    interval: TimeDelta,
    points: Vec<DateTime<Utc>>,
}

impl DateTimeGrid {
    /// Build a grid. A `count` of zero gives an empty grid.
    ///
    /// # Errors
    /// Returns `Computation` if a grid point falls outside the representable date range.
    pub fn new(
        start: DateTime<Utc>,
        interval: TimeDelta,
        count: usize,
    ) -> Result<Self, TemporaError> {
        Ok(Self {
            start,
            interval,
            points: step_from(start, interval, count)?,
        })
    }

    /// First grid point.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Spacing between consecutive points.
    #[must_use]
    pub const fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` for a zero-length grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid points in order.
    #[must_use]
    pub fn points(&self) -> &[DateTime<Utc>] {
        &self.points
    }

    /// Consume the grid, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<DateTime<Utc>> {
        self.points
    }
}

/// `count` points starting at `start`, spaced by `(end - start) / count`.
///
/// The last point therefore stops one step short of `end`.
///
/// # Errors
/// Returns `InvalidArg` when `count` is zero or does not fit the step divisor,
/// and `Computation` if a point is not representable.
pub fn build_grid_points(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    count: usize,
) -> Result<Vec<DateTime<Utc>>, TemporaError> {
    if count == 0 {
        return Err(TemporaError::invalid_arg(
            "grid requires at least one point",
        ));
    }
    let divisor = i32::try_from(count)
        .map_err(|_| TemporaError::invalid_arg(format!("grid point count {count} is too large")))?;
    step_from(start, (end - start) / divisor, count)
}

fn step_from(
    start: DateTime<Utc>,
    interval: TimeDelta,
    count: usize,
) -> Result<Vec<DateTime<Utc>>, TemporaError> {
    let mut points = Vec::with_capacity(count);
    let mut next = start;
    for i in 0..count {
        if i > 0 {
            next = next.checked_add_signed(interval).ok_or_else(|| {
                TemporaError::computation("grid", format!("point {i} after {next} overflows"))
            })?;
        }
        points.push(next);
    }
    Ok(points)
}
