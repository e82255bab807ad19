//! Splitting a time range into aligned aggregation buckets.

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, TimeDelta, Timelike, Utc};
use tempora_types::{AggregationTimeSpan, TemporaError, TimeSegment};

const CONTEXT: &str = "split_into_parts";

fn overflow(what: &str, at: DateTime<Utc>) -> TemporaError {
    TemporaError::computation(CONTEXT, format!("{what} from {at} is out of range"))
}

/// Start of the bucket containing `ts`.
///
/// Fifteen-minute and hour buckets floor in UTC. Day, week and month buckets
/// start at UTC midnight of the day, of the Monday on or before it, or of the
/// first of the month, shifted by `-day_start_offset`.
fn part_start(
    ts: DateTime<Utc>,
    span: AggregationTimeSpan,
    day_start_offset: TimeDelta,
) -> Result<DateTime<Utc>, TemporaError> {
    let date = ts.date_naive();
    let midnight_of = |day: Option<chrono::NaiveDate>| {
        day.map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .and_then(|t| t.checked_sub_signed(day_start_offset))
            .ok_or_else(|| overflow("bucket start", ts))
    };
    match span {
        AggregationTimeSpan::FifteenMinutes => date
            .and_hms_opt(ts.hour(), ts.minute() - ts.minute() % 15, 0)
            .map(|t| t.and_utc())
            .ok_or_else(|| overflow("quarter-hour floor", ts)),
        AggregationTimeSpan::Hour => date
            .and_hms_opt(ts.hour(), 0, 0)
            .map(|t| t.and_utc())
            .ok_or_else(|| overflow("hour floor", ts)),
        AggregationTimeSpan::Day => midnight_of(Some(date)),
        AggregationTimeSpan::Week => midnight_of(
            date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday()))),
        ),
        AggregationTimeSpan::Month => midnight_of(date.with_day(1)),
    }
}

fn advance(
    start: DateTime<Utc>,
    span: AggregationTimeSpan,
) -> Result<DateTime<Utc>, TemporaError> {
    let next = match span {
        AggregationTimeSpan::Month => start.checked_add_months(Months::new(1)),
        other => start.checked_add_signed(other.nominal_width()),
    };
    next.ok_or_else(|| overflow("bucket end", start))
}

/// Consecutive buckets covering `range_start..range_end`.
///
/// The first bucket is aligned at or before `range_start`; buckets are emitted
/// until one ends at or after `range_end`, so at least one is always returned.
/// Month buckets advance by calendar month, every other span by its fixed width.
///
/// # Errors
/// Returns `Computation` if a bucket boundary is not representable.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tempora_core::splitter::split_into_parts",
        skip(range_start, range_end),
        fields(start = %range_start, end = %range_end),
    )
)]
pub fn split_into_parts(
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    span: AggregationTimeSpan,
    day_start_offset: TimeDelta,
) -> Result<Vec<TimeSegment>, TemporaError> {
    let mut start = part_start(range_start, span, day_start_offset)?;
    let mut parts = Vec::new();
    loop {
        let end = advance(start, span)?;
        parts.push(TimeSegment::new(start, end));
        if end >= range_end {
            break;
        }
        start = end;
    }
    Ok(parts)
}

/// Segments lying entirely within `[range_start, range_end]`.
pub fn complete_parts<I>(
    segments: I,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<TimeSegment>
where
    I: IntoIterator<Item = TimeSegment>,
{
    segments
        .into_iter()
        .filter(|s| s.start >= range_start && s.end <= range_end)
        .collect()
}

/// [`split_into_parts`] restricted to buckets fully inside the range.
///
/// # Errors
/// Propagates [`split_into_parts`] failures.
pub fn split_into_complete_parts(
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    span: AggregationTimeSpan,
    day_start_offset: TimeDelta,
) -> Result<Vec<TimeSegment>, TemporaError> {
    let parts = split_into_parts(range_start, range_end, span, day_start_offset)?;
    Ok(complete_parts(parts, range_start, range_end))
}

/// Average of the values in each bucket, keyed by bucket start.
///
/// The buckets span from the earliest to the latest timestamp in `pairs`. A
/// value belongs to a bucket when `start < ts <= end`; empty buckets produce
/// nothing. Duplicate timestamps are averaged as separate observations.
///
/// # Errors
/// Propagates [`split_into_parts`] failures.
pub fn compute_time_range_averages<I>(
    pairs: I,
    span: AggregationTimeSpan,
    day_start_offset: TimeDelta,
) -> Result<Vec<(DateTime<Utc>, f64)>, TemporaError>
where
    I: IntoIterator<Item = (DateTime<Utc>, f64)>,
{
    let mut entries: Vec<(DateTime<Utc>, f64)> = pairs.into_iter().collect();
    entries.sort_by_key(|(ts, _)| *ts);
    let (Some(&(first, _)), Some(&(last, _))) = (entries.first(), entries.last()) else {
        return Ok(Vec::new());
    };

    let segments = split_into_parts(first, last, span, day_start_offset)?;
    let mut out = Vec::new();
    for segment in segments {
        let lo = entries.partition_point(|(ts, _)| *ts <= segment.start);
        let hi = entries.partition_point(|(ts, _)| *ts <= segment.end);
        let owned = &entries[lo..hi];
        if owned.is_empty() {
            continue;
        }
        let total: f64 = owned.iter().map(|(_, v)| v).sum();
        out.push((segment.start, total / owned.len() as f64));
    }
    Ok(out)
}
