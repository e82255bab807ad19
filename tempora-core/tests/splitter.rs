use assert_approx_eq::assert_approx_eq;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tempora_core::{
    AggregationTimeSpan, TimeSegment, complete_parts, compute_time_range_averages,
    split_into_complete_parts, split_into_parts,
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn minus_seven_hours() -> TimeDelta {
    TimeDelta::hours(-7)
}

fn assert_contiguous(parts: &[TimeSegment]) {
    for pair in parts.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn two_day_range_splits_into_whole_days() {
    for hour in [0, 3, 7, 12, 23] {
        let start = at(2024, 3, 10, hour, 15, 0);
        let parts = split_into_parts(
            start,
            start + TimeDelta::days(2),
            AggregationTimeSpan::Day,
            minus_seven_hours(),
        )
        .unwrap();
        assert!(parts.len() == 2 || parts.len() == 3, "{hour}: {parts:?}");
        assert!(parts.iter().all(|p| p.width() == TimeDelta::hours(24)));
        assert_contiguous(&parts);
        assert_eq!(parts[0].start, at(2024, 3, 10, 7, 0, 0));
        assert!(parts.last().unwrap().end >= start + TimeDelta::days(2));
    }
}

#[test]
fn sub_hour_spans_floor_in_utc() {
    let start = at(2024, 3, 10, 10, 37, 12);
    let quarters = split_into_parts(
        start,
        at(2024, 3, 10, 11, 0, 0),
        AggregationTimeSpan::FifteenMinutes,
        minus_seven_hours(),
    )
    .unwrap();
    assert_eq!(
        quarters,
        vec![
            TimeSegment::new(at(2024, 3, 10, 10, 30, 0), at(2024, 3, 10, 10, 45, 0)),
            TimeSegment::new(at(2024, 3, 10, 10, 45, 0), at(2024, 3, 10, 11, 0, 0)),
        ]
    );

    let hours = split_into_parts(start, start, AggregationTimeSpan::Hour, minus_seven_hours()).unwrap();
    assert_eq!(
        hours,
        vec![TimeSegment::new(at(2024, 3, 10, 10, 0, 0), at(2024, 3, 10, 11, 0, 0))]
    );
}

#[test]
fn week_starts_on_the_preceding_monday() {
    // 2024-03-10 is a Sunday.
    let sunday = at(2024, 3, 10, 12, 0, 0);
    let weeks = split_into_parts(sunday, sunday, AggregationTimeSpan::Week, minus_seven_hours()).unwrap();
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].start, at(2024, 3, 4, 7, 0, 0));
    assert_eq!(weeks[0].width(), TimeDelta::days(7));

    let monday = at(2024, 3, 11, 0, 0, 0);
    let weeks = split_into_parts(monday, monday, AggregationTimeSpan::Week, TimeDelta::zero()).unwrap();
    assert_eq!(weeks[0].start, monday);
}

#[test]
fn months_advance_by_calendar_month() {
    let start = at(2024, 1, 31, 12, 0, 0);
    let months = split_into_parts(
        start,
        at(2024, 3, 5, 0, 0, 0),
        AggregationTimeSpan::Month,
        minus_seven_hours(),
    )
    .unwrap();
    let starts: Vec<_> = months.iter().map(|m| m.start).collect();
    assert_eq!(
        starts,
        vec![at(2024, 1, 1, 7, 0, 0), at(2024, 2, 1, 7, 0, 0), at(2024, 3, 1, 7, 0, 0)]
    );
    assert_eq!(months[1].width(), TimeDelta::days(29));
    assert_contiguous(&months);
}

#[test]
fn complete_parts_lie_inside_the_range() {
    let start = at(2024, 3, 10, 12, 0, 0);
    let end = start + TimeDelta::days(3);
    let complete =
        split_into_complete_parts(start, end, AggregationTimeSpan::Day, TimeDelta::zero()).unwrap();
    assert_eq!(
        complete,
        vec![
            TimeSegment::new(at(2024, 3, 11, 0, 0, 0), at(2024, 3, 12, 0, 0, 0)),
            TimeSegment::new(at(2024, 3, 12, 0, 0, 0), at(2024, 3, 13, 0, 0, 0)),
        ]
    );

    let all = split_into_parts(start, end, AggregationTimeSpan::Day, TimeDelta::zero()).unwrap();
    assert_eq!(complete_parts(all.clone(), start, end), complete);
    assert_eq!(all.len(), 4);
}

#[test]
fn segment_membership() {
    let segment = TimeSegment::new(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 2, 0, 0, 0));
    assert!(segment.contains(segment.start));
    assert!(segment.contains(segment.end));
    assert!(!segment.owns(segment.start));
    assert!(segment.owns(segment.end));
    assert!(!segment.contains(at(2024, 1, 3, 0, 0, 0)));
}

#[test]
fn averages_use_start_exclusive_buckets() {
    let pairs = vec![
        (at(2024, 3, 10, 11, 15, 0), 40.0),
        (at(2024, 3, 10, 10, 0, 0), 1_000.0),
        (at(2024, 3, 10, 10, 30, 0), 10.0),
        (at(2024, 3, 10, 10, 45, 0), 20.0),
    ];
    let averages =
        compute_time_range_averages(pairs, AggregationTimeSpan::Hour, minus_seven_hours()).unwrap();
    assert_eq!(averages.len(), 2);
    // The point sitting exactly on the first bucket start is not owned by any bucket.
    assert_eq!(averages[0].0, at(2024, 3, 10, 10, 0, 0));
    assert_approx_eq!(averages[0].1, 15.0);
    assert_eq!(averages[1].0, at(2024, 3, 10, 11, 0, 0));
    assert_approx_eq!(averages[1].1, 40.0);

    assert!(
        compute_time_range_averages(Vec::new(), AggregationTimeSpan::Day, minus_seven_hours())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn unrepresentable_boundaries_are_computation_errors() {
    let err = split_into_parts(
        DateTime::<Utc>::MAX_UTC,
        DateTime::<Utc>::MAX_UTC,
        AggregationTimeSpan::Day,
        TimeDelta::zero(),
    )
    .unwrap_err();
    assert!(!err.is_validation());
}
