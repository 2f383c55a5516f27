use jiff::{SignedDuration, Timestamp};
use jiff_extra::Interval;

use crate::Result;

fn iv(s: &str) -> Interval {
    s.parse().unwrap()
}

/// Merges a list of intervals sorted by start into the smallest list of
/// disjoint intervals covering the same time. Abutting intervals are merged.
fn coalesce(intervals: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = vec![];
    for &interval in intervals {
        match merged.last_mut() {
            Some(last) if last.is_connected(interval) => {
                *last = last.union(interval).unwrap();
            }
            _ => merged.push(interval),
        }
    }
    merged
}

#[test]
fn coalesce_bookings() -> Result {
    let _ = env_logger::try_init();

    let bookings = [
        iv("2024-06-01T09:00:00Z/PT1H"),
        iv("2024-06-01T10:00:00Z/PT30M"),
        iv("2024-06-01T10:15:00Z/PT30M"),
        iv("2024-06-01T12:00:00Z/PT1H"),
        iv("2024-06-01T12:30:00Z/PT0S"),
        iv("2024-06-01T14:00:00Z/PT0S"),
    ];
    let merged = coalesce(&bookings);
    let got: Vec<String> = merged.iter().map(|i| i.to_string()).collect();
    assert_eq!(
        got,
        vec![
            "2024-06-01T09:00:00Z/2024-06-01T10:45:00Z",
            "2024-06-01T12:00:00Z/2024-06-01T13:00:00Z",
            "2024-06-01T14:00:00Z/2024-06-01T14:00:00Z",
        ],
    );

    let day = iv("2024-06-01T00:00:00Z/P1D");
    for interval in &merged {
        assert!(day.encloses(*interval));
    }
    for pair in merged.windows(2) {
        assert!(pair[0].is_before(pair[1]));
        assert!(pair[1].is_after(pair[0]));
        assert!(!pair[0].overlaps(pair[1]));
    }
    let busy = merged
        .iter()
        .fold(SignedDuration::ZERO, |total, i| total + i.to_duration());
    assert_eq!(busy, SignedDuration::from_mins(165));
    Ok(())
}

#[test]
fn free_time_between_bookings() -> Result {
    let morning = iv("2024-06-01T09:00:00Z/PT2H");
    let afternoon = iv("2024-06-01T13:00:00Z/PT2H");
    assert!(!morning.is_connected(afternoon));
    assert!(morning.union(afternoon).unwrap_err().is_arithmetic());
    assert!(morning.intersection(afternoon).unwrap_err().is_arithmetic());

    let whole = morning.span(afternoon);
    let gap = Interval::new(morning.end(), afternoon.start())?;
    assert!(gap.abuts(morning));
    assert!(gap.abuts(afternoon));
    assert_eq!(gap.to_duration(), SignedDuration::from_hours(2));
    assert_eq!(
        whole.to_duration(),
        morning.to_duration() + gap.to_duration() + afternoon.to_duration(),
    );
    Ok(())
}

#[test]
fn open_ended_subscriptions() -> Result {
    let since: Timestamp = "2020-01-01T00:00:00Z".parse()?;
    let until: Timestamp = "2030-01-01T00:00:00Z".parse()?;
    let forever = Interval::new(since, Timestamp::MAX)?;
    let forever_before = Interval::new(Timestamp::MIN, until)?;

    assert!(forever.is_unbounded_end());
    assert!(!forever.is_unbounded_start());
    assert!(forever.contains(Timestamp::MAX));
    assert!(!forever_before.contains(until));

    let overlap = forever.intersection(forever_before)?;
    assert_eq!(overlap, Interval::new(since, until)?);
    assert_eq!(forever.union(forever_before)?, Interval::ALL);

    let shortened = forever.with_end(until)?;
    assert_eq!(shortened, overlap);
    assert!(forever.with_start(Timestamp::MAX)?.is_empty());
    Ok(())
}

#[test]
fn timestamps_around_an_interval() -> Result {
    let interval = iv("2014-12-01T01:00:00Z/PT1M");
    let before: Timestamp = "2014-12-01T00:59:59Z".parse()?;
    let start = interval.start();
    let end = interval.end();

    assert!(interval.is_after_timestamp(before));
    assert!(!interval.is_after_timestamp(start));
    assert!(!interval.is_before_timestamp(start));
    assert!(interval.is_before_timestamp(end));
    assert!(interval.contains(start));
    assert!(!interval.contains(end));

    let range: std::ops::Range<Timestamp> = interval.into();
    assert!(range.contains(&start));
    assert!(!range.contains(&end));
    assert_eq!(Interval::try_from(range)?, interval);
    Ok(())
}
