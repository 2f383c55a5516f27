use jiff::{tz, SignedDuration, Timestamp, ToSpan};
use jiff_extra::{fmt::interval::IntervalPrinter, Interval};

use crate::Result;

const NOW1: &str = "2014-12-01T01:00:00Z";
const NOW2: &str = "2014-12-01T01:01:00Z";

fn hours(n: i64) -> SignedDuration {
    SignedDuration::from_hours(n)
}

/// Every accepted form of element, each checked against the exact bounds
/// it should resolve to.
#[test]
fn valid() -> Result {
    let _ = env_logger::try_init();

    let now1: Timestamp = NOW1.parse()?;
    let now2: Timestamp = NOW2.parse()?;
    let (min, max) = (Timestamp::MIN, Timestamp::MAX);
    let min_plus_day = min.checked_add(hours(24))?;
    let max_minus_day = max.checked_sub(hours(24))?;
    let six_months_five_hours_before_now2 = now2
        .to_zoned(tz::TimeZone::UTC)
        .checked_sub(6.months().hours(5))?
        .timestamp();

    let cases: Vec<(String, Timestamp, Timestamp)> = vec![
        (format!("{NOW1}/{NOW2}"), now1, now2),
        (format!("PT6H/{NOW2}"), now2.checked_sub(hours(6))?, now2),
        (format!("P6MT5H/{NOW2}"), six_months_five_hours_before_now2, now2),
        (format!("pt6h/{NOW2}"), now2.checked_sub(hours(6))?, now2),
        (format!("pt6h/{max}"), max.checked_sub(hours(6))?, max),
        (
            format!("pt6h/{min_plus_day}"),
            min_plus_day.checked_sub(hours(6))?,
            min_plus_day,
        ),
        (format!("{NOW1}/PT6H"), now1, now1.checked_add(hours(6))?),
        (format!("{NOW1}/pt6h"), now1, now1.checked_add(hours(6))?),
        (format!("{min}/pt6h"), min, min.checked_add(hours(6))?),
        (
            format!("{max_minus_day}/Pt6h"),
            max_minus_day,
            max_minus_day.checked_add(hours(6))?,
        ),
        (format!("{NOW1}/{NOW1}"), now1, now1),
        (
            "2014-12-01T03:00:00+02:00/2014-12-01T03:01:00+02:00".to_string(),
            now1,
            now2,
        ),
        (
            "2014-12-01T03:00:00+02:00/2014-12-01T04:01:00+03:00".to_string(),
            now1,
            now2,
        ),
        (
            "2014-12-01T03:00:00+02:00/2014-12-01T03:01:00".to_string(),
            now1,
            now2,
        ),
        (format!("{NOW1}/{max}"), now1, max),
        (format!("{min}/{NOW2}"), min, now2),
        (format!("{min}/{max}"), min, max),
    ];
    for (input, start, end) in cases {
        let got: Interval = input.parse()?;
        assert_eq!(got.start(), start, "start of {input:?}");
        assert_eq!(got.end(), end, "end of {input:?}");
    }
    Ok(())
}

#[test]
fn bad_order() -> Result {
    let err = format!("{NOW2}/{NOW1}").parse::<Interval>().unwrap_err();
    assert!(err.is_validation());
    assert!(!err.is_parse());
    Ok(())
}

#[test]
fn bad_format() -> Result {
    let err = format!("{NOW2}-{NOW1}").parse::<Interval>().unwrap_err();
    assert!(err.is_parse());
    assert!(!err.is_validation());
    Ok(())
}

#[test]
fn empty() -> Result {
    let err = "".parse::<Interval>().unwrap_err();
    assert!(err.is_missing());
    assert!(!err.is_parse());
    Ok(())
}

/// The printed form of any interval, including ones at the extremes and
/// ones printed with an offset, parses back to the same interval.
#[test]
fn roundtrip_extremes() -> Result {
    let now1: Timestamp = NOW1.parse()?;
    let printers = [
        IntervalPrinter::new(),
        IntervalPrinter::new().offset(Some(tz::offset(2))),
        IntervalPrinter::new()
            .offset(Some(tz::Offset::from_seconds(-(25 * 3600 + 59 * 60))?)),
        IntervalPrinter::new().precision(Some(9)),
    ];
    let intervals = [
        Interval::ALL,
        Interval::new(Timestamp::MIN, Timestamp::MIN)?,
        Interval::new(Timestamp::MAX, Timestamp::MAX)?,
        Interval::new(Timestamp::MIN, now1)?,
        Interval::new(now1, Timestamp::MAX)?,
        Interval::new(now1, now1)?,
    ];
    for printer in &printers {
        for interval in intervals {
            let printed = printer.interval_to_string(&interval);
            let parsed: Interval = printed.parse()?;
            assert_eq!(parsed, interval, "{printed}");
        }
    }
    Ok(())
}

#[test]
fn overflow() -> Result {
    let max = Timestamp::MAX;
    let err = format!("{max}/P1D").parse::<Interval>().unwrap_err();
    assert!(err.is_arithmetic());

    let min = Timestamp::MIN;
    let err = format!("P1Y/{min}").parse::<Interval>().unwrap_err();
    assert!(err.is_arithmetic());

    let got: Interval = format!("{min}/{max}").parse()?;
    assert_eq!(got, Interval::ALL);
    Ok(())
}
