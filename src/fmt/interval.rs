/*!
Parsing and printing of ISO 8601 time intervals.

An interval is written as two elements separated by a `/`:

```text
<start>/<end>
```

Each element is one of three forms:

* A timestamp with an offset, like `2014-12-01T01:00:00Z` or
`2014-12-01T03:00:00+02:00`. An [RFC 9557] annotation after the offset, like
`[Europe/Paris]`, is accepted and ignored. Only the offset determines the
instant.
* A civil datetime without an offset, like `2014-12-01T03:00:00`. It adopts
the offset of the other element, which must therefore be a timestamp with an
offset.
* An ISO 8601 duration, like `PT6H` or `P6MT5H`, case insensitive. It is
resolved relative to the other element, which must be a timestamp with an
offset. A duration in the start position is subtracted from the end, and a
duration in the end position is added to the start. Calendar units are
resolved in the offset of the other element.

At most one of the elements may be a duration.

# Example

```
use jiff_extra::{fmt::interval::IntervalParser, Interval};

static PARSER: IntervalParser = IntervalParser::new();

let interval = PARSER.parse_interval("P6MT5H/2014-12-01T01:01:00Z")?;
assert_eq!(interval.to_string(), "2014-05-31T20:01:00Z/2014-12-01T01:01:00Z");

let interval = PARSER.parse_interval("2014-12-01T03:00:00+02:00/PT1M")?;
assert_eq!(interval.to_string(), "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z");

# Ok::<(), Box<dyn std::error::Error>>(())
```

[RFC 9557]: https://datatracker.ietf.org/doc/rfc9557/
*/

use jiff::{
    civil::DateTime,
    fmt::{
        temporal::{DateTimePrinter, Pieces, PiecesOffset, SpanParser},
        Write,
    },
    tz::Offset,
    Span, Timestamp,
};

use crate::{
    error::{
        fmt::{Error as E, Side},
        Error, ErrorContext,
    },
    interval::{add_span, sub_span},
    Interval,
};

pub(crate) static DEFAULT_INTERVAL_PARSER: IntervalParser =
    IntervalParser::new();
pub(crate) static DEFAULT_INTERVAL_PRINTER: IntervalPrinter =
    IntervalPrinter::new();

static SPAN_PARSER: SpanParser = SpanParser::new();

/// A parser for ISO 8601 time intervals.
///
/// See the [module documentation](self) for the supported format.
///
/// This parser is what backs the [`FromStr`](core::str::FromStr)
/// implementation on [`Interval`]. Its advantage is that it also accepts
/// byte strings.
///
/// # Example
///
/// ```
/// use jiff_extra::fmt::interval::IntervalParser;
///
/// static PARSER: IntervalParser = IntervalParser::new();
///
/// let interval = PARSER.parse_interval(b"2014-12-01T01:00:00Z/PT1M")?;
/// assert_eq!(interval.to_string(), "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct IntervalParser {
    _priv: (),
}

impl IntervalParser {
    /// Create a new interval parser.
    #[inline]
    pub const fn new() -> IntervalParser {
        IntervalParser { _priv: () }
    }

    /// Parse an ISO 8601 interval into a validated [`Interval`].
    ///
    /// # Errors
    ///
    /// This returns an error when:
    ///
    /// * The input is empty. This is a "missing" error, see
    /// [`Error::is_missing`].
    /// * The input is not a valid interval. For example, there's no `/`,
    /// an element is none of the accepted forms, both elements are durations
    /// or neither element has an offset. See [`Error::is_parse`].
    /// * Resolving a duration overflows the range of [`Timestamp`]. See
    /// [`Error::is_arithmetic`].
    /// * The resolved start is after the resolved end. See
    /// [`Error::is_validation`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::fmt::interval::IntervalParser;
    ///
    /// static PARSER: IntervalParser = IntervalParser::new();
    ///
    /// assert!(PARSER.parse_interval("").unwrap_err().is_missing());
    /// assert!(PARSER.parse_interval("PT1H/PT2H").unwrap_err().is_parse());
    /// assert!(PARSER
    ///     .parse_interval("2014-12-01T01:01:00Z/2014-12-01T01:00:00Z")
    ///     .unwrap_err()
    ///     .is_validation());
    /// ```
    pub fn parse_interval<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Interval, Error> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(Error::from(E::EmptyInput));
        }
        let Some(slash) = find_separator(input) else {
            return Err(Error::from(E::MissingSeparator));
        };
        let start = Element::parse(&input[..slash], Side::Start)?;
        let end = Element::parse(&input[slash + 1..], Side::End)?;
        trace!("resolving interval from start {start:?} and end {end:?}");
        let (start, end) = resolve(start, end)?;
        Interval::new(start, end)
    }
}

/// One side of an interval, before it's resolved against the other side.
#[derive(Clone, Copy, Debug)]
enum Element {
    Duration(Span),
    Fixed { timestamp: Timestamp, offset: Offset },
    Local(DateTime),
}

impl Element {
    fn parse(input: &[u8], side: Side) -> Result<Element, Error> {
        if input.is_empty() {
            return Err(Error::from(E::EmptyElement { side }));
        }
        if is_duration(input) {
            let span = SPAN_PARSER
                .parse_span(input)
                .context(E::InvalidDuration { side })?;
            return Ok(Element::Duration(span));
        }
        let pieces =
            Pieces::parse(input).context(E::InvalidTimestamp { side })?;
        let Some(time) = pieces.time() else {
            return Err(Error::from(E::MissingTime { side }));
        };
        if pieces.time_zone_annotation().is_some() {
            debug!(
                "ignoring time zone annotation on {} of interval, \
                 only the offset is used",
                side.name(),
            );
        }
        let dt = DateTime::from_parts(pieces.date(), time);
        let offset = match pieces.offset() {
            None => return Ok(Element::Local(dt)),
            Some(PiecesOffset::Zulu) => Offset::UTC,
            Some(PiecesOffset::Numeric(ref numeric)) => numeric.offset(),
            #[allow(unreachable_patterns)]
            Some(_) => return Err(Error::from(E::UnrecognizedOffset { side })),
        };
        let timestamp =
            offset.to_timestamp(dt).context(E::InvalidTimestamp { side })?;
        Ok(Element::Fixed { timestamp, offset })
    }
}

/// Turns a pair of elements into the start and end of an interval.
///
/// The result is not yet validated as an interval.
fn resolve(
    start: Element,
    end: Element,
) -> Result<(Timestamp, Timestamp), Error> {
    use self::Element::*;

    match (start, end) {
        (Fixed { timestamp: start, .. }, Fixed { timestamp: end, .. }) => {
            Ok((start, end))
        }
        (Duration(span), Fixed { timestamp: end, offset }) => {
            Ok((sub_span(end, offset, span)?, end))
        }
        (Fixed { timestamp: start, offset }, Duration(span)) => {
            Ok((start, add_span(start, offset, span)?))
        }
        (Local(dt), Fixed { timestamp: end, offset }) => {
            let start = offset
                .to_timestamp(dt)
                .context(E::ConvertLocal { side: Side::Start })?;
            Ok((start, end))
        }
        (Fixed { timestamp: start, offset }, Local(dt)) => {
            let end = offset
                .to_timestamp(dt)
                .context(E::ConvertLocal { side: Side::End })?;
            Ok((start, end))
        }
        (Duration(_), Duration(_)) => Err(Error::from(E::BothDurations)),
        (Local(_), Local(_)) => Err(Error::from(E::BothLocal)),
        (Local(_), Duration(_)) => {
            Err(Error::from(E::LocalWithDuration { side: Side::Start }))
        }
        (Duration(_), Local(_)) => {
            Err(Error::from(E::LocalWithDuration { side: Side::End }))
        }
    }
}

/// Returns the position of the `/` separating the two elements.
///
/// A `/` inside of a bracketed annotation, as in `[America/New_York]`, is
/// not a separator.
fn find_separator(input: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &byte) in input.iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b'/' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Returns true when the element looks like an ISO 8601 duration, with an
/// optional sign.
fn is_duration(input: &[u8]) -> bool {
    let rest = match input.first() {
        Some(b'+' | b'-') => &input[1..],
        _ => input,
    };
    matches!(rest.first(), Some(b'P' | b'p'))
}

/// A printer for ISO 8601 time intervals.
///
/// By default, both ends of the interval are printed in UTC with a `Z`
/// suffix and with as many fractional second digits as are needed. This is
/// the format used by the [`Display`](core::fmt::Display) implementation on
/// [`Interval`].
///
/// Anything this printer emits can be parsed back by an [`IntervalParser`]
/// into an equal interval, unless the precision is set so that a non-zero
/// fractional second is truncated.
///
/// # Example
///
/// ```
/// use jiff::tz;
/// use jiff_extra::{fmt::interval::IntervalPrinter, Interval};
///
/// let interval: Interval = "2014-12-01T01:00:00Z/PT1M".parse()?;
///
/// let printer = IntervalPrinter::new().offset(Some(tz::offset(2)));
/// assert_eq!(
///     printer.interval_to_string(&interval),
///     "2014-12-01T03:00:00+02:00/2014-12-01T03:01:00+02:00",
/// );
///
/// let printer = IntervalPrinter::new().precision(Some(3));
/// assert_eq!(
///     printer.interval_to_string(&interval),
///     "2014-12-01T01:00:00.000Z/2014-12-01T01:01:00.000Z",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct IntervalPrinter {
    offset: Option<Offset>,
    precision: Option<u8>,
}

impl IntervalPrinter {
    /// Create a new interval printer with the default configuration.
    #[inline]
    pub const fn new() -> IntervalPrinter {
        IntervalPrinter { offset: None, precision: None }
    }

    /// Print both ends of the interval with the given offset instead of as
    /// UTC with a `Z` suffix.
    ///
    /// `None` restores the default.
    #[inline]
    pub const fn offset(self, offset: Option<Offset>) -> IntervalPrinter {
        IntervalPrinter { offset, ..self }
    }

    /// Set the number of fractional second digits to print on both ends.
    ///
    /// `None` means the fractional second is printed with as many digits as
    /// needed and omitted when it's zero. Values greater than `9` are
    /// clamped to `9`.
    #[inline]
    pub const fn precision(self, precision: Option<u8>) -> IntervalPrinter {
        IntervalPrinter { precision, ..self }
    }

    /// Format an interval into a string.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::{fmt::interval::IntervalPrinter, Interval};
    ///
    /// const PRINTER: IntervalPrinter = IntervalPrinter::new();
    ///
    /// let interval: Interval = "PT1S/2014-12-01T01:00:00Z".parse()?;
    /// assert_eq!(
    ///     PRINTER.interval_to_string(&interval),
    ///     "2014-12-01T00:59:59Z/2014-12-01T01:00:00Z",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "alloc")]
    pub fn interval_to_string(
        &self,
        interval: &Interval,
    ) -> alloc::string::String {
        let mut buf = alloc::string::String::with_capacity(64);
        // OK because writing to `String` never fails.
        self.print_interval(interval, &mut buf)
            .expect("printing to a String should never fail");
        buf
    }

    /// Print an interval to the given writer.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given [`Write`]
    /// implementation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::{fmt::interval::IntervalPrinter, Interval};
    ///
    /// const PRINTER: IntervalPrinter = IntervalPrinter::new();
    ///
    /// let interval: Interval = "2014-12-01T01:00:00Z/PT0.5S".parse()?;
    /// let mut buf = String::new();
    /// PRINTER.print_interval(&interval, &mut buf)?;
    /// assert_eq!(buf, "2014-12-01T01:00:00Z/2014-12-01T01:00:00.5Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn print_interval<W: Write>(
        &self,
        interval: &Interval,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.print_timestamp(interval.start(), &mut wtr)
            .context(E::PrintTimestamp { side: Side::Start })?;
        wtr.write_str("/")?;
        self.print_timestamp(interval.end(), &mut wtr)
            .context(E::PrintTimestamp { side: Side::End })?;
        Ok(())
    }

    fn print_timestamp<W: Write>(
        &self,
        timestamp: Timestamp,
        wtr: W,
    ) -> Result<(), jiff::Error> {
        let printer = DateTimePrinter::new().precision(self.precision);
        match self.offset {
            None => printer.print_timestamp(&timestamp, wtr),
            Some(offset) => {
                printer.print_timestamp_with_offset(&timestamp, offset, wtr)
            }
        }
    }
}
