use core::ops::Range;

use jiff::{
    tz::{Offset, TimeZone},
    SignedDuration, Span, Timestamp,
};

use crate::{
    error::{
        interval::{Error as E, SetOp},
        Error, ErrorContext,
    },
    fmt::interval::{DEFAULT_INTERVAL_PARSER, DEFAULT_INTERVAL_PRINTER},
};

/// An immutable span of time between two instants.
///
/// An `Interval` is a half-open range of [`Timestamp`] values: it includes
/// its start and excludes its end. The start is never after the end. When
/// the start and end are equal, the interval is _empty_. An empty interval is
/// still a valid interval with a position on the timeline. It just has a
/// zero duration.
///
/// # Unbounded intervals
///
/// Jiff's timestamps have a finite range, bounded by [`Timestamp::MIN`] and
/// [`Timestamp::MAX`]. An interval whose start is `Timestamp::MIN` is
/// considered to be unbounded at its start, and an interval whose end is
/// `Timestamp::MAX` is considered to be unbounded at its end. The interval
/// spanning all of time is available as [`Interval::ALL`].
///
/// Since there is no timestamp after `Timestamp::MAX` to exclude, an
/// interval that is unbounded at its end _contains_ `Timestamp::MAX`. This is
/// the only exception to the half-open rule.
///
/// # Parsing and printing
///
/// An `Interval` can be parsed from, and printed to, the ISO 8601 interval
/// format `<start>/<end>`. Either side may be a timestamp with an offset.
/// One side may be a civil datetime without an offset, in which case it
/// inherits the offset of the other side. Alternatively, one side may be an
/// ISO 8601 duration, which is then resolved relative to the other side.
///
/// ```
/// use jiff::Timestamp;
/// use jiff_extra::Interval;
///
/// let interval: Interval = "2014-12-01T01:00:00Z/PT6H".parse()?;
/// assert_eq!(interval.start(), "2014-12-01T01:00:00Z".parse::<Timestamp>()?);
/// assert_eq!(interval.end(), "2014-12-01T07:00:00Z".parse::<Timestamp>()?);
/// assert_eq!(interval.to_string(), "2014-12-01T01:00:00Z/2014-12-01T07:00:00Z");
///
/// let interval: Interval = "2014-12-01T03:00:00+02:00/2014-12-01T05:30".parse()?;
/// assert_eq!(interval.to_string(), "2014-12-01T01:00:00Z/2014-12-01T03:30:00Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The printed form always parses back to an equal interval, including for
/// intervals at the extremes of the supported range. See the
/// [`fmt::interval`](crate::fmt::interval) module for more control over
/// parsing and printing.
///
/// # Algebra
///
/// `Interval` supports containment ([`Interval::contains`]), enclosure
/// ([`Interval::encloses`]), adjacency ([`Interval::abuts`]), connectivity
/// ([`Interval::is_connected`]), overlap ([`Interval::overlaps`]),
/// intersection ([`Interval::intersection`]), union ([`Interval::union`]),
/// convex hull ([`Interval::span`]) and ordering ([`Interval::is_before`] and
/// [`Interval::is_after`]).
///
/// ```
/// use jiff_extra::Interval;
///
/// let morning: Interval = "2024-06-01T08:00:00Z/2024-06-01T12:00:00Z".parse()?;
/// let lunch: Interval = "2024-06-01T12:00:00Z/PT1H".parse()?;
/// assert!(morning.abuts(lunch));
/// assert!(!morning.overlaps(lunch));
/// assert_eq!(
///     morning.union(lunch)?.to_string(),
///     "2024-06-01T08:00:00Z/2024-06-01T13:00:00Z",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// The interval spanning all of time, from [`Timestamp::MIN`] to
    /// [`Timestamp::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// assert!(Interval::ALL.is_unbounded_start());
    /// assert!(Interval::ALL.is_unbounded_end());
    /// assert!(Interval::ALL.contains(Timestamp::MIN));
    /// assert!(Interval::ALL.contains(Timestamp::MAX));
    /// ```
    pub const ALL: Interval =
        Interval { start: Timestamp::MIN, end: Timestamp::MAX };

    /// Creates a new interval from its inclusive start and exclusive end.
    ///
    /// # Errors
    ///
    /// This returns a validation error when `start` is after `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// let t1 = Timestamp::from_second(1_417_395_600)?;
    /// let t2 = Timestamp::from_second(1_417_395_660)?;
    ///
    /// let interval = Interval::new(t1, t2)?;
    /// assert_eq!(interval.start(), t1);
    /// assert_eq!(interval.end(), t2);
    ///
    /// assert!(Interval::new(t1, t1)?.is_empty());
    /// assert!(Interval::new(t2, t1).unwrap_err().is_validation());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Interval, Error> {
        if start > end {
            return Err(Error::from(E::StartAfterEnd { start, end }));
        }
        Ok(Interval { start, end })
    }

    /// Creates a new interval from its start and a non-negative duration.
    ///
    /// # Errors
    ///
    /// This returns a validation error when `duration` is negative, and an
    /// arithmetic error when `start + duration` is beyond
    /// [`Timestamp::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{SignedDuration, Timestamp};
    /// use jiff_extra::Interval;
    ///
    /// let start = Timestamp::from_second(1_417_395_600)?;
    /// let interval = Interval::from_duration(start, SignedDuration::from_secs(60))?;
    /// assert_eq!(interval.to_string(), "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z");
    ///
    /// let err = Interval::from_duration(start, SignedDuration::from_secs(-1))
    ///     .unwrap_err();
    /// assert!(err.is_validation());
    ///
    /// let err = Interval::from_duration(Timestamp::MAX, SignedDuration::from_nanos(1))
    ///     .unwrap_err();
    /// assert!(err.is_arithmetic());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_duration(
        start: Timestamp,
        duration: SignedDuration,
    ) -> Result<Interval, Error> {
        if duration.is_negative() {
            return Err(Error::from(E::NegativeDuration));
        }
        let end = start
            .checked_add(duration)
            .context(E::OverflowEnd { start })?;
        Interval::new(start, end)
    }

    /// Creates a new interval from its start and a non-negative span.
    ///
    /// Unlike [`Interval::from_duration`], the span may contain calendar
    /// units (years, months, weeks and days). They are resolved against
    /// the start of the interval in UTC, where every day is 24 hours long.
    ///
    /// # Errors
    ///
    /// This returns a validation error when `span` is negative, and an
    /// arithmetic error when adding `span` to `start` overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{Timestamp, ToSpan};
    /// use jiff_extra::Interval;
    ///
    /// let start: Timestamp = "2024-01-31T00:00:00Z".parse()?;
    /// let interval = Interval::from_span(start, 1.month().hours(5))?;
    /// assert_eq!(interval.to_string(), "2024-01-31T00:00:00Z/2024-02-29T05:00:00Z");
    ///
    /// assert!(Interval::from_span(start, -1.day()).unwrap_err().is_validation());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_span(start: Timestamp, span: Span) -> Result<Interval, Error> {
        if span.is_negative() {
            return Err(Error::from(E::NegativeSpan));
        }
        let end = add_span(start, Offset::UTC, span)?;
        Interval::new(start, end)
    }

    /// Parses an ISO 8601 interval string.
    ///
    /// This is equivalent to `input.parse::<Interval>()`, but also accepts
    /// byte strings. See the [`fmt::interval`](crate::fmt::interval) module
    /// for details on the accepted format.
    ///
    /// # Errors
    ///
    /// This returns a missing argument error for an empty string, a parse
    /// error when the input isn't a valid interval, a validation error when
    /// the parsed start is after the parsed end and an arithmetic error when
    /// resolving a duration overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let interval = Interval::parse("PT6H/2014-12-01T01:01:00Z")?;
    /// assert_eq!(interval.to_string(), "2014-11-30T19:01:00Z/2014-12-01T01:01:00Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Interval, Error> {
        DEFAULT_INTERVAL_PARSER.parse_interval(input)
    }

    /// Returns the inclusive start of this interval.
    #[inline]
    pub fn start(self) -> Timestamp {
        self.start
    }

    /// Returns the exclusive end of this interval.
    ///
    /// When this interval is unbounded at its end, the end returned is
    /// [`Timestamp::MAX`], which is considered part of the interval.
    #[inline]
    pub fn end(self) -> Timestamp {
        self.end
    }

    /// Returns a copy of this interval with the start replaced.
    ///
    /// # Errors
    ///
    /// This returns a validation error when the new start is after the
    /// current end.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// let interval: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:02:00Z".parse()?;
    /// let t: Timestamp = "2014-12-01T01:01:00Z".parse()?;
    /// assert_eq!(
    ///     interval.with_start(t)?.to_string(),
    ///     "2014-12-01T01:01:00Z/2014-12-01T01:02:00Z",
    /// );
    /// assert!(interval.with_start(Timestamp::MAX).unwrap_err().is_validation());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_start(self, start: Timestamp) -> Result<Interval, Error> {
        Interval::new(start, self.end)
    }

    /// Returns a copy of this interval with the end replaced.
    ///
    /// # Errors
    ///
    /// This returns a validation error when the new end is before the
    /// current start.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// let interval: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:02:00Z".parse()?;
    /// assert!(interval.with_end(Timestamp::MAX)?.is_unbounded_end());
    /// assert!(interval.with_end(Timestamp::MIN).unwrap_err().is_validation());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_end(self, end: Timestamp) -> Result<Interval, Error> {
        Interval::new(self.start, end)
    }

    /// Returns true when this interval has a zero duration.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns true when the start of this interval is [`Timestamp::MIN`].
    #[inline]
    pub fn is_unbounded_start(self) -> bool {
        self.start == Timestamp::MIN
    }

    /// Returns true when the end of this interval is [`Timestamp::MAX`].
    #[inline]
    pub fn is_unbounded_end(self) -> bool {
        self.end == Timestamp::MAX
    }

    /// Returns true when the given timestamp is within this interval.
    ///
    /// A timestamp is contained when it is greater than or equal to the start
    /// and strictly less than the end. As a consequence, an empty interval
    /// contains nothing. The exception is an interval that is unbounded at its
    /// end, which also contains [`Timestamp::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// let t1: Timestamp = "2014-12-01T01:00:00Z".parse()?;
    /// let t2: Timestamp = "2014-12-01T01:01:00Z".parse()?;
    ///
    /// let interval = Interval::new(t1, t2)?;
    /// assert!(interval.contains(t1));
    /// assert!(!interval.contains(t2));
    ///
    /// let unbounded = Interval::new(t2, Timestamp::MAX)?;
    /// assert!(!unbounded.contains(t1));
    /// assert!(unbounded.contains(Timestamp::MAX));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn contains(self, timestamp: Timestamp) -> bool {
        self.start <= timestamp
            && (timestamp < self.end || self.is_unbounded_end())
    }

    /// Returns true when every timestamp in `other` is also in this interval.
    ///
    /// Both bounds are compared inclusively, so an interval encloses itself.
    /// An empty interval only encloses an equivalent empty interval.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let day: Interval = "2024-06-01T00:00:00Z/P1D".parse()?;
    /// let noon: Interval = "2024-06-01T12:00:00Z/PT1H".parse()?;
    /// assert!(day.encloses(noon));
    /// assert!(day.encloses(day));
    /// assert!(!noon.encloses(day));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn encloses(self, other: Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true when this interval and `other` touch at exactly one
    /// boundary without overlapping.
    ///
    /// That is, one interval ends precisely where the other starts. An empty
    /// interval does not abut itself.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z".parse()?;
    /// let b: Interval = "2014-12-01T01:01:00Z/2014-12-01T01:03:00Z".parse()?;
    /// assert!(a.abuts(b));
    /// assert!(b.abuts(a));
    /// assert!(!a.abuts(a));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn abuts(self, other: Interval) -> bool {
        (self.end == other.start) ^ (self.start == other.end)
    }

    /// Returns true when there is no gap between this interval and `other`.
    ///
    /// Two intervals are connected when they overlap, abut or one encloses
    /// the other. This is the precondition for [`Interval::intersection`] and
    /// [`Interval::union`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z".parse()?;
    /// let b: Interval = "2014-12-01T01:01:00Z/2014-12-01T01:03:00Z".parse()?;
    /// let c: Interval = "2014-12-01T01:02:00Z/2014-12-01T01:03:00Z".parse()?;
    /// assert!(a.is_connected(b));
    /// assert!(!a.is_connected(c));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn is_connected(self, other: Interval) -> bool {
        self == other
            || (self.start <= other.end && other.start <= self.end)
    }

    /// Returns true when this interval and `other` share some period of time.
    ///
    /// Intervals that merely touch at a single instant do not overlap. An
    /// empty interval overlaps only with an equivalent empty interval.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:02:00Z".parse()?;
    /// let b: Interval = "2014-12-01T01:01:00Z/2014-12-01T01:03:00Z".parse()?;
    /// let c: Interval = "2014-12-01T01:02:00Z/2014-12-01T01:03:00Z".parse()?;
    /// assert!(a.overlaps(b));
    /// assert!(!a.overlaps(c));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn overlaps(self, other: Interval) -> bool {
        self == other
            || (!self.is_empty()
                && !other.is_empty()
                && self.start < other.end
                && other.start < self.end)
    }

    /// Returns the interval of time shared by this interval and `other`.
    ///
    /// When the two intervals abut, the intersection is an empty interval at
    /// the instant where they touch. This operation is commutative.
    ///
    /// # Errors
    ///
    /// This returns an arithmetic error when the intervals are not
    /// [connected](Interval::is_connected).
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:02:00Z".parse()?;
    /// let b: Interval = "2014-12-01T01:01:00Z/2014-12-01T01:03:00Z".parse()?;
    /// assert_eq!(
    ///     a.intersection(b)?.to_string(),
    ///     "2014-12-01T01:01:00Z/2014-12-01T01:02:00Z",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn intersection(self, other: Interval) -> Result<Interval, Error> {
        self.check_connected(SetOp::Intersection, other)?;
        if self.encloses(other) {
            return Ok(other);
        }
        if other.encloses(self) {
            return Ok(self);
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Interval::new(start, end)
    }

    /// Returns the smallest interval containing both this interval and
    /// `other`, requiring that they be connected.
    ///
    /// Use [`Interval::span`] to compute the same thing without requiring
    /// the intervals to be connected.
    ///
    /// # Errors
    ///
    /// This returns an arithmetic error when the intervals are not
    /// [connected](Interval::is_connected).
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z".parse()?;
    /// let b: Interval = "2014-12-01T01:01:00Z/2014-12-01T01:03:00Z".parse()?;
    /// let c: Interval = "2014-12-01T01:02:00Z/2014-12-01T01:03:00Z".parse()?;
    /// assert_eq!(
    ///     a.union(b)?.to_string(),
    ///     "2014-12-01T01:00:00Z/2014-12-01T01:03:00Z",
    /// );
    /// assert!(a.union(c).unwrap_err().is_arithmetic());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn union(self, other: Interval) -> Result<Interval, Error> {
        self.check_connected(SetOp::Union, other)?;
        Ok(self.span(other))
    }

    /// Returns the smallest interval containing both this interval and
    /// `other`.
    ///
    /// Unlike [`Interval::union`], this never fails. When the intervals are
    /// not connected, the result also covers the gap between them.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z".parse()?;
    /// let c: Interval = "2014-12-01T01:02:00Z/2014-12-01T01:03:00Z".parse()?;
    /// let span = a.span(c);
    /// assert_eq!(span.to_string(), "2014-12-01T01:00:00Z/2014-12-01T01:03:00Z");
    /// assert!(span.encloses(a) && span.encloses(c));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn span(self, other: Interval) -> Interval {
        // OK because min(starts) <= start <= end <= max(ends).
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns true when this interval is entirely before `other` without
    /// overlapping it.
    ///
    /// Abutting intervals are ordered, so `a.is_before(b)` is true when
    /// `a` ends where `b` starts. An empty interval is never before itself.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z".parse()?;
    /// let b: Interval = "2014-12-01T01:01:00Z/2014-12-01T01:03:00Z".parse()?;
    /// assert!(a.is_before(b));
    /// assert!(!b.is_before(a));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn is_before(self, other: Interval) -> bool {
        self.end <= other.start && self != other
    }

    /// Returns true when this interval is entirely after `other` without
    /// overlapping it.
    ///
    /// Abutting intervals are ordered, so `b.is_after(a)` is true when
    /// `b` starts where `a` ends. An empty interval is never after itself.
    #[inline]
    pub fn is_after(self, other: Interval) -> bool {
        self.start >= other.end && self != other
    }

    /// Returns true when every timestamp in this interval is before the given
    /// timestamp.
    ///
    /// Since the end is exclusive, an interval is before its own end. An
    /// empty interval is before a timestamp only when the timestamp is
    /// strictly after it.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// let t1: Timestamp = "2014-12-01T01:00:00Z".parse()?;
    /// let t2: Timestamp = "2014-12-01T01:01:00Z".parse()?;
    /// assert!(Interval::new(t1, t2)?.is_before_timestamp(t2));
    /// assert!(!Interval::new(t1, t1)?.is_before_timestamp(t1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn is_before_timestamp(self, timestamp: Timestamp) -> bool {
        self.end <= timestamp && self.start < timestamp
    }

    /// Returns true when every timestamp in this interval is after the given
    /// timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff_extra::Interval;
    ///
    /// let t1: Timestamp = "2014-12-01T01:00:00Z".parse()?;
    /// let t2: Timestamp = "2014-12-01T01:01:00Z".parse()?;
    /// assert!(Interval::new(t2, t2)?.is_after_timestamp(t1));
    /// assert!(!Interval::new(t1, t2)?.is_after_timestamp(t1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn is_after_timestamp(self, timestamp: Timestamp) -> bool {
        self.start > timestamp
    }

    /// Returns the exact elapsed time from the start to the end of this
    /// interval.
    ///
    /// A [`SignedDuration`] can represent the distance between any two
    /// timestamps, so this never fails, even for [`Interval::ALL`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::SignedDuration;
    /// use jiff_extra::Interval;
    ///
    /// let interval: Interval = "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z".parse()?;
    /// assert_eq!(interval.to_duration(), SignedDuration::from_secs(60));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn to_duration(self) -> SignedDuration {
        self.start.duration_until(self.end)
    }

    fn check_connected(self, op: SetOp, other: Interval) -> Result<(), Error> {
        if !self.is_connected(other) {
            return Err(Error::from(E::Disconnected {
                op,
                left: self,
                right: other,
            }));
        }
        Ok(())
    }
}

/// Adds a span to a timestamp, resolving calendar units in the given offset.
pub(crate) fn add_span(
    start: Timestamp,
    offset: Offset,
    span: Span,
) -> Result<Timestamp, Error> {
    let zdt = start
        .to_zoned(TimeZone::fixed(offset))
        .checked_add(span)
        .context(E::OverflowEnd { start })?;
    Ok(zdt.timestamp())
}

/// Subtracts a span from a timestamp, resolving calendar units in the given
/// offset.
pub(crate) fn sub_span(
    end: Timestamp,
    offset: Offset,
    span: Span,
) -> Result<Timestamp, Error> {
    let zdt = end
        .to_zoned(TimeZone::fixed(offset))
        .checked_sub(span)
        .context(E::OverflowStart { end })?;
    Ok(zdt.timestamp())
}

impl core::fmt::Display for Interval {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use jiff::fmt::StdFmtWrite;

        DEFAULT_INTERVAL_PRINTER
            .print_interval(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Interval {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Interval, Error> {
        DEFAULT_INTERVAL_PARSER.parse_interval(string)
    }
}

/// Converts a range of timestamps into an interval.
///
/// # Errors
///
/// This fails with a validation error when the start of the range is after
/// its end.
///
/// # Example
///
/// ```
/// use jiff::Timestamp;
/// use jiff_extra::Interval;
///
/// let interval = Interval::try_from(Timestamp::UNIX_EPOCH..Timestamp::MAX)?;
/// assert!(interval.is_unbounded_end());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl TryFrom<Range<Timestamp>> for Interval {
    type Error = Error;

    #[inline]
    fn try_from(range: Range<Timestamp>) -> Result<Interval, Error> {
        Interval::new(range.start, range.end)
    }
}

/// Converts an interval into a half-open range of timestamps.
impl From<Interval> for Range<Timestamp> {
    #[inline]
    fn from(interval: Interval) -> Range<Timestamp> {
        interval.start..interval.end
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Interval, D::Error> {
        use serde::de;

        struct IntervalVisitor;

        impl<'de> de::Visitor<'de> for IntervalVisitor {
            type Value = Interval;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 interval string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Interval, E> {
                DEFAULT_INTERVAL_PARSER
                    .parse_interval(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Interval, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(IntervalVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Interval {
    fn arbitrary(g: &mut quickcheck::Gen) -> Interval {
        let (t1, t2) = (arbitrary_timestamp(g), arbitrary_timestamp(g));
        Interval { start: t1.min(t2), end: t1.max(t2) }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use alloc::vec;

        let Interval { start, end } = *self;
        let mut smaller = vec![];
        if !self.is_empty() {
            smaller.push(Interval { start, end: start });
            smaller.push(Interval { start: end, end });
        }
        alloc::boxed::Box::new(smaller.into_iter())
    }
}

/// Generates the sentinels a bit more often than a uniform sample would,
/// since that's where the interesting edge cases are.
#[cfg(test)]
fn arbitrary_timestamp(g: &mut quickcheck::Gen) -> Timestamp {
    use quickcheck::Arbitrary;

    match u8::arbitrary(g) % 16 {
        0 => Timestamp::MIN,
        1 => Timestamp::MAX,
        _ => {
            let min = Timestamp::MIN.as_nanosecond();
            let max = Timestamp::MAX.as_nanosecond();
            let nanos = min + i128::arbitrary(g).rem_euclid(max - min);
            Timestamp::from_nanosecond(nanos).unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use jiff::ToSpan;

    use super::*;

    /// The Unix second of 2014-12-01T01:00:00Z.
    const NOW1: i64 = 1_417_395_600;

    /// Returns `2014-12-01T01:00:00Z` plus `n - 1` minutes.
    fn now(n: i64) -> Timestamp {
        Timestamp::from_second(NOW1 + (n - 1) * 60).unwrap()
    }

    fn plus(t: Timestamp, seconds: i64) -> Timestamp {
        t.checked_add(SignedDuration::from_secs(seconds)).unwrap()
    }

    fn minus(t: Timestamp, seconds: i64) -> Timestamp {
        plus(t, -seconds)
    }

    fn iv(start: Timestamp, end: Timestamp) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn fixtures() {
        assert_eq!(now(1).to_string(), "2014-12-01T01:00:00Z");
        assert_eq!(now(4).to_string(), "2014-12-01T01:03:00Z");
    }

    #[test]
    fn all() {
        let all = Interval::ALL;
        assert_eq!(all.start(), Timestamp::MIN);
        assert_eq!(all.end(), Timestamp::MAX);
        assert!(!all.is_empty());
        assert!(all.is_unbounded_start());
        assert!(all.is_unbounded_end());
    }

    #[test]
    fn new() {
        let interval = Interval::new(now(1), now(2)).unwrap();
        assert_eq!(interval.start(), now(1));
        assert_eq!(interval.end(), now(2));
        assert!(!interval.is_empty());
        assert!(!interval.is_unbounded_start());
        assert!(!interval.is_unbounded_end());

        let empty = Interval::new(now(1), now(1)).unwrap();
        assert_eq!(empty.start(), now(1));
        assert_eq!(empty.end(), now(1));
        assert!(empty.is_empty());

        let err = Interval::new(now(2), now(1)).unwrap_err();
        assert!(err.is_validation());
        insta::assert_snapshot!(
            err.to_string(),
            @"interval start 2014-12-01T01:01:00Z is after interval end 2014-12-01T01:00:00Z",
        );
    }

    #[test]
    fn from_duration() {
        let interval =
            Interval::from_duration(now(1), SignedDuration::from_secs(60))
                .unwrap();
        assert_eq!(interval, iv(now(1), now(2)));

        let interval =
            Interval::from_duration(now(1), SignedDuration::ZERO).unwrap();
        assert_eq!(interval, iv(now(1), now(1)));

        let err =
            Interval::from_duration(now(2), SignedDuration::from_secs(-1))
                .unwrap_err();
        assert!(err.is_validation());
        insta::assert_snapshot!(
            err.to_string(),
            @"duration of an interval must not be negative",
        );
    }

    #[test]
    fn from_duration_at_extremes() {
        let err =
            Interval::from_duration(Timestamp::MAX, SignedDuration::MIN)
                .unwrap_err();
        assert!(err.is_validation());

        let err = Interval::from_duration(
            Timestamp::MAX,
            SignedDuration::from_nanos(1),
        )
        .unwrap_err();
        assert!(err.is_arithmetic());
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with(
            "adding duration to interval start \
             9999-12-30T22:00:00.999999999Z overflowed: ",
        ));

        let interval =
            Interval::from_duration(Timestamp::MAX, SignedDuration::ZERO)
                .unwrap();
        assert!(interval.is_empty());
        assert!(interval.is_unbounded_end());

        let interval = Interval::from_duration(
            Timestamp::MIN,
            Timestamp::MIN.duration_until(Timestamp::MAX),
        )
        .unwrap();
        assert_eq!(interval, Interval::ALL);
    }

    #[test]
    fn from_span() {
        let start: Timestamp = "2014-08-31T12:00:00Z".parse().unwrap();
        let interval = Interval::from_span(start, 6.months().hours(5)).unwrap();
        assert_eq!(
            interval.to_string(),
            "2014-08-31T12:00:00Z/2015-02-28T17:00:00Z"
        );

        let err = Interval::from_span(start, -6.hours()).unwrap_err();
        assert!(err.is_validation());

        let err = Interval::from_span(Timestamp::MAX, 1.day()).unwrap_err();
        assert!(err.is_arithmetic());
    }

    #[test]
    fn with_start() {
        let base = iv(now(1), now(3));
        assert_eq!(base.with_start(now(2)).unwrap(), iv(now(2), now(3)));
        assert!(iv(now(1), now(2)).with_start(now(3)).unwrap_err().is_validation());
    }

    #[test]
    fn with_end() {
        let base = iv(now(1), now(3));
        assert_eq!(base.with_end(now(2)).unwrap(), iv(now(1), now(2)));
        assert!(iv(now(2), now(3)).with_end(now(1)).unwrap_err().is_validation());
    }

    #[test]
    fn contains() {
        let interval = iv(now(1), now(2));
        assert!(!interval.contains(minus(now(1), 1)));
        assert!(interval.contains(now(1)));
        assert!(interval.contains(plus(now(1), 1)));
        assert!(interval.contains(minus(now(2), 1)));
        assert!(!interval.contains(now(2)));
    }

    #[test]
    fn contains_empty() {
        let interval = iv(now(1), now(1));
        assert!(!interval.contains(minus(now(1), 1)));
        assert!(!interval.contains(now(1)));
        assert!(!interval.contains(plus(now(1), 1)));
    }

    #[test]
    fn contains_max() {
        let interval = iv(now(2), Timestamp::MAX);
        assert!(!interval.contains(Timestamp::MIN));
        assert!(!interval.contains(now(1)));
        assert!(interval.contains(now(2)));
        assert!(interval.contains(now(3)));
        assert!(interval.contains(Timestamp::MAX));

        let interval = iv(Timestamp::MAX, Timestamp::MAX);
        assert!(interval.contains(Timestamp::MAX));
        assert!(!interval.contains(now(1)));
    }

    /// The eleven positions of a second interval relative to
    /// `[now(1), now(2))`, in the order: completely before (2), partly
    /// before (2), contained (3), partly after (2), completely after (2).
    fn positions() -> [Interval; 11] {
        let (n1, n2) = (now(1), now(2));
        [
            iv(minus(n1, 2), minus(n1, 1)),
            iv(minus(n1, 1), n1),
            iv(minus(n1, 1), n2),
            iv(minus(n1, 1), minus(n2, 1)),
            iv(n1, minus(n2, 1)),
            iv(n1, n2),
            iv(plus(n1, 1), n2),
            iv(n1, plus(n2, 1)),
            iv(plus(n1, 1), plus(n2, 1)),
            iv(n2, plus(n2, 1)),
            iv(plus(n2, 1), plus(n2, 2)),
        ]
    }

    /// The five positions of a second interval relative to the empty
    /// interval `[now(1), now(1))`: completely before (2), equal, and
    /// completely after (2).
    fn positions_empty() -> [Interval; 5] {
        let n1 = now(1);
        [
            iv(minus(n1, 2), minus(n1, 1)),
            iv(minus(n1, 1), n1),
            iv(n1, n1),
            iv(n1, plus(n1, 1)),
            iv(plus(n1, 1), plus(n1, 2)),
        ]
    }

    fn check(
        base: Interval,
        others: &[Interval],
        expected: &[bool],
        predicate: impl Fn(Interval, Interval) -> bool,
    ) {
        assert_eq!(others.len(), expected.len());
        for (&other, &want) in others.iter().zip(expected) {
            assert_eq!(
                predicate(base, other),
                want,
                "base: {base}, other: {other}",
            );
        }
    }

    #[test]
    fn encloses() {
        check(
            iv(now(1), now(2)),
            &positions(),
            &[
                false, false, false, false, true, true, true, false, false,
                false, false,
            ],
            Interval::encloses,
        );
        check(
            iv(now(1), now(1)),
            &positions_empty(),
            &[false, false, true, false, false],
            Interval::encloses,
        );
    }

    #[test]
    fn abuts() {
        check(
            iv(now(1), now(2)),
            &positions(),
            &[
                false, true, false, false, false, false, false, false, false,
                true, false,
            ],
            Interval::abuts,
        );
        check(
            iv(now(1), now(1)),
            &positions_empty(),
            &[false, true, false, true, false],
            Interval::abuts,
        );
    }

    #[test]
    fn is_connected() {
        check(
            iv(now(1), now(2)),
            &positions(),
            &[
                false, true, true, true, true, true, true, true, true, true,
                false,
            ],
            Interval::is_connected,
        );
        check(
            iv(now(1), now(1)),
            &positions_empty(),
            &[false, true, true, true, false],
            Interval::is_connected,
        );
    }

    #[test]
    fn overlaps() {
        check(
            iv(now(1), now(2)),
            &positions(),
            &[
                false, false, true, true, true, true, true, true, true,
                false, false,
            ],
            Interval::overlaps,
        );
        check(
            iv(now(1), now(1)),
            &positions_empty(),
            &[false, false, true, false, false],
            Interval::overlaps,
        );
    }

    #[test]
    fn overlaps_empty_inside() {
        let outer = iv(now(1), now(3));
        let empty = iv(now(2), now(2));
        assert!(outer.encloses(empty));
        assert!(!empty.overlaps(outer));
        assert!(!outer.overlaps(empty));
        assert!(outer.intersection(empty).unwrap().is_empty());

        let at_max = iv(Timestamp::MAX, Timestamp::MAX);
        assert!(!Interval::ALL.overlaps(at_max));
        assert!(!at_max.overlaps(Interval::ALL));
        assert!(at_max.overlaps(at_max));
    }

    #[test]
    fn is_after() {
        check(
            iv(now(1), now(2)),
            &positions(),
            &[
                true, true, false, false, false, false, false, false, false,
                false, false,
            ],
            Interval::is_after,
        );
        check(
            iv(now(1), now(1)),
            &positions_empty(),
            &[true, true, false, false, false],
            Interval::is_after,
        );
    }

    #[test]
    fn is_before() {
        check(
            iv(now(1), now(2)),
            &positions(),
            &[
                false, false, false, false, false, false, false, false,
                false, true, true,
            ],
            Interval::is_before,
        );
        check(
            iv(now(1), now(1)),
            &positions_empty(),
            &[false, false, false, true, true],
            Interval::is_before,
        );
    }

    #[test]
    fn is_after_timestamp() {
        let interval = iv(now(1), now(2));
        assert!(interval.is_after_timestamp(minus(now(1), 2)));
        assert!(interval.is_after_timestamp(minus(now(1), 1)));
        assert!(!interval.is_after_timestamp(now(1)));
        assert!(!interval.is_after_timestamp(now(2)));
        assert!(!interval.is_after_timestamp(plus(now(2), 1)));

        let empty = iv(now(1), now(1));
        assert!(empty.is_after_timestamp(minus(now(1), 1)));
        assert!(!empty.is_after_timestamp(now(1)));
        assert!(!empty.is_after_timestamp(plus(now(1), 1)));
    }

    #[test]
    fn is_before_timestamp() {
        let interval = iv(now(1), now(2));
        assert!(!interval.is_before_timestamp(minus(now(1), 1)));
        assert!(!interval.is_before_timestamp(now(1)));
        assert!(interval.is_before_timestamp(now(2)));
        assert!(interval.is_before_timestamp(plus(now(2), 1)));

        let empty = iv(now(1), now(1));
        assert!(!empty.is_before_timestamp(minus(now(1), 1)));
        assert!(!empty.is_before_timestamp(now(1)));
        assert!(empty.is_before_timestamp(plus(now(1), 1)));
    }

    /// Pairs of connected intervals along with their expected intersection
    /// and union: adjacent, adjacent empty, overlap, encloses and encloses
    /// empty.
    fn connected_pairs() -> [(Interval, Interval, Interval, Interval); 5] {
        let (n1, n2, n3, n4) = (now(1), now(2), now(3), now(4));
        [
            (iv(n1, n2), iv(n2, n4), iv(n2, n2), iv(n1, n4)),
            (iv(n1, n4), iv(n4, n4), iv(n4, n4), iv(n1, n4)),
            (iv(n1, n3), iv(n2, n4), iv(n2, n3), iv(n1, n4)),
            (iv(n1, n4), iv(n2, n3), iv(n2, n3), iv(n1, n4)),
            (iv(n1, n4), iv(n2, n2), iv(n2, n2), iv(n1, n4)),
        ]
    }

    #[test]
    fn intersection() {
        for (a, b, want, _) in connected_pairs() {
            assert!(a.is_connected(b), "{a} and {b} should be connected");
            assert!(b.is_connected(a), "{b} and {a} should be connected");
            assert_eq!(a.intersection(b).unwrap(), want, "{a} ∩ {b}");
            assert_eq!(b.intersection(a).unwrap(), want, "{b} ∩ {a}");
        }

        let same = iv(now(2), now(4));
        assert_eq!(same.intersection(same).unwrap(), same);
    }

    #[test]
    fn intersection_disconnected() {
        let (a, b) = (iv(now(1), now(2)), iv(now(3), now(4)));
        assert!(!a.is_connected(b));
        let err = a.intersection(b).unwrap_err();
        assert!(err.is_arithmetic());
        insta::assert_snapshot!(
            err.to_string(),
            @"cannot compute the intersection of intervals 2014-12-01T01:00:00Z/2014-12-01T01:01:00Z and 2014-12-01T01:02:00Z/2014-12-01T01:03:00Z because they are not connected",
        );
        assert!(b.intersection(a).unwrap_err().is_arithmetic());
    }

    #[test]
    fn union_and_span() {
        for (a, b, _, want) in connected_pairs() {
            assert_eq!(a.union(b).unwrap(), want, "{a} ∪ {b}");
            assert_eq!(b.union(a).unwrap(), want, "{b} ∪ {a}");
            assert_eq!(a.span(b), want);
            assert_eq!(b.span(a), want);
            assert!(want.encloses(a));
            assert!(want.encloses(b));
        }

        let same = iv(now(2), now(4));
        assert_eq!(same.union(same).unwrap(), same);
        assert_eq!(same.span(same), same);
    }

    #[test]
    fn union_disconnected() {
        let (a, b) = (iv(now(1), now(2)), iv(now(3), now(4)));
        let err = a.union(b).unwrap_err();
        assert!(err.is_arithmetic());
        insta::assert_snapshot!(
            err.to_string(),
            @"cannot compute the union of intervals 2014-12-01T01:00:00Z/2014-12-01T01:01:00Z and 2014-12-01T01:02:00Z/2014-12-01T01:03:00Z because they are not connected",
        );
        assert_eq!(a.span(b), iv(now(1), now(4)));
    }

    #[test]
    fn unbounded_algebra() {
        let left = iv(Timestamp::MIN, now(2));
        let right = iv(now(1), Timestamp::MAX);
        assert!(left.overlaps(right));
        assert_eq!(left.intersection(right).unwrap(), iv(now(1), now(2)));
        assert_eq!(left.union(right).unwrap(), Interval::ALL);
        assert!(Interval::ALL.encloses(left));
        assert!(Interval::ALL.encloses(right));
        assert!(Interval::ALL.overlaps(left));
        assert!(!Interval::ALL.is_before(right));
        assert!(!Interval::ALL.is_after(left));

        let at_max = iv(Timestamp::MAX, Timestamp::MAX);
        assert!(right.abuts(at_max));
        assert!(right.encloses(at_max));
        assert!(at_max.is_after(left));
        assert!(!at_max.is_before_timestamp(Timestamp::MAX));

        let at_min = iv(Timestamp::MIN, Timestamp::MIN);
        assert!(left.abuts(at_min));
        assert!(at_min.is_before(right));
        assert!(!at_min.is_after_timestamp(Timestamp::MIN));
    }

    #[test]
    fn to_duration() {
        let interval = iv(now(1), now(2));
        assert_eq!(interval.to_duration(), SignedDuration::from_secs(60));
        assert_eq!(
            Interval::ALL.to_duration(),
            Timestamp::MIN.duration_until(Timestamp::MAX),
        );
    }

    #[test]
    fn equality() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        fn hash(interval: Interval) -> u64 {
            let mut hasher = DefaultHasher::new();
            interval.hash(&mut hasher);
            hasher.finish()
        }

        let a = iv(now(1), now(2));
        let a2 = iv(now(1), now(2));
        let b = iv(now(1), now(3));
        let c = iv(now(2), now(2));
        assert_eq!(a, a);
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash(a), hash(a2));
    }

    #[test]
    fn range_conversions() {
        let range: Range<Timestamp> = iv(now(1), now(2)).into();
        assert_eq!(range, now(1)..now(2));
        assert_eq!(Interval::try_from(range).unwrap(), iv(now(1), now(2)));
        assert!(Interval::try_from(now(2)..now(1))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn to_string() {
        let interval = iv(now(1), now(2));
        assert_eq!(
            interval.to_string(),
            "2014-12-01T01:00:00Z/2014-12-01T01:01:00Z"
        );
        assert_eq!(
            Interval::ALL.to_string(),
            "-009999-01-02T01:59:59Z/9999-12-30T22:00:00.999999999Z",
        );
    }

    quickcheck::quickcheck! {
        fn prop_empty_iff_equal_bounds(interval: Interval) -> bool {
            interval.is_empty() == (interval.start() == interval.end())
        }

        fn prop_roundtrip_string(interval: Interval) -> bool {
            let got: Interval = interval.to_string().parse().unwrap();
            interval == got
        }

        fn prop_intersection_commutes(a: Interval, b: Interval) -> bool {
            match (a.intersection(b), b.intersection(a)) {
                (Ok(ab), Ok(ba)) => a.is_connected(b) && ab == ba,
                (Err(e1), Err(e2)) => {
                    !a.is_connected(b) && e1.is_arithmetic() && e2.is_arithmetic()
                }
                _ => false,
            }
        }

        fn prop_union_is_span_when_connected(a: Interval, b: Interval) -> bool {
            match a.union(b) {
                Ok(union) => union == a.span(b),
                Err(err) => err.is_arithmetic() && !a.is_connected(b),
            }
        }

        fn prop_span_encloses_both(a: Interval, b: Interval) -> bool {
            let span = a.span(b);
            span.encloses(a) && span.encloses(b)
        }

        fn prop_contains_own_bounds(interval: Interval) -> quickcheck::TestResult {
            if interval.is_empty() {
                return quickcheck::TestResult::discard();
            }
            quickcheck::TestResult::from_bool(
                interval.contains(interval.start())
                    && interval.contains(interval.end()) == interval.is_unbounded_end()
            )
        }

        fn prop_overlaps_iff_nonempty_intersection(a: Interval, b: Interval) -> bool {
            let shared = a
                .intersection(b)
                .map_or(false, |meet| !meet.is_empty());
            a.overlaps(b) == (a == b || shared)
        }

        fn prop_intersection_enclosed_by_both(a: Interval, b: Interval) -> quickcheck::TestResult {
            let Ok(meet) = a.intersection(b) else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(a.encloses(meet) && b.encloses(meet))
        }
    }
}
