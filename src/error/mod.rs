use alloc::sync::Arc;

pub(crate) mod fmt;
pub(crate) mod interval;
pub(crate) mod packed;

/// An error that can occur in this crate.
///
/// Errors fall into a handful of categories, each of which can be detected
/// with one of the `Error::is_*` predicates:
///
/// * A validation error, when an interval would end before it starts. See
/// [`Error::is_validation`].
/// * A parse error, when a string does not match the ISO 8601 interval
/// grammar. See [`Error::is_parse`].
/// * An arithmetic error, when the intersection or union of two disconnected
/// intervals is requested, or when duration arithmetic overflows the limits
/// of [`jiff::Timestamp`]. See [`Error::is_arithmetic`].
/// * A missing argument error, when an empty string is given where an
/// interval was expected. See [`Error::is_missing`].
/// * A range error, when an integer given for a meridiem or a packed field
/// is out of bounds. See [`Error::is_range`].
///
/// # Design
///
/// Like Jiff, this crate uses a single error type for all of its operations.
/// An error may have a cause, which is usually an error from Jiff itself.
/// The full causal chain is included in the `Display` output, and the
/// immediate cause is available via `std::error::Error::source` when the
/// `std` feature is enabled.
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
/// let err = Interval::new(t2, t1).unwrap_err();
/// assert!(err.is_validation());
/// assert_eq!(
///     err.to_string(),
///     "interval start 2014-12-01T01:01:00Z is after \
///      interval end 2014-12-01T01:00:00Z",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone and one word in
    /// size, regardless of how big the error kinds get.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error occurred because an interval would have
    /// had its start after its end.
    ///
    /// This includes creating an interval from a negative duration.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{SignedDuration, Timestamp};
    /// use jiff_extra::Interval;
    ///
    /// let start = Timestamp::UNIX_EPOCH;
    /// let err = Interval::from_duration(start, SignedDuration::from_secs(-1))
    ///     .unwrap_err();
    /// assert!(err.is_validation());
    ///
    /// let err = "1970-01-01T00:00:01Z/1970-01-01T00:00:00Z"
    ///     .parse::<Interval>()
    ///     .unwrap_err();
    /// assert!(err.is_validation());
    /// assert!(!err.is_parse());
    /// ```
    pub fn is_validation(&self) -> bool {
        use self::interval::Error::*;

        self.chain().any(|err| {
            matches!(
                *err.kind(),
                ErrorKind::Interval(
                    NegativeDuration | NegativeSpan | StartAfterEnd { .. }
                )
            )
        })
    }

    /// Returns true when this error occurred because a string could not be
    /// parsed as an ISO 8601 interval (or as a meridiem).
    ///
    /// Note that an empty string is reported as a missing argument and not
    /// as a parse error.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let err = "2014-12-01T01:00:00Z-2014-12-01T01:01:00Z"
    ///     .parse::<Interval>()
    ///     .unwrap_err();
    /// assert!(err.is_parse());
    ///
    /// let err = "PT1H/PT2H".parse::<Interval>().unwrap_err();
    /// assert!(err.is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Fmt(ref err) => err.is_parse(),
            _ => false,
        })
    }

    /// Returns true when this error occurred because of an arithmetic
    /// failure.
    ///
    /// This happens when asking for the intersection or union of two
    /// intervals that are not connected, or when adding (or subtracting)
    /// a duration would go beyond [`Timestamp::MIN`](jiff::Timestamp::MIN)
    /// or [`Timestamp::MAX`](jiff::Timestamp::MAX).
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{SignedDuration, Timestamp};
    /// use jiff_extra::Interval;
    ///
    /// let err = Interval::from_duration(
    ///     Timestamp::MAX,
    ///     SignedDuration::from_hours(1),
    /// ).unwrap_err();
    /// assert!(err.is_arithmetic());
    ///
    /// let a: Interval = "2014-12-01T01:00:00Z/PT1M".parse()?;
    /// let b: Interval = "2014-12-01T01:02:00Z/PT1M".parse()?;
    /// assert!(a.union(b).unwrap_err().is_arithmetic());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_arithmetic(&self) -> bool {
        use self::interval::Error::*;

        self.chain().any(|err| {
            matches!(
                *err.kind(),
                ErrorKind::Interval(
                    Disconnected { .. }
                        | OverflowEnd { .. }
                        | OverflowStart { .. }
                )
            )
        })
    }

    /// Returns true when this error occurred because a required input was
    /// absent.
    ///
    /// Since every bound of an [`Interval`](crate::Interval) is a required
    /// parameter, the only way to trigger this is to parse an empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Interval;
    ///
    /// let err = "".parse::<Interval>().unwrap_err();
    /// assert!(err.is_missing());
    /// assert!(!err.is_parse());
    /// ```
    pub fn is_missing(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Fmt(ref err) => err.is_missing(),
            _ => false,
        })
    }

    /// Returns true when this error occurred because an integer value was
    /// outside the range supported by a meridiem or a packed field.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::{packed::PackedDate, Meridiem};
    ///
    /// assert!(Meridiem::from_hour(24).unwrap_err().is_range());
    /// assert!(PackedDate::new(1230101).unwrap_err().is_range());
    /// // The digits are in range, but the 14th month doesn't exist:
    /// let packed = PackedDate::new(20151403)?;
    /// assert!(packed.to_date().unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_range(&self) -> bool {
        self.chain().any(|err| {
            matches!(*err.kind(), ErrorKind::Range(_) | ErrorKind::Packed(_))
        })
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "hour")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    /// Contextualizes this error with the given consequent. That is, the
    /// error returned says "consequent is caused by self."
    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because every contextual error is created right before being
        // attached, so its `Arc` has exactly one reference.
        let inner = Arc::get_mut(&mut err.inner)
            .expect("contextual error must not be shared");
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let cause = self.inner.cause.as_ref()?;
        match *cause.kind() {
            ErrorKind::Jiff(ref err) => Some(err),
            _ => Some(cause),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Fmt(self::fmt::Error),
    Interval(self::interval::Error),
    Jiff(jiff::Error),
    Packed(self::packed::Error),
    Range(RangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Fmt(ref err) => core::fmt::Display::fmt(err, f),
            Interval(ref err) => core::fmt::Display::fmt(err, f),
            Jiff(ref err) => core::fmt::Display::fmt(err, f),
            Packed(ref err) => core::fmt::Display::fmt(err, f),
            Range(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Clone, Debug)]
struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `ErrorContext::context` work without
/// needing to rely on public `From` impls for the internal error kinds.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for jiff::Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        Error::from(self)
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// (or a `Result<T, jiff::Error>`). Specifically, in the latter case, it
/// absolves one of the need to call `map_err` everywhere one wants to add
/// context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful when building the consequent requires copying values
    /// that are only needed on the error path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[inline]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    #[inline]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
