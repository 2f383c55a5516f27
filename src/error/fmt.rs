use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    BothDurations,
    BothLocal,
    ConvertLocal { side: Side },
    EmptyElement { side: Side },
    EmptyInput,
    InvalidDuration { side: Side },
    InvalidMeridiem,
    InvalidTimestamp { side: Side },
    LocalWithDuration { side: Side },
    MissingSeparator,
    MissingTime { side: Side },
    PrintTimestamp { side: Side },
    UnrecognizedOffset { side: Side },
}

/// Which half of an ISO 8601 interval an error refers to.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Side {
    Start,
    End,
}

impl Error {
    /// Whether this error means the input was absent rather than malformed.
    pub(crate) fn is_missing(&self) -> bool {
        matches!(*self, Error::EmptyInput)
    }

    /// Whether this error means the input did not match the interval grammar.
    pub(crate) fn is_parse(&self) -> bool {
        !matches!(*self, Error::EmptyInput | Error::PrintTimestamp { .. })
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            BothDurations => f.write_str(
                "an interval cannot have a duration for both its start \
                 and its end",
            ),
            BothLocal => f.write_str(
                "an interval needs an offset on at least one of its start \
                 or end, but neither has one",
            ),
            ConvertLocal { side } => write!(
                f,
                "failed to convert {side} of interval to a timestamp \
                 using the offset from the other side",
                side = side.name(),
            ),
            EmptyElement { side } => write!(
                f,
                "expected a timestamp or a duration for the {side} of \
                 interval, but found nothing",
                side = side.name(),
            ),
            EmptyInput => f.write_str(
                "an empty string is not a valid interval \
                 (expected `<start>/<end>`)",
            ),
            InvalidDuration { side } => write!(
                f,
                "failed to parse {side} of interval as an ISO 8601 duration",
                side = side.name(),
            ),
            InvalidMeridiem => {
                f.write_str("expected `AM` or `PM` (case insensitive)")
            }
            InvalidTimestamp { side } => write!(
                f,
                "failed to parse {side} of interval as a timestamp",
                side = side.name(),
            ),
            LocalWithDuration { side } => write!(
                f,
                "{side} of interval is a datetime without an offset, \
                 which requires the other side to have an offset, \
                 but the other side is a duration",
                side = side.name(),
            ),
            MissingSeparator => f.write_str(
                "expected to find `/` separating the start and end \
                 of an interval, but found none",
            ),
            MissingTime { side } => write!(
                f,
                "{side} of interval is a date without a time, \
                 but a time is required",
                side = side.name(),
            ),
            PrintTimestamp { side } => write!(
                f,
                "failed to print {side} of interval",
                side = side.name(),
            ),
            UnrecognizedOffset { side } => write!(
                f,
                "{side} of interval has an unrecognized kind of offset",
                side = side.name(),
            ),
        }
    }
}

impl Side {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Side::Start => "start",
            Side::End => "end",
        }
    }
}
