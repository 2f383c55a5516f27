use jiff::Timestamp;

use crate::{error, Interval};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Disconnected { op: SetOp, left: Interval, right: Interval },
    NegativeDuration,
    NegativeSpan,
    OverflowEnd { start: Timestamp },
    OverflowStart { end: Timestamp },
    StartAfterEnd { start: Timestamp, end: Timestamp },
}

/// The set operations that require their operands to be connected.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SetOp {
    Intersection,
    Union,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Interval(err).into()
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
            Disconnected { op, left, right } => write!(
                f,
                "cannot compute the {op} of intervals {left} and {right} \
                 because they are not connected",
                op = op.name(),
            ),
            NegativeDuration => {
                f.write_str("duration of an interval must not be negative")
            }
            NegativeSpan => {
                f.write_str("span of an interval must not be negative")
            }
            OverflowEnd { start } => write!(
                f,
                "adding duration to interval start {start} overflowed",
            ),
            OverflowStart { end } => write!(
                f,
                "subtracting duration from interval end {end} overflowed",
            ),
            StartAfterEnd { start, end } => write!(
                f,
                "interval start {start} is after interval end {end}",
            ),
        }
    }
}

impl SetOp {
    fn name(self) -> &'static str {
        match self {
            SetOp::Intersection => "intersection",
            SetOp::Union => "union",
        }
    }
}
