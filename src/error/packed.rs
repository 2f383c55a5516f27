use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    InvalidDate { packed: i32 },
    InvalidHourMinute { packed: i32 },
    InvalidTime { packed: i32 },
    OverflowDate { packed: i32 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Packed(err).into()
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
            InvalidDate { packed } => write!(
                f,
                "packed date {packed:08} is not a valid `YYYYMMDD` date",
            ),
            InvalidHourMinute { packed } => write!(
                f,
                "packed hour and minute {packed:04} is not a valid \
                 `HHMM` time",
            ),
            InvalidTime { packed } => write!(
                f,
                "packed time {packed:06} is not a valid `HHMMSS` time",
            ),
            OverflowDate { packed } => write!(
                f,
                "resolving packed date {packed:08} leniently overflowed",
            ),
        }
    }
}
