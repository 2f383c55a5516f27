use jiff::civil::{DateTime, Time};

use crate::error::{fmt::Error as E, Error};

/// A half of the day, before or after noon.
///
/// The ante meridiem, `AM`, covers the hours `0..=11`. The post meridiem,
/// `PM`, covers the hours `12..=23`. `AM` sorts before `PM`.
///
/// A meridiem can be converted to and from its integer value, where `AM` is
/// `0` and `PM` is `1`, and to and from the text `AM` or `PM`.
///
/// # Example
///
/// ```
/// use jiff::civil::time;
/// use jiff_extra::Meridiem;
///
/// assert_eq!(Meridiem::from(time(8, 30, 0, 0)), Meridiem::AM);
/// assert_eq!(Meridiem::from(time(17, 30, 0, 0)), Meridiem::PM);
/// assert_eq!(Meridiem::PM.to_string(), "PM");
/// assert_eq!("am".parse::<Meridiem>()?, Meridiem::AM);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[allow(clippy::upper_case_acronyms)]
#[repr(i8)]
pub enum Meridiem {
    /// Before noon, covering the hours `0..=11`.
    AM = 0,
    /// After noon, covering the hours `12..=23`.
    PM = 1,
}

impl Meridiem {
    /// Returns the meridiem for the given integer value, where `0` is `AM`
    /// and `1` is `PM`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the value is not `0` or `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Meridiem;
    ///
    /// assert_eq!(Meridiem::new(0)?, Meridiem::AM);
    /// assert_eq!(Meridiem::new(1)?, Meridiem::PM);
    /// assert!(Meridiem::new(2).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(value: i8) -> Result<Meridiem, Error> {
        match value {
            0 => Ok(Meridiem::AM),
            1 => Ok(Meridiem::PM),
            _ => Err(Error::range("meridiem", value, 0, 1)),
        }
    }

    /// Returns the meridiem containing the given hour of the day.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is outside `0..=23`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_extra::Meridiem;
    ///
    /// assert_eq!(Meridiem::from_hour(11)?, Meridiem::AM);
    /// assert_eq!(Meridiem::from_hour(12)?, Meridiem::PM);
    /// assert!(Meridiem::from_hour(-1).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hour(hour: i8) -> Result<Meridiem, Error> {
        match hour {
            0..=11 => Ok(Meridiem::AM),
            12..=23 => Ok(Meridiem::PM),
            _ => Err(Error::range("hour", hour, 0, 23)),
        }
    }

    /// Returns the integer value of this meridiem: `0` for `AM` and `1` for
    /// `PM`.
    #[inline]
    pub fn get(self) -> i8 {
        self as i8
    }

    /// Returns the text form of this meridiem, `AM` or `PM`.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::AM => "AM",
            Meridiem::PM => "PM",
        }
    }
}

impl From<Time> for Meridiem {
    #[inline]
    fn from(time: Time) -> Meridiem {
        if time.hour() < 12 {
            Meridiem::AM
        } else {
            Meridiem::PM
        }
    }
}

impl From<DateTime> for Meridiem {
    #[inline]
    fn from(dt: DateTime) -> Meridiem {
        Meridiem::from(dt.time())
    }
}

impl From<Meridiem> for i8 {
    #[inline]
    fn from(meridiem: Meridiem) -> i8 {
        meridiem.get()
    }
}

impl TryFrom<i8> for Meridiem {
    type Error = Error;

    #[inline]
    fn try_from(value: i8) -> Result<Meridiem, Error> {
        Meridiem::new(value)
    }
}

impl core::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl core::str::FromStr for Meridiem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Meridiem, Error> {
        if s.eq_ignore_ascii_case("am") {
            Ok(Meridiem::AM)
        } else if s.eq_ignore_ascii_case("pm") {
            Ok(Meridiem::PM)
        } else {
            Err(Error::from(E::InvalidMeridiem))
        }
    }
}
