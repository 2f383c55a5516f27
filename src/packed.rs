/*!
Dates and times packed into a single decimal integer.

Legacy systems frequently store a civil date as the integer `YYYYMMDD`, or a
time of day as `HHMMSS` or `HHMM`. For example, `2015-12-03` is stored as
`20151203` and `11:30:52` as `113052`. This module provides a small type for
each of these encodings:

* [`PackedDate`] for `YYYYMMDD`, in the range `10000101..=99991231`.
* [`PackedHourMinute`] for `HHMM`, in the range `0..=2359`.
* [`PackedTime`] for `HHMMSS`, in the range `0..=235959`.

A packed value is only checked against its range on construction. Its digits
are interpreted when converting to a Jiff civil value, either strictly, where
digits out of range for their unit are rejected, or leniently, where they
carry over into the next larger unit.

# Example

```
use jiff::civil::{date, time};
use jiff_extra::packed::{PackedDate, PackedTime};

let packed = PackedDate::new(20151203)?;
assert_eq!(packed.to_date()?, date(2015, 12, 3));

// The 14th month doesn't exist, so it is rejected strictly and carried
// over into the next year leniently.
let packed = PackedDate::new(20151403)?;
assert!(packed.to_date().is_err());
assert_eq!(packed.to_date_lenient()?, date(2016, 2, 3));

let packed = PackedTime::from(time(11, 30, 52, 0));
assert_eq!(packed.get(), 113052);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use jiff::{
    civil::{Date, DateTime, Time},
    Span,
};

use crate::error::{packed::Error as E, Error, ErrorContext};

/// A civil date packed into a decimal integer as `YYYYMMDD`.
///
/// Only dates in the years `1000..=9999` can be packed, since the year must
/// be exactly four digits.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PackedDate(i32);

impl PackedDate {
    /// The smallest packed date, `1000-01-01`.
    pub const MIN: PackedDate = PackedDate(10000101);
    /// The largest packed date, `9999-12-31`.
    pub const MAX: PackedDate = PackedDate(99991231);

    /// Creates a packed date from its integer encoding.
    ///
    /// # Errors
    ///
    /// This returns a range error when `packed` is outside
    /// `10000101..=99991231`. The digits themselves are not checked until
    /// conversion to a [`Date`].
    #[inline]
    pub fn new(packed: i32) -> Result<PackedDate, Error> {
        if !(PackedDate::MIN.0..=PackedDate::MAX.0).contains(&packed) {
            return Err(Error::range(
                "packed date",
                packed,
                PackedDate::MIN.0,
                PackedDate::MAX.0,
            ));
        }
        Ok(PackedDate(packed))
    }

    /// Returns the integer encoding of this date.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Converts this packed value to a civil date.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month or day digits don't name a
    /// real date, as in `20151403` or `20150230`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_extra::packed::PackedDate;
    ///
    /// assert_eq!(PackedDate::new(10000101)?.to_date()?, date(1000, 1, 1));
    /// assert!(PackedDate::new(20150230)?.to_date().unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_date(self) -> Result<Date, Error> {
        let (year, month, day) = self.digits();
        Date::new(year, month, day).context(E::InvalidDate { packed: self.0 })
    }

    /// Converts this packed value to a civil date, carrying month and day
    /// digits that are out of range into the next larger unit.
    ///
    /// The month is added to January of the year, and then the day is added
    /// to the first of the resulting month. So a month of `00` means
    /// December of the previous year, and a day of `00` means the last day of
    /// the previous month.
    ///
    /// # Errors
    ///
    /// This returns a range error when carrying goes past the year `9999`,
    /// as in `99991301`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_extra::packed::PackedDate;
    ///
    /// assert_eq!(PackedDate::new(20151403)?.to_date_lenient()?, date(2016, 2, 3));
    /// assert_eq!(PackedDate::new(20150230)?.to_date_lenient()?, date(2015, 3, 2));
    /// assert_eq!(PackedDate::new(20150100)?.to_date_lenient()?, date(2014, 12, 31));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_date_lenient(self) -> Result<Date, Error> {
        let (year, month, day) = self.digits();
        let overflow = || E::OverflowDate { packed: self.0 };
        Date::new(year, 1, 1)
            .and_then(|d| d.checked_add(Span::new().months(month - 1)))
            .and_then(|d| d.checked_add(Span::new().days(day - 1)))
            .with_context(overflow)
    }

    /// Splits this value into year, month and day digits.
    fn digits(self) -> (i16, i8, i8) {
        // OK because the range check on construction guarantees the year
        // has four digits, and month and day are always in `0..=99`.
        let year = (self.0 / 10_000) as i16;
        let month = ((self.0 / 100) % 100) as i8;
        let day = (self.0 % 100) as i8;
        (year, month, day)
    }
}

impl TryFrom<Date> for PackedDate {
    type Error = Error;

    /// Packs a civil date.
    ///
    /// This fails with a range error when the year is outside `1000..=9999`.
    #[inline]
    fn try_from(date: Date) -> Result<PackedDate, Error> {
        let year = date.year();
        if !(1000..=9999).contains(&year) {
            return Err(Error::range("year", year, 1000, 9999));
        }
        let packed = i32::from(year) * 10_000
            + i32::from(date.month()) * 100
            + i32::from(date.day());
        Ok(PackedDate(packed))
    }
}

impl TryFrom<DateTime> for PackedDate {
    type Error = Error;

    #[inline]
    fn try_from(dt: DateTime) -> Result<PackedDate, Error> {
        PackedDate::try_from(dt.date())
    }
}

impl TryFrom<PackedDate> for Date {
    type Error = Error;

    #[inline]
    fn try_from(packed: PackedDate) -> Result<Date, Error> {
        packed.to_date()
    }
}

impl From<PackedDate> for i32 {
    #[inline]
    fn from(packed: PackedDate) -> i32 {
        packed.get()
    }
}

impl core::fmt::Display for PackedDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// A time of day packed into a decimal integer as `HHMM`.
///
/// The packed value has no leading zeros, so `01:21` is `121`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PackedHourMinute(i32);

impl PackedHourMinute {
    /// The smallest packed hour and minute, `00:00`.
    pub const MIN: PackedHourMinute = PackedHourMinute(0);
    /// The largest packed hour and minute, `23:59`.
    pub const MAX: PackedHourMinute = PackedHourMinute(2359);

    /// Creates a packed hour and minute from its integer encoding.
    ///
    /// # Errors
    ///
    /// This returns a range error when `packed` is outside `0..=2359`.
    #[inline]
    pub fn new(packed: i32) -> Result<PackedHourMinute, Error> {
        if !(PackedHourMinute::MIN.0..=PackedHourMinute::MAX.0)
            .contains(&packed)
        {
            return Err(Error::range(
                "packed hour and minute",
                packed,
                PackedHourMinute::MIN.0,
                PackedHourMinute::MAX.0,
            ));
        }
        Ok(PackedHourMinute(packed))
    }

    /// Returns the integer encoding of this time.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Converts this packed value to a civil time, with zero seconds.
    ///
    /// # Errors
    ///
    /// This returns a range error when the minute digits are greater than
    /// `59`, as in `1173`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_extra::packed::PackedHourMinute;
    ///
    /// assert_eq!(PackedHourMinute::new(1130)?.to_time()?, time(11, 30, 0, 0));
    /// assert!(PackedHourMinute::new(1173)?.to_time().unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_time(self) -> Result<Time, Error> {
        let (hour, minute) = self.digits();
        Time::new(hour, minute, 0, 0)
            .context(E::InvalidHourMinute { packed: self.0 })
    }

    /// Converts this packed value to a civil time, carrying minutes greater
    /// than `59` into the hour.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_extra::packed::PackedHourMinute;
    ///
    /// assert_eq!(PackedHourMinute::new(1173)?.to_time_lenient(), time(12, 13, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_time_lenient(self) -> Time {
        let (hour, minute) = self.digits();
        Time::midnight().wrapping_add(Span::new().hours(hour).minutes(minute))
    }

    fn digits(self) -> (i8, i8) {
        // OK because the range check on construction guarantees both are
        // in `0..=99`.
        ((self.0 / 100) as i8, (self.0 % 100) as i8)
    }
}

impl From<Time> for PackedHourMinute {
    /// Packs the hour and minute of a civil time. Seconds and smaller units
    /// are dropped.
    #[inline]
    fn from(time: Time) -> PackedHourMinute {
        PackedHourMinute(i32::from(time.hour()) * 100 + i32::from(time.minute()))
    }
}

impl TryFrom<PackedHourMinute> for Time {
    type Error = Error;

    #[inline]
    fn try_from(packed: PackedHourMinute) -> Result<Time, Error> {
        packed.to_time()
    }
}

impl From<PackedHourMinute> for i32 {
    #[inline]
    fn from(packed: PackedHourMinute) -> i32 {
        packed.get()
    }
}

impl core::fmt::Display for PackedHourMinute {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A time of day packed into a decimal integer as `HHMMSS`.
///
/// The packed value has no leading zeros, so `01:21:00` is `12100`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PackedTime(i32);

impl PackedTime {
    /// The smallest packed time, `00:00:00`.
    pub const MIN: PackedTime = PackedTime(0);
    /// The largest packed time, `23:59:59`.
    pub const MAX: PackedTime = PackedTime(235959);

    /// Creates a packed time from its integer encoding.
    ///
    /// # Errors
    ///
    /// This returns a range error when `packed` is outside `0..=235959`.
    #[inline]
    pub fn new(packed: i32) -> Result<PackedTime, Error> {
        if !(PackedTime::MIN.0..=PackedTime::MAX.0).contains(&packed) {
            return Err(Error::range(
                "packed time",
                packed,
                PackedTime::MIN.0,
                PackedTime::MAX.0,
            ));
        }
        Ok(PackedTime(packed))
    }

    /// Returns the integer encoding of this time.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Converts this packed value to a civil time.
    ///
    /// # Errors
    ///
    /// This returns a range error when the minute or second digits are
    /// greater than `59`, as in `117361`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_extra::packed::PackedTime;
    ///
    /// assert_eq!(PackedTime::new(113052)?.to_time()?, time(11, 30, 52, 0));
    /// assert!(PackedTime::new(117361)?.to_time().unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_time(self) -> Result<Time, Error> {
        let (hour, minute, second) = self.digits();
        Time::new(hour, minute, second, 0)
            .context(E::InvalidTime { packed: self.0 })
    }

    /// Converts this packed value to a civil time, carrying seconds and
    /// minutes greater than `59` into the next larger unit.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_extra::packed::PackedTime;
    ///
    /// assert_eq!(PackedTime::new(117361)?.to_time_lenient(), time(12, 14, 1, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_time_lenient(self) -> Time {
        let (hour, minute, second) = self.digits();
        let span = Span::new().hours(hour).minutes(minute).seconds(second);
        Time::midnight().wrapping_add(span)
    }

    fn digits(self) -> (i8, i8, i8) {
        // OK because the range check on construction guarantees all three
        // are in `0..=99`.
        let hour = (self.0 / 10_000) as i8;
        let minute = ((self.0 / 100) % 100) as i8;
        let second = (self.0 % 100) as i8;
        (hour, minute, second)
    }
}

impl From<Time> for PackedTime {
    /// Packs the hour, minute and second of a civil time. Fractional seconds
    /// are dropped.
    #[inline]
    fn from(time: Time) -> PackedTime {
        PackedTime(
            i32::from(time.hour()) * 10_000
                + i32::from(time.minute()) * 100
                + i32::from(time.second()),
        )
    }
}

impl TryFrom<PackedTime> for Time {
    type Error = Error;

    #[inline]
    fn try_from(packed: PackedTime) -> Result<Time, Error> {
        packed.to_time()
    }
}

impl From<PackedTime> for i32 {
    #[inline]
    fn from(packed: PackedTime) -> i32 {
        packed.get()
    }
}

impl core::fmt::Display for PackedTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:06}", self.0)
    }
}
