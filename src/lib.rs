/*!
This crate provides extra value types that build on [`jiff`].

The centerpiece is [`Interval`], an immutable span of time between two
[`jiff::Timestamp`] values. It supports unbounded ends, a full interval
algebra and parsing of ISO 8601 interval strings. This crate also provides
[`Meridiem`], the AM/PM half of the day, and the [`packed`] module for dates
and times encoded as decimal integers like `YYYYMMDD`.

# Intervals

An interval includes its start and excludes its end. The start is never
after the end, and an interval whose start and end are equal is empty.

```
use jiff::{SignedDuration, Timestamp};
use jiff_extra::Interval;

let start: Timestamp = "2014-12-01T01:00:00Z".parse()?;
let interval = Interval::from_duration(start, SignedDuration::from_hours(6))?;
assert!(interval.contains(start));
assert!(!interval.contains(interval.end()));
assert_eq!(interval.to_duration(), SignedDuration::from_hours(6));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Parsing ISO 8601 intervals

An interval string has a start and an end separated by a `/`. Either one
may be a duration, which is then resolved relative to the other. A datetime
without an offset adopts the offset of the other side.

```
use jiff_extra::Interval;

let a: Interval = "2014-12-01T01:00:00Z/PT6H".parse()?;
let b: Interval = "PT6H/2014-12-01T07:00:00Z".parse()?;
let c: Interval = "2014-12-01T03:00:00+02:00/2014-12-01T09:00".parse()?;
assert_eq!(a, b);
assert_eq!(a, c);
assert_eq!(a.to_string(), "2014-12-01T01:00:00Z/2014-12-01T07:00:00Z");

# Ok::<(), Box<dyn std::error::Error>>(())
```

See the [`fmt::interval`] module for the details of the format, and for a
printer that can emit intervals with a particular offset or precision.

# Unbounded intervals

The bounds of Jiff's timestamps, [`jiff::Timestamp::MIN`] and
[`jiff::Timestamp::MAX`], act as sentinels for an interval that is unbounded
at its start or end. Every operation in this crate behaves consistently at
these extremes. Arithmetic that would go beyond them fails with an error
instead of saturating.

```
use jiff::{SignedDuration, Timestamp};
use jiff_extra::Interval;

let rest = Interval::new(Timestamp::UNIX_EPOCH, Timestamp::MAX)?;
assert!(rest.is_unbounded_end());
assert!(rest.contains(Timestamp::MAX));
assert!(Interval::ALL.encloses(rest));

let err = Interval::from_duration(Timestamp::MAX, SignedDuration::from_secs(1))
    .unwrap_err();
assert!(err.is_arithmetic());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) -
  When enabled, [`Error`] implements `std::error::Error`.
* **alloc** (enabled by default via **std**) -
  Enables APIs that return a `String`, like
  [`IntervalPrinter::interval_to_string`](fmt::interval::IntervalPrinter::interval_to_string).
* **serde** -
  When enabled, [`Interval`] implements `Serialize` and `Deserialize` using
  its ISO 8601 string form. The [`fmt::serde`] module provides helpers for
  other representations.
* **logging** -
  When enabled, the `log` crate is used to emit messages about how interval
  strings are resolved. This is mostly useful for debugging.
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors are reference counted, so an allocator is always required.
extern crate alloc;

pub use crate::{error::Error, interval::Interval, meridiem::Meridiem};

#[macro_use]
mod logging;

mod error;
pub mod fmt;
mod interval;
mod meridiem;
pub mod packed;
