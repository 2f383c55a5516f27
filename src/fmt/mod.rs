/*!
Configurable support for printing and parsing intervals.

The main entry point is the [`interval`] module, which provides a parser and
a printer for ISO 8601 time intervals. The [`Display`](core::fmt::Display)
and [`FromStr`](core::str::FromStr) implementations on
[`Interval`](crate::Interval) are thin wrappers around their default
configurations.

The printer writes to any implementation of [`jiff::fmt::Write`]. That
includes `String`, and any [`core::fmt::Write`] implementation when wrapped
in a [`jiff::fmt::StdFmtWrite`].

When the `serde` crate feature is enabled, the `serde` module provides
helpers for use with Serde's `with` attribute.
*/

pub mod interval;
#[cfg(feature = "serde")]
pub mod serde;
