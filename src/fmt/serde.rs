/*!
This module provides helpers to use with [Serde].

The helpers are exposed as modules meant to be used with
Serde's [`with` attribute].

By default, an [`Interval`](crate::Interval) serializes as its ISO 8601
string, like `"2014-12-01T01:00:00Z/2014-12-01T01:01:00Z"`. The helpers here
instead serialize an interval as a structure with `start` and `end` fields,
where each field is a [`jiff::Timestamp`] in its usual RFC 3339 form. This is
useful for interfacing with systems that store the two bounds separately.

When deserializing, the bounds are validated the same way as
[`Interval::new`](crate::Interval::new). That is, a start that is after its
end is rejected.

# Module hierarchy

Only the leaves of the tree are usable with Serde's `with` attribute.

* [`interval`]
    * [`pair`](self::interval::pair)
        * [`jiff_extra::fmt::serde::interval::pair::required`](self::interval::pair::required)
        * [`jiff_extra::fmt::serde::interval::pair::optional`](self::interval::pair::optional)

# Example

```
use jiff_extra::Interval;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Shift {
    #[serde(with = "jiff_extra::fmt::serde::interval::pair::required")]
    period: Interval,
}

let json = r#"{"period":{"start":"2014-12-01T01:00:00Z","end":"2014-12-01T09:00:00Z"}}"#;
let got: Shift = serde_json::from_str(json)?;
assert_eq!(got.period, "2014-12-01T01:00:00Z/PT8H".parse()?);
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: optional support

```
use jiff_extra::Interval;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Shift {
    #[serde(with = "jiff_extra::fmt::serde::interval::pair::optional")]
    period: Option<Interval>,
}

let json = r#"{"period":null}"#;
let got: Shift = serde_json::from_str(json)?;
assert_eq!(got.period, None);
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// Convenience routines for (de)serializing [`Interval`](crate::Interval)
/// in forms other than its ISO 8601 string.
pub mod interval {
    /// (De)serialize an interval as a structure of its `start` and `end`
    /// timestamps.
    pub mod pair {
        use jiff::Timestamp;
        use serde::{de, ser::SerializeStruct};

        use crate::Interval;

        const NAME: &str = "Interval";
        const FIELDS: &[&str] = &["start", "end"];

        /// A wrapper that carries the structural representation, so that
        /// it can be nested inside of an `Option`.
        struct Pair(Interval);

        impl serde::Serialize for Pair {
            fn serialize<S: serde::Serializer>(
                &self,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                let mut st = se.serialize_struct(NAME, 2)?;
                st.serialize_field("start", &self.0.start())?;
                st.serialize_field("end", &self.0.end())?;
                st.end()
            }
        }

        impl<'de> serde::Deserialize<'de> for Pair {
            fn deserialize<D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Pair, D::Error> {
                de.deserialize_struct(NAME, FIELDS, PairVisitor)
            }
        }

        enum Field {
            Start,
            End,
        }

        impl<'de> serde::Deserialize<'de> for Field {
            fn deserialize<D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Field, D::Error> {
                struct FieldVisitor;

                impl<'de> de::Visitor<'de> for FieldVisitor {
                    type Value = Field;

                    fn expecting(
                        &self,
                        f: &mut core::fmt::Formatter,
                    ) -> core::fmt::Result {
                        f.write_str("`start` or `end`")
                    }

                    fn visit_str<E: de::Error>(
                        self,
                        value: &str,
                    ) -> Result<Field, E> {
                        match value {
                            "start" => Ok(Field::Start),
                            "end" => Ok(Field::End),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                de.deserialize_identifier(FieldVisitor)
            }
        }

        struct PairVisitor;

        impl PairVisitor {
            fn finish<E: de::Error>(
                start: Timestamp,
                end: Timestamp,
            ) -> Result<Pair, E> {
                Interval::new(start, end).map(Pair).map_err(de::Error::custom)
            }
        }

        impl<'de> de::Visitor<'de> for PairVisitor {
            type Value = Pair;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an interval with `start` and `end` timestamps")
            }

            fn visit_seq<A: de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Pair, A::Error> {
                let start: Timestamp = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let end: Timestamp = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                PairVisitor::finish(start, end)
            }

            fn visit_map<A: de::MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<Pair, A::Error> {
                let (mut start, mut end) = (None, None);
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Start => {
                            if start.is_some() {
                                return Err(de::Error::duplicate_field(
                                    "start",
                                ));
                            }
                            start = Some(map.next_value::<Timestamp>()?);
                        }
                        Field::End => {
                            if end.is_some() {
                                return Err(de::Error::duplicate_field("end"));
                            }
                            end = Some(map.next_value::<Timestamp>()?);
                        }
                    }
                }
                let start =
                    start.ok_or_else(|| de::Error::missing_field("start"))?;
                let end = end.ok_or_else(|| de::Error::missing_field("end"))?;
                PairVisitor::finish(start, end)
            }
        }

        struct OptionalVisitor;

        impl<'de> de::Visitor<'de> for OptionalVisitor {
            type Value = Option<Interval>;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str(
                    "an interval with `start` and `end` timestamps or `None`",
                )
            }

            #[inline]
            fn visit_some<D: de::Deserializer<'de>>(
                self,
                de: D,
            ) -> Result<Option<Interval>, D::Error> {
                de.deserialize_struct(NAME, FIELDS, PairVisitor)
                    .map(|pair| Some(pair.0))
            }

            #[inline]
            fn visit_none<E: de::Error>(self) -> Result<Option<Interval>, E> {
                Ok(None)
            }
        }

        /// (De)serialize a required interval as a `start` and `end` pair.
        pub mod required {
            /// Serialize a required interval as a `start` and `end` pair.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                interval: &crate::Interval,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&super::Pair(*interval), se)
            }

            /// Deserialize a required interval from a `start` and `end`
            /// pair.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<crate::Interval, D::Error> {
                <super::Pair as serde::Deserialize>::deserialize(de)
                    .map(|pair| pair.0)
            }
        }

        /// (De)serialize an optional interval as a `start` and `end` pair.
        pub mod optional {
            /// Serialize an optional interval as a `start` and `end` pair.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                interval: &Option<crate::Interval>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                match *interval {
                    None => se.serialize_none(),
                    Some(interval) => se.serialize_some(&super::Pair(interval)),
                }
            }

            /// Deserialize an optional interval from a `start` and `end`
            /// pair.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<crate::Interval>, D::Error> {
                de.deserialize_option(super::OptionalVisitor)
            }
        }
    }
}
