//! Field-level serde coercion for loosely-typed CSV rows
//!
//! The CSV files store every value as a string; historical rows also mix
//! representations (`Yes`/`true` for booleans, blank numeric cells). All
//! of that tolerance is concentrated here so the record structs stay
//! strictly typed.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Boolean persisted as the two-valued string `Yes`/`No`.
///
/// Deserialization accepts a real boolean, `"Yes"` or `"true"` as true;
/// anything else (including a blank cell) reads as false.
pub mod yes_no {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        struct YesNoVisitor;

        impl Visitor<'_> for YesNoVisitor {
            type Value = bool;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or a Yes/No string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
                Ok(v == "Yes" || v == "true")
            }

            fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
                Ok(false)
            }

            fn visit_none<E: de::Error>(self) -> Result<bool, E> {
                Ok(false)
            }
        }

        deserializer.deserialize_any(YesNoVisitor)
    }
}

/// Numeric cell that parses with a fallback of 0 instead of erroring.
///
/// Covers `order`, `seatnumber` and `displaynumber`, whose malformed or
/// blank values are treated as 0 rather than a read failure.
pub fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    struct LenientVisitor;

    impl Visitor<'_> for LenientVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer or a numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(0))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
            if v.is_finite() && v >= 0.0 {
                Ok(v as u32)
            } else {
                Ok(0)
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            Ok(v.trim().parse().unwrap_or(0))
        }

        fn visit_unit<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(LenientVisitor)
}
