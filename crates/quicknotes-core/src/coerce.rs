//! Lenient boolean coercion for request bodies.
//!
//! Clients of the notes API historically send `completed` as a JSON boolean,
//! but also as `0`/`1` or as strings such as `"yes"` and `"off"`. These are
//! accepted; anything else is a validation failure.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;
use std::fmt;

/// A boolean that also accepts the common boolean spellings.
///
/// Accepts:
/// - JSON `true` / `false`
/// - Integers `0` / `1` and floats `0.0` / `1.0`
/// - Strings (case-insensitive, trimmed): `true`, `false`, `t`, `f`, `yes`,
///   `no`, `y`, `n`, `on`, `off`, `1`, `0`
///
/// # Example
///
/// ```rust
/// use quicknotes_core::FlexibleBool;
///
/// let b: FlexibleBool = serde_json::from_str("\"Yes\"").unwrap();
/// assert!(b.into_inner());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleBool(pub bool);

impl FlexibleBool {
    /// Returns the inner bool
    pub fn into_inner(self) -> bool {
        self.0
    }
}

impl From<FlexibleBool> for bool {
    fn from(b: FlexibleBool) -> Self {
        b.0
    }
}

/// Parse a boolean spelling. Returns `None` when the text is not one.
pub fn parse_bool_str(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

struct FlexibleBoolVisitor;

impl<'de> Visitor<'de> for FlexibleBoolVisitor {
    type Value = FlexibleBool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, 0 or 1, or a boolean string such as \"true\" or \"no\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FlexibleBool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(FlexibleBool(false)),
            1 => Ok(FlexibleBool(true)),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(FlexibleBool(false)),
            1 => Ok(FlexibleBool(true)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v == 0.0 {
            Ok(FlexibleBool(false))
        } else if v == 1.0 {
            Ok(FlexibleBool(true))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_bool_str(v)
            .map(FlexibleBool)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for FlexibleBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleBoolVisitor)
    }
}

/// `deserialize_with` adapter producing a plain `bool`.
pub fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleBool::deserialize(deserializer).map(FlexibleBool::into_inner)
}
