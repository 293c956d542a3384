//! Cache-control hint path segments.
//!
//! The proxy reports the response path each cache hint applies to as a list
//! mixing field names and list indices:
//!
//! ```text
//! ["Catalog", "searchStore", "elements", 3, "promotions"]
//! ```
//!
//! Each segment is decoded into a [`HintPath`] that remembers which JSON type
//! it was read from, so writing the response back out reproduces the original
//! shape.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HintPath {
    Integer(i64),
    String(String),
}

impl HintPath {
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HintPath::Integer(value) => Some(*value),
            HintPath::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HintPath::Integer(_) => None,
            HintPath::String(value) => Some(value),
        }
    }
}

impl From<i64> for HintPath {
    fn from(value: i64) -> Self {
        HintPath::Integer(value)
    }
}

impl From<&str> for HintPath {
    fn from(value: &str) -> Self {
        HintPath::String(value.to_owned())
    }
}

impl fmt::Display for HintPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintPath::Integer(value) => write!(f, "{value}"),
            HintPath::String(value) => f.write_str(value),
        }
    }
}

impl Serialize for HintPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            HintPath::Integer(value) => serializer.serialize_i64(*value),
            HintPath::String(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for HintPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HintPathVisitor)
    }
}

struct HintPathVisitor;

impl Visitor<'_> for HintPathVisitor {
    type Value = HintPath;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot unmarshal type HintPath: expected an integer or a string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<HintPath, E>
    where
        E: de::Error,
    {
        Ok(HintPath::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<HintPath, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .map(HintPath::Integer)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<HintPath, E>
    where
        E: de::Error,
    {
        Ok(HintPath::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<HintPath, E>
    where
        E: de::Error,
    {
        Ok(HintPath::String(value))
    }
}
