// models/src/identifiers.rs

use std::{fmt, str::FromStr};

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::errors::IntakeError;

/// The id of a reference record (city, speciality or doctor).
///
/// The mock endpoints are not consistent about id encoding: doctors carry
/// `cityId`/`specialityId` either as JSON numbers or as numeric strings, so
/// deserialization accepts both. Serialization always writes a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReferenceId(pub i64);

impl From<i64> for ReferenceId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ReferenceId {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ReferenceId)
            .map_err(|_| IntakeError::InvalidInput(format!("'{}' is not a valid id", s)))
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

struct ReferenceIdVisitor;

impl<'de> Visitor<'de> for ReferenceIdVisitor {
    type Value = ReferenceId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer id or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ReferenceId(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(ReferenceId)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Ok(ReferenceId(value as i64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .trim()
            .parse::<i64>()
            .map(ReferenceId)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for ReferenceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ReferenceIdVisitor)
    }
}
