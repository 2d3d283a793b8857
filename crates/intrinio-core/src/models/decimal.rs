//! Decimal fields carried as JSON numbers.
//!
//! Values are read through their shortest textual form, so `143.23` stays
//! `143.23` instead of picking up binary floating point noise, and written back
//! as integers when they have no fractional digits.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Number(serde_json::Number),
    Text(String),
}

fn parse(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text))
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.scale() == 0 {
        if let Some(integer) = value.to_i64() {
            return serializer.serialize_i64(integer);
        }
    }

    let float = value
        .to_string()
        .parse::<f64>()
        .map_err(|error| S::Error::custom(format!("decimal {value} is not representable: {error}")))?;
    serializer.serialize_f64(float)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawDecimal::deserialize(deserializer)? {
        RawDecimal::Number(number) => number.to_string(),
        RawDecimal::Text(text) => text,
    };
    parse(text.trim()).map_err(|error| D::Error::custom(format!("invalid decimal '{text}': {error}")))
}

pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Option::<RawDecimal>::deserialize(deserializer)? {
            Some(RawDecimal::Number(number)) => number.to_string(),
            Some(RawDecimal::Text(text)) => text,
            None => return Ok(None),
        };
        parse(text.trim())
            .map(Some)
            .map_err(|error| D::Error::custom(format!("invalid decimal '{text}': {error}")))
    }
}
