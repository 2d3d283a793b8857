//! Serde adapters for API dates (`YYYY-MM-DD`) and timestamps (RFC 3339).

use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::params::format_date;

fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
}

fn parse_date_time(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(text, &Rfc3339).or_else(|error| {
        // Some feeds omit the offset; those timestamps are UTC.
        PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|_| error)
    })
}

pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).map_err(|error| D::Error::custom(format!("invalid date '{text}': {error}")))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(text) => parse_date(&text)
                    .map(Some)
                    .map_err(|error| D::Error::custom(format!("invalid date '{text}': {error}"))),
                None => Ok(None),
            }
        }
    }
}

pub mod date_time {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = value.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date_time(&text)
            .map_err(|error| D::Error::custom(format!("invalid timestamp '{text}': {error}")))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<OffsetDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<OffsetDateTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(text) => parse_date_time(&text).map(Some).map_err(|error| {
                    D::Error::custom(format!("invalid timestamp '{text}': {error}"))
                }),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn parses_date_only_values() {
        assert_eq!(parse_date("2024-01-31").expect("date"), date!(2024 - 01 - 31));
        assert!(parse_date("2024-01-31T00:00:00Z").is_err());
    }

    #[test]
    fn parses_timestamps_with_and_without_offset() {
        assert_eq!(
            parse_date_time("2024-01-31T16:00:00.000Z").expect("timestamp"),
            datetime!(2024-01-31 16:00:00 UTC)
        );
        assert_eq!(
            parse_date_time("2024-01-31T16:00:00").expect("timestamp"),
            datetime!(2024-01-31 16:00:00 UTC)
        );
    }
}
