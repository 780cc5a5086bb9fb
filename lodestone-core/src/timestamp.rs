//! Wire timestamp handling
//!
//! The hosted service emits timestamps without a timezone marker
//! (`2024-01-01 00:00:00`). They are UTC by contract, so every value is
//! normalized to [`DateTime<Utc>`] at the parse boundary. All conversion goes
//! through this module; nothing else in the workspace touches the wire format.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Format of timestamps on the wire. No timezone marker; UTC by contract.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a wire timestamp into a timezone-aware UTC instant.
///
/// A value that does not match [`WIRE_FORMAT`] is an error, never a default.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, WIRE_FORMAT).map(|naive| naive.and_utc())
}

/// Render a UTC instant in the wire format.
pub fn format_utc(value: &DateTime<Utc>) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Serde adapter for required wire-timestamp fields.
///
/// Use with `#[serde(with = "timestamp::wire")]`.
pub mod wire {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_utc(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional wire-timestamp fields.
///
/// Use with `#[serde(with = "timestamp::wire_opt", default)]`. A missing or
/// null field is `None`; a present but malformed field is an error.
pub mod wire_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_some(&super::format_utc(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| super::parse_utc(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}
