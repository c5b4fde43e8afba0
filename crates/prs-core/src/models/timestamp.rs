//! ISO-8601 timestamp (de)serialization.
//!
//! Timestamps keep the offset they were sent with and are rendered with
//! seconds precision and an explicit `+HH:MM` offset, never `Z`.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Canonical rendering of a timestamp.
#[must_use]
pub fn format(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn parse<E: de::Error>(raw: &str) -> Result<DateTime<FixedOffset>, E> {
    DateTime::parse_from_rfc3339(raw)
        .map_err(|e| E::custom(format_args!("invalid timestamp '{raw}': {e}")))
}

pub fn serialize<S: Serializer>(
    timestamp: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(timestamp))
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<FixedOffset>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw)
}

/// Same as the parent module for `Option<DateTime<FixedOffset>>`.
pub mod option {
    use super::{DateTime, Deserialize, Deserializer, FixedOffset, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        timestamp: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match timestamp {
            Some(timestamp) => super::serialize(timestamp, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw))
            .transpose()
    }
}
