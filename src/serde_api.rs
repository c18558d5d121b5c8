//! Serde helpers for `DateTime<Utc>` fields exchanged with a REST backend.
//!
//! Serializes in the `api` format and accepts anything the converter can parse:
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Vaccination {
//!     #[serde(with = "date_converter::serde_api")]
//!     given_at: DateTime<Utc>,
//!     #[serde(default, with = "date_converter::serde_api::option")]
//!     booster_at: Option<DateTime<Utc>>,
//! }
//!
//! let parsed: Vaccination =
//!     serde_json::from_str(r#"{"given_at":"2024-10-15T10:30:00Z","booster_at":null}"#).unwrap();
//! let json = serde_json::to_string(&parsed).unwrap();
//! assert_eq!(json, r#"{"given_at":"2024-10-15T10:30:00.000Z","booster_at":null}"#);
//! ```

use crate::{DateConverter, DateInput, iso_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso_string(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = DateInput::deserialize(deserializer)?;
    DateConverter::default()
        .to_instant(&input)
        .map_err(serde::de::Error::custom)
}

/// Same as the parent module, for optional fields.
pub mod option {
    use super::{DateConverter, DateInput, iso_string};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_some(&iso_string(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<DateInput>::deserialize(deserializer)?
            .map(|input| DateConverter::default().to_instant(&input))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
