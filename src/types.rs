use crate::consts::{MONTHS_EN, MONTHS_ID};
use crate::prelude::*;
use crate::ConvertError;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::convert::Infallible;
use std::str::FromStr;

/// Output shapes a converter commits to producing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `YYYY-MM-DDTHH:mm:ss.sssZ`
    #[default]
    #[display(fmt = "iso")]
    Iso,
    /// `YYYY-MM-DD`, UTC calendar date
    #[display(fmt = "date-only")]
    DateOnly,
    /// Long localized date, e.g. `15 Oktober 2024`
    #[display(fmt = "indonesian")]
    Indonesian,
    /// Numeric localized date, e.g. `15/10/2024`
    #[display(fmt = "short")]
    Short,
    /// Alias of [`DateFormat::Iso`] for values sent to the backend
    #[display(fmt = "api")]
    Api,
}

impl DateFormat {
    /// All accepted format tags, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Iso,
        Self::DateOnly,
        Self::Indonesian,
        Self::Short,
        Self::Api,
    ];

    /// Whether output in this format parses back to the same instant (or calendar day)
    pub const fn is_round_trip(self) -> bool {
        matches!(self, Self::Iso | Self::DateOnly | Self::Api)
    }
}

impl FromStr for DateFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iso" => Ok(Self::Iso),
            "date-only" => Ok(Self::DateOnly),
            "indonesian" => Ok(Self::Indonesian),
            "short" => Ok(Self::Short),
            "api" => Ok(Self::Api),
            other => Err(ConvertError::UnsupportedFormat(other.to_owned())),
        }
    }
}

impl TryFrom<&str> for DateFormat {
    type Error = ConvertError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error returned when a locale tag is not one of the supported display locales.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0}")]
pub struct UnknownLocale(pub String);

/// Display locales with their own month names and field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Locale {
    #[default]
    #[display(fmt = "id-ID")]
    Indonesian,
    #[display(fmt = "en-US")]
    EnglishUs,
    #[display(fmt = "en-GB")]
    EnglishGb,
}

impl Locale {
    /// Month names for this locale, January first
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Indonesian => &MONTHS_ID,
            Self::EnglishUs | Self::EnglishGb => &MONTHS_EN,
        }
    }

    /// Name of a 1-based month, `None` outside `1..=12`
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.month_names().get(index).copied()
    }

    /// Day, spelled-out month and year in this locale's order
    pub fn render_long(self, date: NaiveDate) -> String {
        let month = self.month_name(date.month()).unwrap_or_default();
        match self {
            Self::Indonesian | Self::EnglishGb => {
                format!("{} {} {:04}", date.day(), month, date.year())
            }
            Self::EnglishUs => format!("{} {}, {:04}", month, date.day(), date.year()),
        }
    }

    /// Two-digit day and month plus four-digit year in this locale's order
    pub fn render_short(self, date: NaiveDate) -> String {
        match self {
            Self::Indonesian | Self::EnglishGb => {
                format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
            }
            Self::EnglishUs => {
                format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
            }
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "id" | "id-id" => Ok(Self::Indonesian),
            "en" | "en-us" => Ok(Self::EnglishUs),
            "en-gb" => Ok(Self::EnglishGb),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}

/// Any value the converter accepts as a date.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum DateInput {
    /// ISO, `YYYY-MM-DD`, `DD/MM/YYYY` or free-form text
    Text(String),
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// An absolute instant
    Instant(DateTime<Utc>),
    /// A wall-clock reading, resolved in the converter's parse zone
    Wall(NaiveDateTime),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Wall(value.and_time(NaiveTime::MIN))
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

impl From<DateTime<chrono_tz::Tz>> for DateInput {
    fn from(value: DateTime<chrono_tz::Tz>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

impl TryFrom<&Value> for DateInput {
    type Error = ConvertError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => number
                .as_i64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .map(Self::Millis)
                .ok_or(ConvertError::InvalidInput),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(ConvertError::InvalidInput)
            }
        }
    }
}

impl TryFrom<Value> for DateInput {
    type Error = ConvertError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(&value).map_err(serde::de::Error::custom)
    }
}

impl From<Infallible> for ConvertError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
