use crate::consts::{DEFAULT_LOCALE, DEFAULT_TIMEZONE};
use crate::prelude::*;
use crate::types::Locale;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Zone used to resolve wall-clock inputs (`YYYY-MM-DD`, `DD/MM/YYYY`, offset-less ISO,
/// [`DateInput::Wall`](crate::DateInput::Wall)).
///
/// Rendering always uses the configured timezone; parsing defaults to the host's
/// local zone for compatibility with existing callers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ParseZone {
    /// The runtime's local timezone
    #[default]
    #[display(fmt = "local")]
    Local,
    /// The converter's configured timezone
    #[display(fmt = "configured")]
    Configured,
}

/// Converter settings. Missing fields fall back to [`Default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateConverterConfig {
    /// IANA timezone name used for localized rendering
    pub timezone: String,
    /// BCP 47 locale tag used for localized rendering
    pub locale: String,
    pub parse_zone: ParseZone,
}

impl Default for DateConverterConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            parse_zone: ParseZone::default(),
        }
    }
}

impl DateConverterConfig {
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub const fn with_parse_zone(mut self, parse_zone: ParseZone) -> Self {
        self.parse_zone = parse_zone;
        self
    }

    /// Resolves the timezone name, falling back to the default zone when unknown.
    pub(crate) fn resolve_timezone(&self) -> Tz {
        self.timezone.trim().parse::<Tz>().unwrap_or_else(|_| {
            warn!(
                timezone = %self.timezone,
                fallback = DEFAULT_TIMEZONE,
                "unknown timezone, using fallback"
            );
            chrono_tz::Asia::Jakarta
        })
    }

    /// Resolves the locale tag, falling back to the default locale when unsupported.
    pub(crate) fn resolve_locale(&self) -> Locale {
        self.locale.parse::<Locale>().unwrap_or_else(|err| {
            warn!(%err, fallback = DEFAULT_LOCALE, "unsupported locale, using fallback");
            Locale::default()
        })
    }
}
