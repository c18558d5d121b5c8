mod clock;
mod config;
mod consts;
mod parse;
mod prelude;
pub mod serde_api;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DateConverterConfig, ParseZone};
pub use consts::*;
pub use types::{DateFormat, DateInput, Locale, UnknownLocale};

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use chrono_tz::Tz;
use parse::WallZone;

/// Errors produced while converting a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The value is not date-like or does not name a real instant.
    #[error("Invalid date input")]
    InvalidInput,

    /// The format tag is not one of `iso`, `date-only`, `indonesian`, `short`, `api`.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Normalizes date-like input and renders it in one of the [`DateFormat`]s.
///
/// `iso`, `api` and `date-only` output is instant-based and identical for every
/// configuration. `indonesian` and `short` output is rendered in the configured
/// timezone and locale, so two converters may print the same instant differently.
#[derive(Debug, Clone)]
pub struct DateConverter<C = SystemClock> {
    config: DateConverterConfig,
    timezone: Tz,
    locale: Locale,
    clock: C,
}

impl DateConverter {
    /// Creates a converter reading the system clock. Never fails; unknown timezone or
    /// locale values fall back to the defaults.
    pub fn new(config: DateConverterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new(DateConverterConfig::default())
    }
}

impl<C: Clock> DateConverter<C> {
    /// Creates a converter that takes the current instant from `clock`.
    pub fn with_clock(config: DateConverterConfig, clock: C) -> Self {
        let timezone = config.resolve_timezone();
        let locale = config.resolve_locale();
        Self {
            config,
            timezone,
            locale,
            clock,
        }
    }

    /// The configuration as supplied, before fallbacks
    pub const fn config(&self) -> &DateConverterConfig {
        &self.config
    }

    /// The timezone used for localized rendering
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The locale used for localized rendering
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    const fn wall_zone(&self) -> WallZone {
        match self.config.parse_zone {
            ParseZone::Local => WallZone::Local,
            ParseZone::Configured => WallZone::Named(self.timezone),
        }
    }

    pub(crate) fn to_instant(&self, input: &DateInput) -> Result<DateTime<Utc>> {
        parse::to_instant(input, self.wall_zone())
    }

    fn parse<I>(&self, input: I) -> Result<DateTime<Utc>>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        let input = input.try_into()?;
        self.to_instant(&input)
    }

    /// `YYYY-MM-DDTHH:mm:ss.sssZ`
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidInput` if the input is not a valid date.
    pub fn to_iso<I>(&self, input: I) -> Result<String>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        self.parse(input).map(|instant| iso_string(&instant))
    }

    /// `YYYY-MM-DD`, the UTC calendar date of the instant.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidInput` if the input is not a valid date.
    pub fn to_date_only<I>(&self, input: I) -> Result<String>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        self.parse(input)
            .map(|instant| instant.format("%Y-%m-%d").to_string())
    }

    /// Day, month name and year in the configured timezone and locale,
    /// e.g. `15 Oktober 2024`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidInput` if the input is not a valid date.
    pub fn to_indonesian<I>(&self, input: I) -> Result<String>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        let instant = self.parse(input)?;
        Ok(self.locale.render_long(self.local_date(&instant)?))
    }

    /// Zero-padded numeric date in the configured timezone and locale, e.g. `15/10/2024`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidInput` if the input is not a valid date.
    pub fn to_short<I>(&self, input: I) -> Result<String>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        let instant = self.parse(input)?;
        Ok(self.locale.render_short(self.local_date(&instant)?))
    }

    /// Renders the input in `format`. `Api` is the same as `Iso`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidInput` if the input is not a valid date.
    pub fn convert<I>(&self, input: I, format: DateFormat) -> Result<String>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        match format {
            DateFormat::Iso | DateFormat::Api => self.to_iso(input),
            DateFormat::DateOnly => self.to_date_only(input),
            DateFormat::Indonesian => self.to_indonesian(input),
            DateFormat::Short => self.to_short(input),
        }
    }

    /// Like [`convert`](Self::convert), with the format given by its tag.
    /// The tag is checked before the input.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedFormat` for an unknown tag, otherwise
    /// `ConvertError::InvalidInput` if the input is not a valid date.
    pub fn convert_tagged<I>(&self, input: I, tag: &str) -> Result<String>
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        let format = tag.parse::<DateFormat>()?;
        self.convert(input, format)
    }

    /// Whether the input converts to a valid instant. Never fails.
    pub fn is_valid<I>(&self, input: I) -> bool
    where
        I: TryInto<DateInput>,
        ConvertError: From<I::Error>,
    {
        self.parse(input).is_ok()
    }

    /// The clock's current instant in `format`, `Iso` when `None`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidInput` if the clock reports an instant outside
    /// the supported range.
    pub fn now(&self, format: Option<DateFormat>) -> Result<String> {
        self.convert(self.clock.now(), format.unwrap_or_default())
    }

    /// Calendar date in the configured timezone; its year must also render as four digits.
    fn local_date(&self, instant: &DateTime<Utc>) -> Result<chrono::NaiveDate> {
        let date = instant.with_timezone(&self.timezone).date_naive();
        if parse::in_year_range(date.year()) {
            Ok(date)
        } else {
            Err(ConvertError::InvalidInput)
        }
    }
}

pub(crate) fn iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
