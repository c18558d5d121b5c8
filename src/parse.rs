//! Normalization of [`DateInput`] into an absolute instant.
//!
//! Text is classified by shape in a fixed order: ISO timestamps (anything containing
//! `T` or `Z`), exact `YYYY-MM-DD`, exact `DD/MM/YYYY`, and finally a best-effort
//! free-form pass. Wall-clock readings are resolved in a [`WallZone`].

use crate::consts::{
    DATE_ONLY_SHAPE, DAY_FIRST_SEPARATOR, DAY_FIRST_SHAPE, MAX_YEAR, MIN_YEAR, MONTHS_EN,
    MONTHS_ID, TIME_DESIGNATOR, UTC_DESIGNATOR,
};
use crate::{ConvertError, DateInput, Result};
use chrono::{
    DateTime, Datelike, Local, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Utc,
};
use chrono_tz::Tz;
use tracing::{debug, trace};

/// Offset-less ISO date-times
const ISO_WALL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// ISO date-times with an offset but without seconds (RFC 3339 requires seconds)
const ISO_OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

const FREE_FORM_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const FREE_FORM_DATE_FORMATS: [&str; 4] = ["%Y/%m/%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];

/// Zone in which wall-clock readings are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WallZone {
    Local,
    Named(Tz),
}

impl WallZone {
    /// Resolves a wall-clock reading. A fold picks the earlier instant, a gap moves the
    /// reading forward by one hour.
    fn resolve(self, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Local => resolve_in(&Local, wall),
            Self::Named(tz) => resolve_in(&tz, wall),
        }
    }
}

fn resolve_in<Z: TimeZone>(zone: &Z, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&wall) {
        MappedLocalTime::Single(dt) | MappedLocalTime::Ambiguous(dt, _) => {
            Some(dt.with_timezone(&Utc))
        }
        MappedLocalTime::None => {
            let shifted = wall.checked_add_signed(TimeDelta::try_hours(1)?)?;
            zone.from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

/// Converts any accepted input into an instant whose UTC year is within `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn to_instant(input: &DateInput, zone: WallZone) -> Result<DateTime<Utc>> {
    let instant = match input {
        DateInput::Instant(instant) => Some(*instant),
        DateInput::Millis(millis) => DateTime::from_timestamp_millis(*millis),
        DateInput::Wall(wall) => zone.resolve(*wall),
        DateInput::Text(text) => parse_text(text, zone),
    };

    match instant {
        Some(instant) if in_year_range(instant.year()) => Ok(instant),
        _ => {
            trace!(?input, "rejected date input");
            Err(ConvertError::InvalidInput)
        }
    }
}

/// Years outside this range would not render as four digits.
pub(crate) const fn in_year_range(year: i32) -> bool {
    year >= MIN_YEAR && year <= MAX_YEAR
}

fn parse_text(text: &str, zone: WallZone) -> Option<DateTime<Utc>> {
    if text.contains(TIME_DESIGNATOR) || text.contains(UTC_DESIGNATOR) {
        parse_iso(text, zone).or_else(|| parse_free_form(text, zone))
    } else if matches_shape(text, DATE_ONLY_SHAPE) {
        parse_date_only(text, zone)
    } else if matches_shape(text, DAY_FIRST_SHAPE) {
        parse_day_first(text, zone)
    } else {
        parse_free_form(text, zone)
    }
}

/// Checks `text` against a shape where `d` is any ASCII digit and every other byte is literal.
fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text
            .bytes()
            .zip(shape.bytes())
            .all(|(c, s)| if s == b'd' { c.is_ascii_digit() } else { c == s })
}

fn parse_iso(text: &str, zone: WallZone) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(stripped) = text.strip_suffix(UTC_DESIGNATOR) {
        return ISO_WALL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(stripped, fmt).ok())
            .map(|wall| wall.and_utc());
    }

    if let Some(dt) = ISO_OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    ISO_WALL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .and_then(|wall| zone.resolve(wall))
}

fn parse_date_only(text: &str, zone: WallZone) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    zone.resolve(date.and_time(NaiveTime::MIN))
}

fn parse_day_first(text: &str, zone: WallZone) -> Option<DateTime<Utc>> {
    let mut parts = text.split(DAY_FIRST_SEPARATOR);
    let day = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let year = parts.next()?.parse::<i32>().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    zone.resolve(date.and_time(NaiveTime::MIN))
}

fn parse_free_form(text: &str, zone: WallZone) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    debug!(input = trimmed, "falling back to free-form date parsing");

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(wall) = FREE_FORM_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return zone.resolve(wall);
    }

    FREE_FORM_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| parse_day_month_name_year(trimmed))
        .and_then(|date| zone.resolve(date.and_time(NaiveTime::MIN)))
}

/// `D <month name> YYYY` with Indonesian or English month names, case-insensitive.
fn parse_day_month_name_year(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let day = parts.next()?.parse::<u32>().ok()?;
    let month_name = parts.next()?;
    let year = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let month = month_number(month_name, &MONTHS_ID)
        .or_else(|| month_number(month_name, &MONTHS_EN))?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str, names: &[&str; 12]) -> Option<u32> {
    names
        .iter()
        .zip(1..)
        .find_map(|(candidate, number)| candidate.eq_ignore_ascii_case(name).then_some(number))
}
