/// Default IANA timezone used for localized rendering
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// Default BCP 47 locale tag used for localized rendering
pub const DEFAULT_LOCALE: &str = "id-ID";

/// Earliest year that renders as four unsigned digits
pub const MIN_YEAR: i32 = 0;

/// Latest year that renders as four digits
pub const MAX_YEAR: i32 = 9999;

/// Day-first format separator (`DD/MM/YYYY`)
pub const DAY_FIRST_SEPARATOR: char = '/';
/// Separator between date and time in ISO 8601 timestamps
pub const TIME_DESIGNATOR: char = 'T';
/// UTC designator in ISO 8601 timestamps
pub const UTC_DESIGNATOR: char = 'Z';

/// Shape of a date-only string; `d` stands for any ASCII digit
pub(crate) const DATE_ONLY_SHAPE: &str = "dddd-dd-dd";
/// Shape of a day-first string; `d` stands for any ASCII digit
pub(crate) const DAY_FIRST_SHAPE: &str = "dd/dd/dddd";

/// Indonesian month names (index 0 is January)
pub const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// English month names (index 0 is January)
pub const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
