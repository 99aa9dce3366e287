//! Date and time conversion functions
//!
//! This module converts between [`NaiveDateTime`] values (implicitly UTC) and
//! the representations other systems hand us: formatted strings, Windows
//! file times and Unix epoch seconds or milliseconds.

use crate::constants::{
    DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT, FILE_TIME_TICKS_PER_MICROSECOND, WINDOWS_TO_UNIX_EPOCH_SECONDS,
};
use crate::error::DateError;
use chrono::format::{self, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Values that can be promoted to a [`NaiveDateTime`]
///
/// Dates become midnight of the same day; date-times pass through unchanged.
pub trait IntoDateTime {
    fn into_date_time(self) -> NaiveDateTime;
}

impl IntoDateTime for NaiveDateTime {
    fn into_date_time(self) -> NaiveDateTime {
        self
    }
}

impl IntoDateTime for NaiveDate {
    fn into_date_time(self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

impl<T: IntoDateTime + Copy> IntoDateTime for &T {
    fn into_date_time(self) -> NaiveDateTime {
        (*self).into_date_time()
    }
}

/// Build a date-time from its components
///
/// # Errors
/// * `DateError::Validation` - the components do not name a real date and time of day
pub fn new_date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
) -> Result<NaiveDateTime, DateError> {
    let date = crate::utils::date::new_date(year, month, day)?;
    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond).ok_or_else(|| {
        DateError::Validation(format!(
            "{hour:02}:{minute:02}:{second:02}.{microsecond:06} is not a time of day"
        ))
    })?;
    Ok(date.and_time(time))
}

/// Promote a date to midnight; date-times are returned unchanged
pub fn date_time_from_date(value: impl IntoDateTime) -> NaiveDateTime {
    value.into_date_time()
}

/// Format a date-time with a strftime pattern
///
/// # Errors
/// * `DateError::Format` - the pattern has an unknown specifier or needs a time zone
pub fn format_date_time(dt: NaiveDateTime, pattern: &str) -> Result<String, DateError> {
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern))
        .map_err(|_| DateError::format(dt.to_string(), pattern, "pattern cannot render this value"))?;
    Ok(out)
}

/// Format a date with a strftime pattern
///
/// # Errors
/// * `DateError::Format` - the pattern has an unknown specifier or asks for time-of-day fields
pub fn format_date(d: NaiveDate, pattern: &str) -> Result<String, DateError> {
    let mut out = String::new();
    write!(out, "{}", d.format(pattern))
        .map_err(|_| DateError::format(d.to_string(), pattern, "pattern cannot render this value"))?;
    Ok(out)
}

/// Format a date-time as `YYYY-MM-DDTHH:mm:ss.ffffffZ`
pub fn format_date_time_default(dt: NaiveDateTime) -> String {
    dt.format(DEFAULT_DATETIME_FORMAT).to_string()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date_default(d: NaiveDate) -> String {
    d.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Parse a date-time with a strftime pattern
///
/// Fields the pattern does not mention take strptime defaults: time of day
/// falls back to midnight, month and day to 1, and the year to 1900.
///
/// With [`DEFAULT_DATETIME_FORMAT`] the fraction is optional, but when
/// present it must have exactly six digits (`%.6f`). Use `%.f` in a custom
/// pattern to accept any number of fractional digits.
///
/// # Errors
/// * `DateError::Format` - `text` does not match `pattern`
pub fn parse_date_time(text: &str, pattern: &str) -> Result<NaiveDateTime, DateError> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(pattern))
        .map_err(|e| DateError::format(text, pattern, e))?;

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            log::trace!("defaulting month/day while parsing '{}' with '{}'", text, pattern);
            // Setters only fail when the field is already present, which is what we want.
            let _ = parsed.set_month(1);
            let _ = parsed.set_day(1);
            match parsed.to_naive_date() {
                Ok(date) => date,
                // Year last, so a two-digit `%y` still wins over 1900.
                Err(e) if e.kind() == ParseErrorKind::NotEnough => {
                    let _ = parsed.set_year(1900);
                    parsed.to_naive_date().map_err(|e| DateError::format(text, pattern, e))?
                }
                Err(e) => return Err(DateError::format(text, pattern, e)),
            }
        }
        Err(e) => return Err(DateError::format(text, pattern, e)),
    };

    let time = match parsed.to_naive_time() {
        Ok(time) => time,
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            log::trace!("defaulting time of day while parsing '{}' with '{}'", text, pattern);
            let _ = parsed.set_hour(0);
            let _ = parsed.set_minute(0);
            let _ = parsed.set_second(0);
            parsed.to_naive_time().map_err(|e| DateError::format(text, pattern, e))?
        }
        Err(e) => return Err(DateError::format(text, pattern, e)),
    };

    Ok(date.and_time(time))
}

/// Parse a date with a strftime pattern, discarding any time of day
///
/// # Errors
/// * `DateError::Format` - `text` does not match `pattern`
pub fn parse_date(text: &str, pattern: &str) -> Result<NaiveDate, DateError> {
    Ok(parse_date_time(text, pattern)?.date())
}

fn unix_epoch() -> NaiveDateTime {
    NaiveDateTime::UNIX_EPOCH
}

fn windows_epoch() -> NaiveDateTime {
    unix_epoch() - Duration::seconds(WINDOWS_TO_UNIX_EPOCH_SECONDS)
}

/// Convert a Windows file time (100 ns ticks since 1601-01-01) to a date-time
///
/// The sub-microsecond remainder is truncated.
pub fn date_time_from_windows_file_time(file_time: u64) -> NaiveDateTime {
    // u64::MAX / 10 fits in i64 and lands well inside chrono's range.
    let micros = (file_time / FILE_TIME_TICKS_PER_MICROSECOND) as i64;
    windows_epoch() + Duration::microseconds(micros)
}

/// Seconds since the Unix epoch, negative before 1970
///
/// Dates are promoted to midnight first.
pub fn date_time_to_epoch_seconds(value: impl IntoDateTime) -> f64 {
    let delta = value.into_date_time() - unix_epoch();
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / MICROS_PER_SECOND,
        None => delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9,
    }
}

/// Date-time `seconds` after the Unix epoch, rounded to the microsecond
///
/// # Errors
/// * `DateError::Validation` - `seconds` is not finite or the result is not representable
pub fn epoch_seconds_to_date_time(seconds: f64) -> Result<NaiveDateTime, DateError> {
    let micros = (seconds * MICROS_PER_SECOND).round();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if !micros.is_finite() || micros >= i64::MAX as f64 || micros < i64::MIN as f64 {
        return Err(DateError::Validation(format!("{seconds} seconds from the epoch is out of range")));
    }
    unix_epoch()
        .checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or_else(|| DateError::Validation(format!("{seconds} seconds from the epoch is out of range")))
}

/// Milliseconds since the Unix epoch
///
/// The fractional part is truncated toward zero, not floored, so
/// `1969-12-31T23:59:59.999500` gives `0` rather than `-1`.
pub fn date_time_to_epoch_millis(value: impl IntoDateTime) -> i64 {
    (date_time_to_epoch_seconds(value) * 1000.0) as i64
}

/// Date-time `millis` milliseconds after the Unix epoch
///
/// # Errors
/// * `DateError::Validation` - `millis` is not finite or the result is not representable
pub fn epoch_millis_to_date_time(millis: f64) -> Result<NaiveDateTime, DateError> {
    epoch_seconds_to_date_time(millis / 1000.0)
}
