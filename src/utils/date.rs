//! Date utility functions
//!
//! Weekday classification and business-day arithmetic over
//! [`NaiveDate`]. Only Saturday and Sunday are treated as non-business days.

use crate::error::DateError;
use crate::weekday::DayOfWeek;
use chrono::{Datelike, Duration, NaiveDate};

/// Build a date from its components, rejecting days that do not exist
///
/// # Errors
/// * `DateError::Validation` - month or day is out of range (e.g. Feb 30, month 13)
pub fn new_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::Validation(format!("{year:04}-{month:02}-{day:02} is not a calendar date")))
}

/// Day of the week for a date
pub fn day_of_week(d: NaiveDate) -> DayOfWeek {
    DayOfWeek::from(d.weekday())
}

pub fn is_weekend(d: NaiveDate) -> bool {
    day_of_week(d).is_weekend()
}

pub fn is_weekday(d: NaiveDate) -> bool {
    !is_weekend(d)
}

/// Business day before `d`
///
/// Sunday and Monday skip back over the weekend to Friday; every other day
/// (Saturday included) steps back one day.
///
/// # Panics
/// Panics if the result falls before `NaiveDate::MIN`.
pub fn previous_business_day(d: NaiveDate) -> NaiveDate {
    let delta = match day_of_week(d) {
        DayOfWeek::Sunday => 2,
        DayOfWeek::Monday => 3,
        _ => 1,
    };
    d - Duration::days(delta)
}

/// Business day after `d`
///
/// Friday and Saturday skip forward over the weekend to Monday.
///
/// # Panics
/// Panics if the result falls after `NaiveDate::MAX`.
pub fn next_business_day(d: NaiveDate) -> NaiveDate {
    let delta = match day_of_week(d) {
        DayOfWeek::Friday => 3,
        DayOfWeek::Saturday => 2,
        _ => 1,
    };
    d + Duration::days(delta)
}

/// First Monday-to-Friday day of `d`'s month
pub fn first_business_day_of_month(d: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    let first = d - Duration::days(i64::from(d.day0()));
    if is_weekday(first) {
        first
    } else {
        next_business_day(first)
    }
}

/// The `n`th business day of `d`'s month, counting from 1
///
/// # Errors
/// * `DateError::InvalidArgument` - `n` is zero, or the month has fewer than `n` business days
pub fn nth_business_day_of_month(n: u32, d: NaiveDate) -> Result<NaiveDate, DateError> {
    if n == 0 {
        return Err(DateError::InvalidArgument(
            "n must be a positive business day index".to_string(),
        ));
    }

    let mut current = first_business_day_of_month(d);
    for _ in 1..n {
        current = next_business_day(current);
        if current.month() != d.month() {
            log::debug!("business day {} requested past the end of {}", n, d.format("%Y-%m"));
            return Err(DateError::InvalidArgument(
                "n exceeds the number of business days in the month".to_string(),
            ));
        }
    }
    Ok(current)
}
