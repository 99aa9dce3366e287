//! datetime-helpers - small date math for business logic
//!
//! This library classifies days of the week, computes business-day offsets,
//! and converts between date/time representations: formatted strings,
//! Windows file times, Unix epoch seconds and milliseconds, and calendar
//! dates. Dates are [`chrono::NaiveDate`]; date-times are
//! [`chrono::NaiveDateTime`] and are treated as UTC.
//!
//! # Modules
//!
//! * [`utils`] - Pure weekday, business-day and conversion functions
//! * [`calendar`] - Business-day operations relative to today
//! * [`clock`] - Injectable source of the current date
//! * [`weekday`] - The [`DayOfWeek`] enumeration
//! * [`serde_format`] - Serde adapters for the default string formats
//! * [`config`] - Configuration file handling
//! * [`logger`] - Logging setup

/// Business-day operations anchored on a clock
pub mod calendar;

/// Clock abstraction for "today"
pub mod clock;

/// Configuration module for default formats and logging
pub mod config;

/// Default patterns and epoch constants
pub mod constants;

/// Error types
pub mod error;

/// Logging setup for the `log` facade
pub mod logger;

/// Serde adapters for dates and date-times
pub mod serde_format;

/// Date and date-time helper functions
pub mod utils;

/// Day-of-week enumeration
pub mod weekday;

pub use calendar::BusinessCalendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};
pub use error::DateError;
pub use utils::date::{
    day_of_week, first_business_day_of_month, is_weekday, is_weekend, new_date, next_business_day,
    nth_business_day_of_month, previous_business_day,
};
pub use utils::datetime::{
    date_time_from_date, date_time_from_windows_file_time, date_time_to_epoch_millis, date_time_to_epoch_seconds,
    epoch_millis_to_date_time, epoch_seconds_to_date_time, format_date, format_date_default, format_date_time,
    format_date_time_default, new_date_time, parse_date, parse_date_time, IntoDateTime,
};
pub use weekday::DayOfWeek;
