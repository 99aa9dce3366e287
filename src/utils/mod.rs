//! Date and time helpers.
//!
//! - [`date`] - Weekday classification and business-day arithmetic over dates
//! - [`datetime`] - Formatting, parsing, and epoch/file-time conversion of date-times
//!
//! Everything here is a pure function of its arguments. Helpers that need
//! "today" live on [`crate::calendar::BusinessCalendar`].

pub mod date;
pub mod datetime;
