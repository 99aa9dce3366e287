//! Business-day operations relative to today
//!
//! [`BusinessCalendar`] wraps the pure helpers in [`crate::utils::date`] and
//! supplies the date argument from a [`Clock`], reading it once per call.

use crate::clock::{Clock, SystemClock};
use crate::error::DateError;
use crate::utils::date;
use chrono::NaiveDate;

/// Business-day arithmetic anchored on the clock's current day.
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar<C: Clock = SystemClock> {
    clock: C,
}

impl BusinessCalendar<SystemClock> {
    /// Calendar backed by the system wall clock
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> BusinessCalendar<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The clock's current day
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Business day before today
    pub fn previous_business_day(&self) -> NaiveDate {
        date::previous_business_day(self.today())
    }

    /// Business day after today
    pub fn next_business_day(&self) -> NaiveDate {
        date::next_business_day(self.today())
    }

    /// First business day of the current month
    pub fn first_business_day_of_month(&self) -> NaiveDate {
        date::first_business_day_of_month(self.today())
    }

    /// The `n`th business day of the current month
    ///
    /// # Errors
    /// * `DateError::InvalidArgument` - `n` is zero or exceeds the month's business days
    pub fn nth_business_day_of_month(&self, n: u32) -> Result<NaiveDate, DateError> {
        date::nth_business_day_of_month(n, self.today())
    }
}
