//! Clock abstraction for "today"
//!
//! Business-day helpers that default to the current date read it through a
//! [`Clock`], so tests can pin the date with [`FixedClock`] instead of
//! depending on the wall clock.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current calendar day.
pub trait Clock {
    /// The current local calendar day.
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Reads the system wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Freeze the clock at midnight of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(crate::utils::datetime::date_time_from_date(date))
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.date()
    }
}
