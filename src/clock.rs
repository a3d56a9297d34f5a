//! Sources of "now" for the date helpers.
//!
//! Every operation that depends on the current day receives its time through a
//! [`Clock`], so the calendar logic can be driven by a [`FixedClock`] in tests
//! and by the [`SystemClock`] in the binary.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Provides the current local instant.
///
/// The returned value holds wall-clock components in the caller's local
/// timezone. It is never converted to or from UTC by the date helpers.
pub trait Clock: Send + Sync {
    /// Returns the current local instant.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
///
/// # Examples
///
/// ```
/// use daybook::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let clock = FixedClock::at_midnight(day);
/// assert_eq!(clock.now().date(), day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    pub fn new(instant: NaiveDateTime) -> Self {
        FixedClock(instant)
    }

    /// Creates a clock frozen at local midnight of `date`.
    pub fn at_midnight(date: NaiveDate) -> Self {
        FixedClock(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
