//! Local-timezone calendar dates.
//!
//! Dates travel through the application as `YYYY-MM-DD` strings anchored to
//! the user's local timezone, never UTC. This module parses and produces those
//! strings ([`LocalDate`]), computes week and month boundaries
//! ([`calendar`]), formats them for people ([`format`]) and answers questions
//! relative to "today" through [`DateUtils`], which reads the current instant
//! from an injected [`Clock`].

pub mod calendar;
pub mod format;
mod local_date;


pub use local_date::{parse_local_date, to_local_date_string, LocalDate};

use crate::clock::{Clock, SystemClock};
use crate::errors::DateError;
use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

/// Date helpers bound to a clock.
///
/// # Examples
///
/// ```
/// use daybook::clock::FixedClock;
/// use daybook::dates::{DateUtils, LocalDate};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let utils = DateUtils::new(FixedClock::at_midnight(today));
///
/// assert_eq!(utils.current_local_date().to_string(), "2024-02-15");
///
/// let leap_day = LocalDate::parse("2024-02-29").unwrap();
/// assert!(utils.is_this_month(&leap_day));
/// assert_eq!(utils.relative_date_label(&leap_day), "Feb 29");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateUtils<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> DateUtils<C> {
    /// Creates date helpers that read "now" from `clock`.
    pub fn new(clock: C) -> Self {
        DateUtils { clock }
    }

    /// The current local instant.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Today's date in the local timezone.
    pub fn current_local_date(&self) -> LocalDate {
        LocalDate::from_instant(&self.now())
    }

    /// Midnight on the Sunday starting the current week.
    pub fn start_of_current_week(&self) -> NaiveDateTime {
        calendar::start_of_week(&self.now())
    }

    /// Midnight on the first day of the current month.
    pub fn start_of_current_month(&self) -> NaiveDateTime {
        calendar::start_of_month(&self.now())
    }

    /// The date `days` calendar days before today.
    ///
    /// # Errors
    ///
    /// Returns `DateError::OutOfRange` if the result would fall before the
    /// supported calendar.
    pub fn days_ago(&self, days: u32) -> Result<LocalDate, DateError> {
        let today = self.current_local_date();
        calendar::days_before(today.naive(), days)
            .map(LocalDate::from_naive)
            .ok_or_else(|| DateError::OutOfRange {
                input: format!("{} days before {}", days, today),
            })
    }

    /// Display form of `date`, without the year when it is the current year.
    pub fn format_short_display_date(&self, date: &LocalDate) -> String {
        format::format_short_display_date(date, self.now().year())
    }

    /// "Today", "Yesterday", "N days ago", "In N days" or a short date.
    pub fn relative_date_label(&self, date: &LocalDate) -> String {
        let label = format::relative_date_label(date, self.now().date());
        debug!("Relative label for {}: {}", date, label);
        label
    }

    /// True if `date` is today's local date.
    pub fn is_today(&self, date: &LocalDate) -> bool {
        *date == self.current_local_date()
    }

    /// True if `date` is exactly today's `YYYY-MM-DD` string.
    ///
    /// A plain string comparison: unpadded or rolled-over spellings of today
    /// such as `2024-3-1` or `2024-02-30` do not match.
    pub fn is_today_str(&self, date: &str) -> bool {
        date == self.current_local_date().to_string()
    }

    /// True if `date` falls in the current Sunday-to-Saturday week.
    pub fn is_this_week(&self, date: &LocalDate) -> bool {
        let now = self.now();
        let instant = date.to_instant();
        instant >= calendar::start_of_week(&now) && instant <= calendar::end_of_week(&now)
    }

    /// True if `date` falls in the current calendar month.
    pub fn is_this_month(&self, date: &LocalDate) -> bool {
        let now = self.now();
        let instant = date.to_instant();
        instant >= calendar::start_of_month(&now) && instant <= calendar::end_of_month(&now)
    }
}
