//! The `YYYY-MM-DD` local date string and its parsing rules.

use crate::constants::DATE_SEPARATOR;
use crate::errors::DateError;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A calendar day in the caller's local timezone.
///
/// This is the canonical exchange format of the crate. It displays and
/// serializes as a zero-padded `YYYY-MM-DD` string, and can only be built from
/// a string that splits into three numeric components.
///
/// # Examples
///
/// ```
/// use daybook::dates::LocalDate;
///
/// let date = LocalDate::parse("2024-12-13").unwrap();
/// assert_eq!(date.to_string(), "2024-12-13");
///
/// // Out-of-range days roll into the next month
/// let rolled = LocalDate::parse("2023-02-30").unwrap();
/// assert_eq!(rolled.to_string(), "2023-03-02");
///
/// assert!(LocalDate::parse("Dec 13").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// The string must split on `-` into exactly three non-empty runs of ASCII
    /// digits. Month and day values outside their calendar range are rolled
    /// over rather than rejected: month 13 is January of the following year,
    /// February 30th is early March, day 0 is the last day of the previous
    /// month.
    ///
    /// # Errors
    ///
    /// Returns `DateError::Malformed` if the string is not three numeric
    /// components, and `DateError::OutOfRange` if the rolled-over date cannot
    /// be represented.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let (year, month, day) = split_components(input)?;
        let date = roll_over(year, month, day).ok_or_else(|| DateError::OutOfRange {
            input: input.to_string(),
        })?;
        debug!("Parsed local date {} from {:?}", date, input);
        Ok(LocalDate(date))
    }

    /// Wraps an already valid calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        LocalDate(date)
    }

    /// Takes the calendar day of a local instant, ignoring its time of day.
    pub fn from_instant(instant: &NaiveDateTime) -> Self {
        LocalDate(instant.date())
    }

    /// Returns the underlying calendar date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns local midnight at the start of this day.
    pub fn to_instant(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for LocalDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocalDate::parse(s)
    }
}

impl TryFrom<String> for LocalDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LocalDate::parse(&value)
    }
}

impl From<LocalDate> for String {
    fn from(date: LocalDate) -> Self {
        date.to_string()
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        LocalDate(date)
    }
}

/// Parses a local date string into local midnight of that day.
///
/// # Errors
///
/// See [`LocalDate::parse`].
///
/// # Examples
///
/// ```
/// use daybook::dates::parse_local_date;
///
/// let midnight = parse_local_date("2024-02-29").unwrap();
/// assert_eq!(midnight.to_string(), "2024-02-29 00:00:00");
/// ```
pub fn parse_local_date(input: &str) -> Result<NaiveDateTime, DateError> {
    LocalDate::parse(input).map(|date| date.to_instant())
}

/// Formats the calendar day of a local instant as `YYYY-MM-DD`.
pub fn to_local_date_string(instant: &NaiveDateTime) -> String {
    LocalDate::from_instant(instant).to_string()
}

fn split_components(input: &str) -> Result<(i64, i64, i64), DateError> {
    let malformed = |reason: String| DateError::Malformed {
        input: input.to_string(),
        reason,
    };

    let parts: Vec<&str> = input.split(DATE_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(malformed(format!(
            "expected three components separated by '{}', found {}",
            DATE_SEPARATOR,
            parts.len()
        )));
    }

    let mut values = [0i64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!("component '{}' is not a number", part)));
        }
        *slot = part
            .parse()
            .map_err(|_| malformed(format!("component '{}' is too large", part)))?;
    }

    Ok((values[0], values[1], values[2]))
}

/// Builds a date from components that may overflow their calendar range.
fn roll_over(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let total_months = year.checked_mul(12)?.checked_add(month - 1)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = day - 1;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}
