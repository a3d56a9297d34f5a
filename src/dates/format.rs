//! Human-readable date strings, fixed to the en-US convention.

use super::calendar::day_distance;
use super::LocalDate;
use crate::constants::{
    DISPLAY_FORMAT, LABEL_TODAY, LABEL_YESTERDAY, RELATIVE_LABEL_MAX_DAYS, SHORT_DISPLAY_FORMAT,
};
use chrono::{Datelike, NaiveDate};

/// Formats a date as abbreviated month, day and year, e.g. `"Dec 13, 2024"`.
///
/// # Examples
///
/// ```
/// use daybook::dates::{format::format_display_date, LocalDate};
///
/// let date = LocalDate::parse("2024-12-13").unwrap();
/// assert_eq!(format_display_date(&date), "Dec 13, 2024");
/// ```
pub fn format_display_date(date: &LocalDate) -> String {
    date.naive().format(DISPLAY_FORMAT).to_string()
}

/// Like [`format_display_date`], but drops the year when it is `current_year`.
pub fn format_short_display_date(date: &LocalDate, current_year: i32) -> String {
    if date.naive().year() == current_year {
        date.naive().format(SHORT_DISPLAY_FORMAT).to_string()
    } else {
        format_display_date(date)
    }
}

/// Describes `date` relative to `today`.
///
/// Same day is `"Today"`, the day before is `"Yesterday"`, up to a week back
/// is `"N days ago"` and up to a week ahead is `"In N days"`. Anything further
/// away falls back to [`format_short_display_date`].
pub fn relative_date_label(date: &LocalDate, today: NaiveDate) -> String {
    let distance = day_distance(today, date.naive());
    match distance {
        0 => LABEL_TODAY.to_string(),
        1 => LABEL_YESTERDAY.to_string(),
        d if d > 0 && d <= RELATIVE_LABEL_MAX_DAYS => format!("{} days ago", d),
        d if d < 0 && d >= -RELATIVE_LABEL_MAX_DAYS => format!("In {} days", d.abs()),
        _ => format_short_display_date(date, today.year()),
    }
}
