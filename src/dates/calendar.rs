//! Week and month boundaries on local instants.
//!
//! Everything here is a pure function of its arguments. Weeks start on Sunday.

use crate::constants::DAYS_PER_WEEK;
use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// 23:59:59.999, one millisecond before midnight.
fn last_millisecond() -> NaiveTime {
    NaiveTime::MIN - Duration::milliseconds(1)
}

/// Returns the last millisecond of `date`.
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(last_millisecond())
}

/// Returns 00:00:00.000 on the Sunday of the week containing `instant`.
///
/// # Examples
///
/// ```
/// use daybook::dates::calendar::start_of_week;
/// use chrono::NaiveDate;
///
/// // Wednesday, 14 February 2024
/// let wednesday = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 2, 11).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(start_of_week(&wednesday), sunday);
/// ```
pub fn start_of_week(instant: &NaiveDateTime) -> NaiveDateTime {
    let date = instant.date();
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back))
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Returns 23:59:59.999 on the Saturday of the week containing `instant`.
pub fn end_of_week(instant: &NaiveDateTime) -> NaiveDateTime {
    let sunday = start_of_week(instant).date();
    let saturday = sunday
        .checked_add_days(Days::new((DAYS_PER_WEEK - 1).unsigned_abs()))
        .unwrap_or(NaiveDate::MAX);
    end_of_day(saturday)
}

/// Returns 00:00:00.000 on the first day of the month containing `instant`.
pub fn start_of_month(instant: &NaiveDateTime) -> NaiveDateTime {
    let date = instant.date();
    date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN)
}

/// Returns 23:59:59.999 on the last day of the month containing `instant`.
///
/// The last day is found by moving one month forward from the first of the
/// month and stepping back a single day.
pub fn end_of_month(instant: &NaiveDateTime) -> NaiveDateTime {
    let first = start_of_month(instant).date();
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    end_of_day(last)
}

/// True when both instants fall on the same local calendar day.
pub fn is_same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Returns the calendar day `days` days before `date`.
///
/// Returns `None` when the result would fall before the supported calendar.
pub fn days_before(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days)))
}

/// Whole calendar days from `target` to `today`. Positive for past dates.
pub fn day_distance(today: NaiveDate, target: NaiveDate) -> i64 {
    today.signed_duration_since(target).num_days()
}
