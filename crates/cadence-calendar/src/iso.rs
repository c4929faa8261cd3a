//! ISO-8601 week arithmetic over calendar dates.

use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use crate::error::{CalendarError, CalendarResult};

/// ## Summary
/// Returns the ISO-8601 week number (1..=53) of `date`.
#[must_use]
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// ## Summary
/// Returns the Monday of the ISO week containing `date`.
///
/// Saturates at `NaiveDate::MIN` for dates in chrono's first partial week.
#[must_use]
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// ## Summary
/// Returns the Monday of ISO week `week` in ISO year `year`.
///
/// The week number is not range-checked: week 0 is the week before week 1
/// and week 53 of a 52-week year is week 1 of the following year. This keeps
/// the "next week" arithmetic total across year boundaries.
///
/// Returns `None` if the result is outside chrono's representable range.
#[must_use]
pub fn date_from_iso_week(year: i32, week: u32) -> Option<NaiveDate> {
    // Jan 4th always falls in ISO week 1.
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let week1 = start_of_iso_week(jan4);
    let offset = TimeDelta::try_days((i64::from(week) - 1) * 7)?;
    week1.checked_add_signed(offset)
}

/// ## Summary
/// Returns the signed number of whole weeks between the ISO week starts of
/// `a` and `b` (positive when `a` is later).
#[must_use]
pub fn weeks_between(a: NaiveDate, b: NaiveDate) -> i64 {
    start_of_iso_week(a)
        .signed_duration_since(start_of_iso_week(b))
        .num_days()
        / 7
}

/// ## Summary
/// Returns `true` if both values fall on the same calendar day.
///
/// Accepts any `Datelike`, so timestamps compare by their date part only.
#[must_use]
pub fn is_same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    calendar_key(a) == calendar_key(b)
}

/// ## Summary
/// Returns `true` if `a` falls on a strictly earlier calendar day than `b`.
#[must_use]
pub fn is_before_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    calendar_key(a) < calendar_key(b)
}

fn calendar_key<D: Datelike>(date: &D) -> (i32, u32) {
    (date.year(), date.ordinal())
}

/// ## Summary
/// Formats the ISO week containing `date` as `<iso-year>-[W]<2-digit week>`.
///
/// The ISO week-year is used, so 2024-12-30 formats as `2025-[W]01`.
#[must_use]
pub fn format_iso_week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-[W]{:02}", iso.year(), iso.week())
}

/// ## Summary
/// Returns the seven dates (Monday through Sunday) of the ISO week containing `date`.
#[must_use]
pub fn days_of_iso_week(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_iso_week(date).iter_days().take(7).collect()
}

/// ## Summary
/// Returns every calendar day of the given month, in order.
///
/// ## Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not 1..=12 or the year
/// is out of range.
pub fn month_days(year: i32, month: u32) -> CalendarResult<Vec<NaiveDate>> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth { year, month })?;
    Ok(first
        .iter_days()
        .take_while(|day| day.month() == month)
        .collect())
}
