//! Calendar arithmetic for ISO-8601 weeks.
//!
//! Everything here operates on calendar dates (`chrono::NaiveDate`), never on
//! timestamps, so daylight-saving transitions cannot shift a day boundary.

pub mod error;
pub mod iso;
pub mod week;

pub use iso::{
    date_from_iso_week, days_of_iso_week, format_iso_week_label, is_before_calendar_day,
    is_same_calendar_day, iso_week_number, month_days, start_of_iso_week, weeks_between,
};
pub use week::{IsoWeek, WeekSelection, WeekSource};
