use cadence_calendar::error::CalendarResult;
use cadence_calendar::month_days;
use cadence_store::model::SupplementDefinition;
use chrono::NaiveDate;
use serde::Serialize;

use super::day::resolve_day;

/// Per-day summary for a calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub active_count: usize,
    pub names: Vec<String>,
    pub issue_count: usize,
}

/// ## Summary
/// Resolves every day of a month and summarises each one.
///
/// ## Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not 1..=12.
#[tracing::instrument(skip(catalog), fields(definitions = catalog.len()))]
pub fn resolve_month(
    catalog: &[SupplementDefinition],
    year: i32,
    month: u32,
) -> CalendarResult<Vec<DaySummary>> {
    Ok(month_days(year, month)?
        .into_iter()
        .map(|date| {
            let resolution = resolve_day(catalog, date);
            DaySummary {
                date,
                active_count: resolution.active.len(),
                names: resolution.active.iter().map(|d| d.name.clone()).collect(),
                issue_count: resolution.issues.len(),
            }
        })
        .collect())
}
