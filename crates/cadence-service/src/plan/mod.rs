//! Weekly aggregation of day resolutions into a plan.

mod render;

use std::collections::HashSet;

use cadence_calendar::{WeekSelection, days_of_iso_week};
use cadence_calendar::error::CalendarError;
use cadence_store::model::SupplementDefinition;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::ServiceResult;
use crate::schedule::{DayResolution, DefinitionIssue, resolve_day};

pub use render::render_weekly_report;

/// Everything needed to present one ISO week.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlan<'a> {
    pub selection: WeekSelection,
    /// Resolutions for Monday through Sunday.
    pub days: Vec<DayResolution<'a>>,
    /// Items whose day-mask covers the whole week, sorted by slot then name.
    pub daily: Vec<&'a SupplementDefinition>,
    /// All other items seen during the week, sorted by slot then name.
    pub variable: Vec<&'a SupplementDefinition>,
}

impl WeeklyPlan<'_> {
    /// Distinct issues raised while resolving the week, in first-seen order.
    #[must_use]
    pub fn issues(&self) -> Vec<&DefinitionIssue> {
        let mut seen = HashSet::new();
        self.days
            .iter()
            .flat_map(|day| &day.issues)
            .filter(|issue| seen.insert(*issue))
            .collect()
    }
}

/// ## Summary
/// Builds the plan for the week named by `week_identifier`, relative to the
/// local date.
///
/// ## Errors
/// See [`build_weekly_plan_at`].
pub fn build_weekly_plan<'a>(
    catalog: &'a [SupplementDefinition],
    week_identifier: Option<&str>,
) -> ServiceResult<WeeklyPlan<'a>> {
    build_weekly_plan_at(catalog, week_identifier, Local::now().date_naive())
}

/// ## Summary
/// Builds the plan for the week named by `week_identifier`.
///
/// A missing or malformed identifier selects the ISO week after the one
/// containing `today`. Each item is classified on its first appearance
/// in the week: daily when its day-mask covers all seven weekdays, variable
/// otherwise. Items are keyed by name, so two definitions sharing a name are
/// listed once.
///
/// ## Errors
/// Returns `ServiceError::CalendarError` if the target week cannot be
/// represented.
#[tracing::instrument(skip(catalog), fields(definitions = catalog.len()))]
pub fn build_weekly_plan_at<'a>(
    catalog: &'a [SupplementDefinition],
    week_identifier: Option<&str>,
    today: NaiveDate,
) -> ServiceResult<WeeklyPlan<'a>> {
    let selection = WeekSelection::resolve(week_identifier, today)?;

    let dates = days_of_iso_week(selection.monday);
    if dates.len() != 7 {
        return Err(CalendarError::OutOfRange(selection.week.to_string()).into());
    }
    let days: Vec<_> = dates.into_iter().map(|date| resolve_day(catalog, date)).collect();

    let mut seen = HashSet::new();
    let mut daily = Vec::new();
    let mut variable = Vec::new();
    for definition in days.iter().flat_map(|day| day.active.iter().copied()) {
        if !seen.insert(definition.name.as_str()) {
            continue;
        }
        if definition.covers_every_day() {
            daily.push(definition);
        } else {
            variable.push(definition);
        }
    }

    sort_by_slot(&mut daily);
    sort_by_slot(&mut variable);

    tracing::debug!(
        week = %selection.week,
        fallback = selection.is_fallback(),
        daily = daily.len(),
        variable = variable.len(),
        "Weekly plan built"
    );

    Ok(WeeklyPlan {
        selection,
        days,
        daily,
        variable,
    })
}

fn sort_by_slot(items: &mut [&SupplementDefinition]) {
    items.sort_by(|a, b| {
        a.time
            .slot()
            .rank()
            .cmp(&b.time.slot().rank())
            .then_with(|| a.name.cmp(&b.name))
    });
}
