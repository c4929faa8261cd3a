//! Decides whether a single definition is due on a given date.

use cadence_calendar::{is_before_calendar_day, weeks_between};
use cadence_core::types::DayTag;
use cadence_store::model::{Cycle, SupplementDefinition, WeekCount};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;

/// A data-quality problem that excluded a definition from resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionIssue {
    #[error("start date is missing or not a valid calendar date")]
    InvalidStartDate,
    #[error("on/off week counts are missing, malformed or add up to zero")]
    InvalidCycleLength,
}

/// Outcome of [`is_active_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inclusion {
    pub included: bool,
    pub issue: Option<ResolutionIssue>,
}

impl Inclusion {
    const INCLUDED: Self = Self {
        included: true,
        issue: None,
    };

    const EXCLUDED: Self = Self {
        included: false,
        issue: None,
    };

    const fn failed(issue: ResolutionIssue) -> Self {
        Self {
            included: false,
            issue: Some(issue),
        }
    }

    const fn when(included: bool) -> Self {
        if included { Self::INCLUDED } else { Self::EXCLUDED }
    }
}

/// ## Summary
/// Parses a cycle start date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (the date part in the
/// timestamp's own offset is used).
#[must_use]
pub fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// ## Summary
/// Decides whether `definition` is due on `date`.
///
/// Checks, in order: the active flag, the day-mask, then the cycle. For a
/// cyclic definition the phase is the number of whole ISO weeks between the
/// week of `date` and the week of the start date, taken modulo the cycle
/// length; the item is due while the phase is inside the "on" block. A
/// non-repeating cycle ends once a full cycle has elapsed.
///
/// Malformed cycle data excludes the definition and is reported through
/// [`Inclusion::issue`]; this function never fails.
#[must_use]
pub fn is_active_on(definition: &SupplementDefinition, date: NaiveDate) -> Inclusion {
    if !definition.active {
        return Inclusion::EXCLUDED;
    }

    if !definition.is_eligible_on(DayTag::from(date.weekday())) {
        return Inclusion::EXCLUDED;
    }

    let Cycle::Cyclic {
        start_date,
        on_weeks,
        off_weeks,
        repeat,
    } = &definition.cycle
    else {
        return Inclusion::INCLUDED;
    };

    let Some(start) = start_date.as_deref().and_then(parse_start_date) else {
        return Inclusion::failed(ResolutionIssue::InvalidStartDate);
    };

    if is_before_calendar_day(&date, &start) {
        return Inclusion::EXCLUDED;
    }

    let (Some(on), Some(off)) = (week_count(on_weeks.as_ref()), week_count(off_weeks.as_ref()))
    else {
        return Inclusion::failed(ResolutionIssue::InvalidCycleLength);
    };

    let cycle_length = on + off;
    if cycle_length <= 0 {
        return Inclusion::failed(ResolutionIssue::InvalidCycleLength);
    }

    let elapsed = weeks_between(date, start);
    if !repeat && elapsed >= cycle_length {
        return Inclusion::EXCLUDED;
    }

    Inclusion::when(elapsed.rem_euclid(cycle_length) < on)
}

fn week_count(count: Option<&WeekCount>) -> Option<i64> {
    count.and_then(WeekCount::value).map(i64::from)
}
