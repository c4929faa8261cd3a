//! Week identifiers (`2025-[W]13`) and target-week selection.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex_lite::Regex;
use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};
use crate::iso::{date_from_iso_week, start_of_iso_week};

#[expect(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static WEEK_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-\[W\](\d{1,2})$").expect("week identifier pattern is valid")
});

/// An ISO year and week number as named by a week identifier.
///
/// The week number is kept as written; it is not clamped to the number of
/// weeks the year actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

impl IsoWeek {
    #[must_use]
    pub const fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// Returns the ISO week that contains `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// ## Summary
    /// Returns the Monday that starts this week.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if the date cannot be represented.
    pub fn monday(&self) -> CalendarResult<NaiveDate> {
        date_from_iso_week(self.year, self.week)
            .ok_or_else(|| CalendarError::OutOfRange(self.to_string()))
    }
}

impl FromStr for IsoWeek {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::MalformedWeekIdentifier(s.to_string());
        let captures = WEEK_IDENTIFIER.captures(s).ok_or_else(malformed)?;
        let year = captures[1].parse().map_err(|_err| malformed())?;
        let week = captures[2].parse().map_err(|_err| malformed())?;
        Ok(Self { year, week })
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-[W]{:02}", self.year, self.week)
    }
}

/// Where the selected week came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeekSource {
    /// The caller's identifier was well-formed and used as given.
    Requested,
    /// The identifier was missing or malformed; the week after the current
    /// one was used instead.
    NextWeekFallback { requested: Option<String> },
}

/// The week a plan was actually built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSelection {
    pub week: IsoWeek,
    pub monday: NaiveDate,
    pub source: WeekSource,
}

impl WeekSelection {
    /// ## Summary
    /// Selects the target week for `identifier`.
    ///
    /// A well-formed identifier is used directly. Anything else, including no
    /// identifier at all, selects the ISO week following the one containing
    /// `today`; the fallback is recorded in [`WeekSource`].
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if the resolved Monday cannot be
    /// represented.
    pub fn resolve(identifier: Option<&str>, today: NaiveDate) -> CalendarResult<Self> {
        if let Some(raw) = identifier {
            match raw.parse::<IsoWeek>() {
                Ok(week) => {
                    return Ok(Self {
                        week,
                        monday: week.monday()?,
                        source: WeekSource::Requested,
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Falling back to next week");
                }
            }
        }

        let monday = start_of_iso_week(today)
            .checked_add_days(Days::new(7))
            .ok_or_else(|| CalendarError::OutOfRange(today.to_string()))?;
        let week = IsoWeek::containing(monday);
        tracing::debug!(week = %week, "Selected fallback week");

        Ok(Self {
            week,
            monday,
            source: WeekSource::NextWeekFallback {
                requested: identifier.map(String::from),
            },
        })
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, WeekSource::NextWeekFallback { .. })
    }
}
