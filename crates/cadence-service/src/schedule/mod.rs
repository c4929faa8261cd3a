//! Per-date resolution of a catalog snapshot.

mod day;
mod month;
pub mod recurrence;

pub use day::{DayResolution, DefinitionIssue, resolve_day};
pub use month::{DaySummary, resolve_month};
pub use recurrence::{Inclusion, ResolutionIssue, is_active_on};
