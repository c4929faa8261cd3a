//! Catalog record types.
//!
//! Field names and nesting match the catalog document exactly:
//! `{id, name, amount, time, days, cycle: {type, start_date, on_weeks, off_weeks, repeat}, active}`.

mod cycle;
mod supplement;

pub use cycle::{Cycle, WeekCount};
pub use supplement::{SupplementDefinition, assign_missing_ids};
