use std::collections::BTreeSet;

use cadence_core::types::{DayTag, TimeLabel};
use serde::{Deserialize, Serialize};

use super::Cycle;

/// One supplement in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementDefinition {
    /// Opaque identifier. Empty until assigned by [`assign_missing_ids`].
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub amount: String,
    pub time: TimeLabel,
    /// Day-mask: weekdays on which the item is eligible at all.
    #[serde(default)]
    pub days: BTreeSet<DayTag>,
    pub cycle: Cycle,
    #[serde(default)]
    pub active: bool,
}

impl SupplementDefinition {
    /// ## Summary
    /// Returns `true` if the day-mask covers all seven weekdays.
    #[must_use]
    pub fn covers_every_day(&self) -> bool {
        DayTag::all().iter().all(|day| self.days.contains(day))
    }

    #[must_use]
    pub fn is_eligible_on(&self, day: DayTag) -> bool {
        self.days.contains(&day)
    }
}

/// ## Summary
/// Assigns a fresh UUID v4 to every definition with an empty id.
///
/// Returns the number of ids assigned.
pub fn assign_missing_ids(definitions: &mut [SupplementDefinition]) -> usize {
    let mut assigned = 0;
    for definition in definitions.iter_mut().filter(|d| d.id.trim().is_empty()) {
        definition.id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(id = %definition.id, name = %definition.name, "Assigned id to definition");
        assigned += 1;
    }
    assigned
}
