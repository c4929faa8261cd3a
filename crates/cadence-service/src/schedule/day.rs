use cadence_core::types::DayTag;
use cadence_store::model::SupplementDefinition;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::recurrence::{ResolutionIssue, is_active_on};

/// A definition that could not be resolved, and why.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DefinitionIssue {
    pub definition_id: String,
    pub name: String,
    pub issue: ResolutionIssue,
}

/// The definitions due on one date.
#[derive(Debug, Clone, Serialize)]
pub struct DayResolution<'a> {
    pub date: NaiveDate,
    pub weekday: DayTag,
    /// Due definitions, in catalog order.
    pub active: Vec<&'a SupplementDefinition>,
    pub issues: Vec<DefinitionIssue>,
}

/// ## Summary
/// Resolves every definition in `catalog` for `date`.
///
/// A malformed definition is left out of [`DayResolution::active`] and
/// recorded in [`DayResolution::issues`]; it never stops the rest of the
/// catalog from resolving.
#[must_use]
pub fn resolve_day(catalog: &[SupplementDefinition], date: NaiveDate) -> DayResolution<'_> {
    let mut active = Vec::new();
    let mut issues = Vec::new();

    for definition in catalog {
        let inclusion = is_active_on(definition, date);
        tracing::trace!(
            %date,
            name = %definition.name,
            included = inclusion.included,
            "Resolved definition"
        );

        if let Some(issue) = inclusion.issue {
            tracing::warn!(
                %date,
                id = %definition.id,
                name = %definition.name,
                %issue,
                "Definition excluded"
            );
            issues.push(DefinitionIssue {
                definition_id: definition.id.clone(),
                name: definition.name.clone(),
                issue,
            });
        }

        if inclusion.included {
            active.push(definition);
        }
    }

    DayResolution {
        date,
        weekday: DayTag::from(date.weekday()),
        active,
        issues,
    }
}
