//! Catalog editing on top of a [`CatalogStore`].

use std::collections::BTreeSet;
use std::sync::Arc;

use cadence_core::types::{DayTag, TimeLabel};
use cadence_store::catalog::{CatalogStore, LoadedCatalog};
use cadence_store::error::StoreError;
use cadence_store::model::{Cycle, SupplementDefinition, WeekCount, assign_missing_ids};
use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};
use crate::schedule::recurrence::parse_start_date;

/// A definition as submitted by an editor, without an id.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplementDraft {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    pub time: TimeLabel,
    #[serde(default)]
    pub days: BTreeSet<DayTag>,
    pub cycle: Cycle,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl SupplementDraft {
    fn into_definition(self, id: String) -> SupplementDefinition {
        SupplementDefinition {
            id,
            name: self.name.trim().to_string(),
            amount: self.amount,
            time: self.time,
            days: self.days,
            cycle: self.cycle,
            active: self.active,
        }
    }
}

/// ## Summary
/// Checks a draft before it is written to the catalog.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` if the name is blank, or if a
/// cyclic draft lacks a valid start date, a positive on-week count or a
/// numeric off-week count.
pub fn validate_draft(draft: &SupplementDraft) -> ServiceResult<()> {
    if draft.name.trim().is_empty() {
        return Err(ServiceError::ValidationError("name must not be empty".to_string()));
    }

    if let Cycle::Cyclic {
        start_date,
        on_weeks,
        off_weeks,
        ..
    } = &draft.cycle
    {
        if start_date.as_deref().and_then(parse_start_date).is_none() {
            return Err(ServiceError::ValidationError(
                "cyclic schedules need a start date (YYYY-MM-DD)".to_string(),
            ));
        }
        if !on_weeks.as_ref().and_then(WeekCount::value).is_some_and(|on| on > 0) {
            return Err(ServiceError::ValidationError(
                "on_weeks must be a whole number greater than zero".to_string(),
            ));
        }
        if off_weeks.as_ref().and_then(WeekCount::value).is_none() {
            return Err(ServiceError::ValidationError(
                "off_weeks must be a whole number".to_string(),
            ));
        }
    }

    Ok(())
}

/// Editing operations over a shared catalog store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// ## Summary
    /// Loads the current catalog, including the records that were skipped.
    ///
    /// ## Errors
    /// Returns `ServiceError::StoreError` if the catalog cannot be read.
    pub async fn snapshot(&self) -> ServiceResult<LoadedCatalog> {
        Ok(self.store.load().await?)
    }

    /// ## Errors
    /// Returns `ServiceError::StoreError` if the catalog cannot be read.
    pub async fn list(&self) -> ServiceResult<Vec<SupplementDefinition>> {
        Ok(self.snapshot().await?.definitions)
    }

    /// ## Errors
    /// Returns `StoreError::NotFound` if no definition has `id`.
    pub async fn get(&self, id: &str) -> ServiceResult<SupplementDefinition> {
        self.list()
            .await?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()).into())
    }

    /// ## Summary
    /// Validates `draft`, gives it a fresh id and appends it to the catalog.
    ///
    /// ## Errors
    /// Returns a validation error for a bad draft, or a store error if the
    /// catalog cannot be read or written.
    #[tracing::instrument(skip_all, fields(name = %draft.name))]
    pub async fn create(&self, draft: SupplementDraft) -> ServiceResult<SupplementDefinition> {
        validate_draft(&draft)?;
        let definition = draft.into_definition(uuid::Uuid::new_v4().to_string());
        let stored = definition.clone();

        self.store
            .modify(Box::new(move |defs: &mut Vec<SupplementDefinition>| {
                defs.push(stored);
                Ok(())
            }))
            .await?;

        tracing::info!(id = %definition.id, "Supplement created");
        Ok(definition)
    }

    /// ## Summary
    /// Replaces the definition with `id`, keeping the id.
    ///
    /// ## Errors
    /// Returns a validation error for a bad draft, `StoreError::NotFound` for
    /// an unknown id, or a store error if the catalog cannot be written.
    #[tracing::instrument(skip(self, draft))]
    pub async fn replace(
        &self,
        id: &str,
        draft: SupplementDraft,
    ) -> ServiceResult<SupplementDefinition> {
        validate_draft(&draft)?;
        let definition = draft.into_definition(id.to_string());
        let stored = definition.clone();

        self.store
            .modify(Box::new(move |defs: &mut Vec<SupplementDefinition>| {
                let slot = defs
                    .iter_mut()
                    .find(|d| d.id == stored.id)
                    .ok_or_else(|| StoreError::NotFound(stored.id.clone()))?;
                *slot = stored;
                Ok(())
            }))
            .await?;

        tracing::info!("Supplement replaced");
        Ok(definition)
    }

    /// ## Errors
    /// Returns `StoreError::NotFound` for an unknown id, or a store error if
    /// the catalog cannot be written.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let target = id.to_string();
        self.store
            .modify(Box::new(move |defs: &mut Vec<SupplementDefinition>| {
                let before = defs.len();
                defs.retain(|d| d.id != target);
                if defs.len() == before {
                    return Err(StoreError::NotFound(target));
                }
                Ok(())
            }))
            .await?;

        tracing::info!("Supplement deleted");
        Ok(())
    }

    /// ## Summary
    /// Gives every definition without an id a fresh one.
    ///
    /// Returns the number of ids assigned. The catalog is only rewritten when
    /// that number is non-zero.
    ///
    /// ## Errors
    /// Returns a store error if the catalog cannot be read or written.
    pub async fn ensure_ids(&self) -> ServiceResult<usize> {
        let catalog = self.snapshot().await?;
        if catalog.definitions.iter().all(|d| !d.id.trim().is_empty()) {
            return Ok(0);
        }

        let mut assigned = 0;
        let counter = &mut assigned;
        self.store
            .modify(Box::new(move |defs: &mut Vec<SupplementDefinition>| {
                *counter = assign_missing_ids(defs);
                Ok(())
            }))
            .await?;

        tracing::info!(assigned, "Assigned missing supplement ids");
        Ok(assigned)
    }
}
