//! Catalog document parsing and storage backends.

mod file;
mod memory;

use futures::future::BoxFuture;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::model::SupplementDefinition;

pub use file::FileCatalogStore;
pub use memory::MemoryCatalogStore;

/// A record that could not be read as a definition.
///
/// The raw value is kept so saving the catalog does not drop it.
#[derive(Debug, Clone, Serialize)]
pub struct LoadIssue {
    pub index: usize,
    pub message: String,
    #[serde(skip)]
    pub raw: serde_json::Value,
}

/// A catalog snapshot together with the records that were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub definitions: Vec<SupplementDefinition>,
    pub issues: Vec<LoadIssue>,
}

/// An in-place edit applied to the catalog under the store's write lock.
pub type CatalogEdit<'a> =
    Box<dyn FnOnce(&mut Vec<SupplementDefinition>) -> StoreResult<()> + Send + 'a>;

pub trait CatalogStore: Send + Sync {
    /// Loads a snapshot of the catalog.
    fn load(&self) -> BoxFuture<'_, StoreResult<LoadedCatalog>>;

    /// Loads the catalog, applies `edit` and writes the result back.
    ///
    /// Edits are serialised; nothing is written if `edit` fails.
    fn modify<'a>(&'a self, edit: CatalogEdit<'a>) -> BoxFuture<'a, StoreResult<()>>;
}

/// ## Summary
/// Parses a catalog document.
///
/// The document must be a JSON array. Elements that are not valid definitions
/// are skipped and reported as [`LoadIssue`]s. A blank document is an empty
/// catalog.
///
/// ## Errors
/// Returns `StoreError::CatalogUnreadable` if the document is not a JSON array.
pub fn parse_catalog(document: &str) -> StoreResult<LoadedCatalog> {
    if document.trim().is_empty() {
        return Ok(LoadedCatalog::default());
    }

    let records: Vec<serde_json::Value> = serde_json::from_str(document)
        .map_err(|e| StoreError::CatalogUnreadable(e.to_string()))?;

    let mut catalog = LoadedCatalog::default();
    for (index, raw) in records.into_iter().enumerate() {
        match serde_json::from_value::<SupplementDefinition>(raw.clone()) {
            Ok(definition) => catalog.definitions.push(definition),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed catalog record");
                catalog.issues.push(LoadIssue {
                    index,
                    message: e.to_string(),
                    raw,
                });
            }
        }
    }

    tracing::debug!(
        definitions = catalog.definitions.len(),
        skipped = catalog.issues.len(),
        "Parsed catalog"
    );
    Ok(catalog)
}

/// One element of a rendered catalog document.
#[derive(Serialize)]
#[serde(untagged)]
enum Record<'a> {
    Definition(&'a SupplementDefinition),
    Skipped(&'a serde_json::Value),
}

/// ## Summary
/// Serialises definitions as a pretty-printed JSON array.
///
/// Records that were skipped on load are written back verbatim at the
/// position they were read from, or at the end if the catalog has since
/// shrunk below it.
///
/// ## Errors
/// Returns `StoreError::SerializationError` if serialisation fails.
pub fn render_catalog(
    definitions: &[SupplementDefinition],
    skipped: &[LoadIssue],
) -> StoreResult<String> {
    let mut records: Vec<Record<'_>> = definitions.iter().map(Record::Definition).collect();

    let mut skipped: Vec<&LoadIssue> = skipped.iter().collect();
    skipped.sort_by_key(|issue| issue.index);
    for issue in skipped {
        records.insert(issue.index.min(records.len()), Record::Skipped(&issue.raw));
    }

    Ok(serde_json::to_string_pretty(&records)?)
}
