use futures::future::BoxFuture;
use tokio::sync::Mutex;

use super::{CatalogEdit, CatalogStore, LoadedCatalog};
use crate::error::StoreResult;
use crate::model::SupplementDefinition;

/// Catalog held in memory; used by tests and embedded callers.
#[derive(Default)]
pub struct MemoryCatalogStore {
    definitions: Mutex<Vec<SupplementDefinition>>,
}

impl MemoryCatalogStore {
    #[must_use]
    pub fn new(definitions: Vec<SupplementDefinition>) -> Self {
        Self {
            definitions: Mutex::new(definitions),
        }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self) -> BoxFuture<'_, StoreResult<LoadedCatalog>> {
        Box::pin(async move {
            Ok(LoadedCatalog {
                definitions: self.definitions.lock().await.clone(),
                issues: Vec::new(),
            })
        })
    }

    fn modify<'a>(&'a self, edit: CatalogEdit<'a>) -> BoxFuture<'a, StoreResult<()>> {
        Box::pin(async move {
            let mut guard = self.definitions.lock().await;
            let mut working = guard.clone();
            edit(&mut working)?;
            *guard = working;
            Ok(())
        })
    }
}
