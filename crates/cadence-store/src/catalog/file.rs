use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use tokio::sync::Mutex;

use super::{CatalogEdit, CatalogStore, LoadedCatalog, parse_catalog, render_catalog};
use crate::error::{StoreError, StoreResult};

/// Catalog stored as a JSON document on disk.
///
/// A missing file reads as an empty catalog and is created on first write.
/// Writes go to a sibling temporary file that is renamed over the catalog, so
/// an interrupted write leaves the previous document in place.
pub struct FileCatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCatalogStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ## Summary
    /// Loads the catalog, treating a missing file as unreadable.
    ///
    /// Used where the catalog is an explicit input rather than an editing
    /// target.
    ///
    /// ## Errors
    /// Returns `StoreError::CatalogUnreadable` if the file does not exist,
    /// cannot be read or is not a JSON array.
    pub async fn load_existing(&self) -> StoreResult<LoadedCatalog> {
        let document = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unreadable(&e))?;
        parse_catalog(&document)
    }

    fn unreadable(&self, err: &std::io::Error) -> StoreError {
        StoreError::CatalogUnreadable(format!("{}: {err}", self.path.display()))
    }

    async fn read(&self) -> StoreResult<LoadedCatalog> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(document) => parse_catalog(&document),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Catalog file missing, using empty catalog");
                Ok(LoadedCatalog::default())
            }
            Err(e) => Err(self.unreadable(&e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "catalog".into(), |name| name.to_string_lossy());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()))
    }

    async fn write(&self, catalog: &LoadedCatalog) -> StoreResult<()> {
        let document = render_catalog(&catalog.definitions, &catalog.issues)?;
        let temp = self.temp_path();
        let failed = |e: std::io::Error| StoreError::WriteFailed(format!("{}: {e}", self.path.display()));

        tokio::fs::write(&temp, document).await.map_err(failed)?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                tracing::warn!(path = %temp.display(), error = %cleanup, "Failed to remove temporary catalog");
            }
            return Err(failed(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            definitions = catalog.definitions.len(),
            "Catalog written"
        );
        Ok(())
    }
}

impl CatalogStore for FileCatalogStore {
    fn load(&self) -> BoxFuture<'_, StoreResult<LoadedCatalog>> {
        Box::pin(self.read())
    }

    fn modify<'a>(&'a self, edit: CatalogEdit<'a>) -> BoxFuture<'a, StoreResult<()>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;
            let mut catalog = self.read().await?;
            edit(&mut catalog.definitions)?;
            self.write(&catalog).await
        })
    }
}
