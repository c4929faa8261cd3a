use std::sync::Arc;

use cadence_core::error::CoreError;
use cadence_service::catalog::CatalogService;
use cadence_store::catalog::CatalogStore;
use salvo::async_trait;

use crate::error::AppResult;

/// Makes the catalog store available to downstream handlers.
pub struct CatalogStoreHandler {
    pub store: Arc<dyn CatalogStore>,
}

#[async_trait]
impl salvo::Handler for CatalogStoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the catalog store from the depot, wrapped in a [`CatalogService`].
///
/// ## Errors
/// Returns an error if no catalog store was injected.
pub fn get_catalog_from_depot(depot: &salvo::Depot) -> AppResult<CatalogService> {
    depot
        .obtain::<Arc<dyn CatalogStore>>()
        .cloned()
        .map(CatalogService::new)
        .map_err(|_err| CoreError::InvariantViolation("Catalog store not found in depot").into())
}
