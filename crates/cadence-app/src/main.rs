use std::sync::Arc;

use cadence_app::app::api::routes;
use cadence_app::catalog_handler::CatalogStoreHandler;
use cadence_app::config::ConfigHandler;
use cadence_core::config::load_config;
use cadence_service::catalog::CatalogService;
use cadence_store::catalog::{CatalogStore, FileCatalogStore};
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Cadence supplement planner");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store: Arc<dyn CatalogStore> = Arc::new(FileCatalogStore::new(&config.catalog.path));

    // Records written by hand may lack ids; the editing API addresses by id.
    match CatalogService::new(Arc::clone(&store)).ensure_ids().await {
        Ok(0) => {}
        Ok(assigned) => tracing::info!(assigned, "Assigned ids to catalog records"),
        Err(e) => {
            tracing::warn!(error = %e, path = %config.catalog.path, "Catalog could not be prepared");
        }
    }

    tracing::info!(path = %config.catalog.path, "Catalog store ready");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .hoop(CatalogStoreHandler { store })
        .push(routes()?);

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
