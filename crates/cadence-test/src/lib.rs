//! Cadence supplement planner - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `cadence_test::` paths.

pub use cadence_app::app;

pub mod component {
    pub use cadence_calendar as calendar;
    pub use cadence_core::{config, constants, types};
    pub use cadence_service::{catalog, plan, schedule};
    pub use cadence_store as store;

    // Depot handlers from the app crate
    pub mod handlers {
        pub use cadence_app::catalog_handler::CatalogStoreHandler;
        pub use cadence_app::config::ConfigHandler;
    }
}
