mod app_specific;
mod plan;
pub mod response;
mod supplements;

use salvo::Router;

// Re-export route constants from core
pub use cadence_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, PLAN_ROUTE_COMPONENT, PLAN_ROUTE_PREFIX,
    SUPPLEMENTS_ROUTE_COMPONENT, SUPPLEMENTS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
///
/// ## Errors
/// Returns an error if any child route fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(plan::routes())
        .push(supplements::routes()))
}
