//! Catalog editing endpoints.

use cadence_core::constants::SUPPLEMENTS_ROUTE_COMPONENT;
use cadence_service::catalog::SupplementDraft;
use cadence_store::catalog::LoadIssue;
use cadence_store::model::SupplementDefinition;
use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Serialize;

use super::response::{render_app_error, render_error};
use crate::catalog_handler::get_catalog_from_depot;


/// ## Summary
/// Supplement list response payload
#[derive(Debug, Serialize)]
pub struct SupplementListResponse {
    pub supplements: Vec<SupplementDefinition>,
    /// Records in the catalog document that could not be read.
    pub skipped_records: Vec<LoadIssue>,
}

async fn parse_draft(req: &mut Request, res: &mut Response) -> Option<SupplementDraft> {
    match req.parse_json::<SupplementDraft>().await {
        Ok(draft) => Some(draft),
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse supplement draft");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            None
        }
    }
}

fn id_param(req: &Request, res: &mut Response) -> Option<String> {
    let id = req.param::<String>("id").filter(|id| !id.trim().is_empty());
    if id.is_none() {
        render_error(res, StatusCode::BAD_REQUEST, "Supplement id is required");
    }
    id
}

/// ## Summary
/// GET /api/supplements - All readable definitions, in catalog order.
///
/// ## Errors
/// Returns HTTP 500 if the catalog cannot be read.
#[handler]
#[tracing::instrument(skip_all)]
async fn list_supplements(depot: &Depot, res: &mut Response) {
    let catalog = match get_catalog_from_depot(depot) {
        Ok(catalog) => catalog,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    match catalog.snapshot().await {
        Ok(snapshot) => {
            res.status_code(StatusCode::OK);
            res.render(Json(SupplementListResponse {
                supplements: snapshot.definitions,
                skipped_records: snapshot.issues,
            }));
        }
        Err(e) => render_app_error(res, &e.into()),
    }
}

/// ## Summary
/// POST /api/supplements - Adds a definition with a freshly assigned id.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid draft.
/// Returns HTTP 500 if the catalog cannot be written.
#[handler]
#[tracing::instrument(skip_all)]
async fn create_supplement(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(draft) = parse_draft(req, res).await else {
        return;
    };

    let result = match get_catalog_from_depot(depot) {
        Ok(catalog) => catalog.create(draft).await.map_err(Into::into),
        Err(e) => Err(e),
    };

    match result {
        Ok(created) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(created));
        }
        Err(e) => render_app_error(res, &e),
    }
}

/// ## Summary
/// GET /api/supplements/{id}
///
/// ## Errors
/// Returns HTTP 404 for an unknown id.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn get_supplement(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = id_param(req, res) else {
        return;
    };

    let result = match get_catalog_from_depot(depot) {
        Ok(catalog) => catalog.get(&id).await.map_err(Into::into),
        Err(e) => Err(e),
    };

    match result {
        Ok(definition) => {
            res.status_code(StatusCode::OK);
            res.render(Json(definition));
        }
        Err(e) => render_app_error(res, &e),
    }
}

/// ## Summary
/// PUT /api/supplements/{id} - Replaces a definition, keeping its id.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid draft.
/// Returns HTTP 404 for an unknown id.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn replace_supplement(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = id_param(req, res) else {
        return;
    };
    let Some(draft) = parse_draft(req, res).await else {
        return;
    };

    let result = match get_catalog_from_depot(depot) {
        Ok(catalog) => catalog.replace(&id, draft).await.map_err(Into::into),
        Err(e) => Err(e),
    };

    match result {
        Ok(definition) => {
            res.status_code(StatusCode::OK);
            res.render(Json(definition));
        }
        Err(e) => render_app_error(res, &e),
    }
}

/// ## Summary
/// DELETE /api/supplements/{id}
///
/// ## Errors
/// Returns HTTP 404 for an unknown id.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn delete_supplement(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = id_param(req, res) else {
        return;
    };

    let result = match get_catalog_from_depot(depot) {
        Ok(catalog) => catalog.delete(&id).await.map_err(Into::into),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_app_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SUPPLEMENTS_ROUTE_COMPONENT)
        .get(list_supplements)
        .post(create_supplement)
        .push(
            Router::with_path("{id}")
                .get(get_supplement)
                .put(replace_supplement)
                .delete(delete_supplement),
        )
}
