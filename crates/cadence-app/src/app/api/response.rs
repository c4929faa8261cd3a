//! Shared JSON error payloads and status mapping.

use cadence_calendar::error::CalendarError;
use cadence_core::error::CoreError;
use cadence_service::error::ServiceError;
use cadence_store::error::StoreError;
use salvo::http::StatusCode;
use salvo::{Response, writing::Json};
use serde::Serialize;

use crate::error::AppError;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Writes a status code and `{ "error": message }` body.
pub fn render_error(res: &mut Response, status: StatusCode, message: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.into(),
    }));
}

/// ## Summary
/// Maps an application error onto an HTTP status.
#[must_use]
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::ServiceError(ServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
        AppError::ServiceError(ServiceError::StoreError(store))
        | AppError::StoreError(store) => match store {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::CatalogUnreadable(_)
            | StoreError::WriteFailed(_)
            | StoreError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
        AppError::ServiceError(ServiceError::CalendarError(calendar))
        | AppError::CalendarError(calendar) => match calendar {
            CalendarError::InvalidMonth { .. } | CalendarError::MalformedWeekIdentifier(_) => {
                StatusCode::BAD_REQUEST
            }
            CalendarError::OutOfRange(_) => StatusCode::UNPROCESSABLE_ENTITY,
        },
        AppError::CoreError(CoreError::InvariantViolation(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// ## Summary
/// Logs `err` and renders it with the status from [`status_for`].
pub fn render_app_error(res: &mut Response, err: &AppError) {
    let status = status_for(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "Request rejected");
    }
    render_error(res, status, err.to_string());
}
