//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with dto/handlers/routes; `api_router`
//! assembles the whole API surface for the service binary.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};

use crate::application::service::PlanningService;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Notifier;

pub mod dashboard;
pub mod planning;
pub mod reference;

pub use dashboard::{dashboard_routes, DashboardHandlers};
pub use planning::{planning_routes, PlanningHandlers};
pub use reference::{reference_routes, ReferenceHandlers};

/// Maps a domain error to an HTTP response.
///
/// Missing rows are 404, presence failures 400, everything else 500. The
/// body carries the error code and message.
pub(crate) fn domain_error_response(e: &DomainError) -> Response {
    let status = match e.code {
        ErrorCode::RecordNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed | ErrorCode::EmptyField => StatusCode::BAD_REQUEST,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = planning::dto::ErrorResponse {
        code: e.code.to_string(),
        message: e.message.clone(),
    };
    (status, Json(body)).into_response()
}

/// The full API router.
pub fn api_router(service: Arc<PlanningService>, notifier: Arc<dyn Notifier>) -> Router {
    Router::new()
        .nest(
            "/api/planning",
            planning_routes(PlanningHandlers::new(service.clone(), notifier)),
        )
        .nest(
            "/api/reference",
            reference_routes(ReferenceHandlers::new(service.clone())),
        )
        .nest(
            "/api/dashboard",
            dashboard_routes(DashboardHandlers::new(service)),
        )
}
