//! HTTP handlers for the Kepmen reference catalog (read-only).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::domain_error_response;
use crate::adapters::http::planning::dto::RecordResponse;
use crate::application::service::PlanningService;
use crate::domain::hierarchy::HierarchyLevel;

#[derive(Clone)]
pub struct ReferenceHandlers {
    service: Arc<PlanningService>,
}

impl ReferenceHandlers {
    pub fn new(service: Arc<PlanningService>) -> Self {
        Self { service }
    }
}

/// GET /api/reference/:level - Kepmen rows for a level
pub async fn list_reference(
    State(handlers): State<ReferenceHandlers>,
    Path(level): Path<String>,
) -> Response {
    let level = HierarchyLevel::parse_lossy(&level);

    match handlers.service.reference_options(level).await {
        Ok(rows) => {
            let response: Vec<RecordResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e),
    }
}
