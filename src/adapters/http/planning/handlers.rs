//! HTTP handlers for the planning CRUD endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::domain_error_response;
use crate::application::service::PlanningService;
use crate::domain::foundation::RecordId;
use crate::domain::hierarchy::{DatasetKind, HierarchyLevel};
use crate::ports::{Notifier, Toast};

use super::dto::{
    BatchDeleteRequest, BatchDeleteResponse, ErrorResponse, RecordResponse, ResolveParentQuery,
    ResolveParentResponse, SaveRecordRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PlanningHandlers {
    service: Arc<PlanningService>,
    notifier: Arc<dyn Notifier>,
}

impl PlanningHandlers {
    pub fn new(service: Arc<PlanningService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { service, notifier }
    }
}

/// The editable datasets exposed over HTTP. The Kepmen catalog is
/// read-only and has its own routes.
fn parse_kind(kind: &str) -> Result<DatasetKind, Response> {
    match kind {
        "master" => Ok(DatasetKind::Master),
        "renstra" => Ok(DatasetKind::StrategicPlan),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Unknown dataset: {}",
                kind
            ))),
        )
            .into_response()),
    }
}

fn parse_id(id: &str) -> Result<RecordId, Response> {
    id.parse::<RecordId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid row id")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/planning/:kind/:level - Rows ordered by code
pub async fn list_records(
    State(handlers): State<PlanningHandlers>,
    Path((kind, level)): Path<(String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let level = HierarchyLevel::parse_lossy(&level);

    match handlers.service.list(kind, level).await {
        Ok(rows) => {
            let response: Vec<RecordResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            handlers.notifier.notify(Toast::error("Failed to load data"));
            domain_error_response(&e)
        }
    }
}

/// POST /api/planning/:kind/:level - Create a row
pub async fn create_record(
    State(handlers): State<PlanningHandlers>,
    Path((kind, level)): Path<(String, String)>,
    Json(req): Json<SaveRecordRequest>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let level = HierarchyLevel::parse_lossy(&level);

    match handlers.service.create(kind, level, req.into()).await {
        Ok(record) => {
            handlers
                .notifier
                .notify(Toast::success("Item created successfully"));
            let response: RecordResponse = record.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            handlers.notifier.notify(Toast::error("Failed to save data"));
            domain_error_response(&e)
        }
    }
}

/// PATCH /api/planning/:kind/:level/:id - Update a row
pub async fn update_record(
    State(handlers): State<PlanningHandlers>,
    Path((kind, level, id)): Path<(String, String, String)>,
    Json(req): Json<SaveRecordRequest>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let level = HierarchyLevel::parse_lossy(&level);
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.update(kind, level, &id, req.into()).await {
        Ok(record) => {
            handlers
                .notifier
                .notify(Toast::success("Item updated successfully"));
            let response: RecordResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            handlers.notifier.notify(Toast::error("Failed to save data"));
            domain_error_response(&e)
        }
    }
}

/// DELETE /api/planning/:kind/:level/:id - Delete a row
pub async fn delete_record(
    State(handlers): State<PlanningHandlers>,
    Path((kind, level, id)): Path<(String, String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let level = HierarchyLevel::parse_lossy(&level);
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.delete(kind, level, &id).await {
        Ok(()) => {
            handlers
                .notifier
                .notify(Toast::success("Item deleted successfully"));
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            handlers.notifier.notify(Toast::error("Failed to delete item"));
            domain_error_response(&e)
        }
    }
}

/// POST /api/planning/:kind/:level/batch-delete - Delete selected rows
///
/// Always 200 with per-id outcomes; partial failure is an expected shape,
/// reported to the user as one aggregate toast.
pub async fn batch_delete(
    State(handlers): State<PlanningHandlers>,
    Path((kind, level)): Path<(String, String)>,
    Json(req): Json<BatchDeleteRequest>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let level = HierarchyLevel::parse_lossy(&level);

    let report = handlers.service.delete_many(kind, level, &req.ids).await;
    if report.all_deleted() {
        handlers
            .notifier
            .notify(Toast::success("Items deleted successfully"));
    } else {
        handlers.notifier.notify(Toast::error("Failed to delete items"));
    }

    let response: BatchDeleteResponse = report.into();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/planning/:kind/:level/parents - Parent dropdown options
pub async fn list_parents(
    State(handlers): State<PlanningHandlers>,
    Path((kind, level)): Path<(String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let level = HierarchyLevel::parse_lossy(&level);

    match handlers.service.parent_options(kind, level).await {
        Ok(rows) => {
            let response: Vec<RecordResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e),
    }
}

/// GET /api/planning/:kind/program/parent?code=XXXX - Resolve the owning
/// urusan for a program code by its 4-character prefix
pub async fn resolve_parent(
    State(handlers): State<PlanningHandlers>,
    Path(kind): Path<String>,
    Query(query): Query<ResolveParentQuery>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match handlers.service.resolve_parent_urusan(kind, &query.code).await {
        Ok(parent) => {
            let response = ResolveParentResponse {
                parent_id: parent.map(|id| id.to_string()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e),
    }
}
