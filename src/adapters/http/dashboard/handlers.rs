//! HTTP handler for the dashboard overview.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::adapters::http::domain_error_response;
use crate::application::dashboard::DashboardCounts;
use crate::application::service::PlanningService;

#[derive(Clone)]
pub struct DashboardHandlers {
    service: Arc<PlanningService>,
}

impl DashboardHandlers {
    pub fn new(service: Arc<PlanningService>) -> Self {
        Self { service }
    }
}

/// Dashboard tile totals.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub urusan: u64,
    pub program: u64,
    pub kegiatan: u64,
    pub sub_kegiatan: u64,
    pub total: u64,
}

impl From<DashboardCounts> for DashboardResponse {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            urusan: counts.urusan,
            program: counts.program,
            kegiatan: counts.kegiatan,
            sub_kegiatan: counts.sub_kegiatan,
            total: counts.total(),
        }
    }
}

/// GET /api/dashboard - Master-data row counts per level
pub async fn overview(State(handlers): State<DashboardHandlers>) -> Response {
    match handlers.service.master_counts().await {
        Ok(counts) => {
            let response: DashboardResponse = counts.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e),
    }
}
