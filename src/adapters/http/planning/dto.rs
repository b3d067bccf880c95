//! HTTP DTOs for the planning CRUD endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::service::BatchDeleteReport;
use crate::domain::foundation::RecordId;
use crate::domain::planning::{PlanYear, PlanYears, PlanningRecord, RecordDraft};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One target/budget pair in a request or response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanYearDto {
    pub target: String,
    pub anggaran: i64,
}

impl From<PlanYearDto> for PlanYear {
    fn from(dto: PlanYearDto) -> Self {
        PlanYear {
            target: dto.target,
            anggaran: dto.anggaran,
        }
    }
}

impl From<PlanYear> for PlanYearDto {
    fn from(year: PlanYear) -> Self {
        PlanYearDto {
            target: year.target,
            anggaran: year.anggaran,
        }
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRecordRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub sasaran: Vec<String>,
    #[serde(default)]
    pub indikator: Vec<String>,
    #[serde(default)]
    pub satuan: Option<String>,
    #[serde(default)]
    pub parent_id: Option<RecordId>,
    /// Four plan years (N+1..N+4); only meaningful for Renstra tables.
    #[serde(default)]
    pub plan: Option<[PlanYearDto; 4]>,
}

impl From<SaveRecordRequest> for RecordDraft {
    fn from(req: SaveRecordRequest) -> Self {
        RecordDraft {
            code: req.code,
            name: req.name,
            sasaran: req.sasaran,
            indikator: req.indikator,
            satuan: req.satuan,
            parent_id: req.parent_id,
            plan: req.plan.map(|years| PlanYears {
                years: years.map(Into::into),
            }),
        }
    }
}

/// Request body for batch delete.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<RecordId>,
}

/// Query parameters for parent resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveParentQuery {
    pub code: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A planning row in API form.
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub sasaran: Vec<String>,
    pub indikator: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satuan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<[PlanYearDto; 4]>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PlanningRecord> for RecordResponse {
    fn from(record: PlanningRecord) -> Self {
        Self {
            id: record.id.to_string(),
            code: record.code,
            name: record.name,
            sasaran: record.sasaran,
            indikator: record.indikator,
            satuan: record.satuan,
            parent_id: record.parent_id.map(|id| id.to_string()),
            plan: record.plan.map(|plan| plan.years.map(Into::into)),
            created_at: record.created_at.as_datetime().to_rfc3339(),
            updated_at: record.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Per-id outcome of a batch delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutcomeResponse {
    pub id: String,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch delete result: one outcome per requested id, in request order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchDeleteResponse {
    pub outcomes: Vec<DeleteOutcomeResponse>,
    pub deleted: usize,
    pub failed: usize,
}

impl From<BatchDeleteReport> for BatchDeleteResponse {
    fn from(report: BatchDeleteReport) -> Self {
        let deleted = report.deleted();
        let failed = report.failed();
        Self {
            outcomes: report
                .outcomes
                .into_iter()
                .map(|outcome| DeleteOutcomeResponse {
                    id: outcome.id.to_string(),
                    deleted: outcome.result.is_ok(),
                    error: outcome.result.err().map(|e| e.to_string()),
                })
                .collect(),
            deleted,
            failed,
        }
    }
}

/// Response for parent resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveParentResponse {
    pub parent_id: Option<String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}
