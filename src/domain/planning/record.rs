//! Logical row shapes shared by every planning table.
//!
//! Physical column names differ per level and dataset; the store adapters
//! translate between those columns and this one logical shape using the
//! schema table.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, RecordId, Timestamp};

/// One target/budget pair for a plan year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanYear {
    pub target: String,
    /// Budget in whole rupiah.
    pub anggaran: i64,
}

/// The four forward plan years (N+1 through N+4) of a Renstra row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanYears {
    pub years: [PlanYear; 4],
}

/// A persisted planning row in logical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRecord {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub sasaran: Vec<String>,
    pub indikator: Vec<String>,
    pub satuan: Option<String>,
    pub parent_id: Option<RecordId>,
    pub plan: Option<PlanYears>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PlanningRecord {
    /// Case-insensitive substring match over code and name only.
    ///
    /// Sasaran/indikator are deliberately not searched; this mirrors the
    /// grid's search box.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.code.to_lowercase().contains(&query) || self.name.to_lowercase().contains(&query)
    }
}

/// Fields of a row to be inserted or updated.
///
/// The store ignores members the target table has no columns for (a master
/// urusan draft's sasaran never reaches the database) and fills a default
/// plan when the table carries plan columns the draft leaves out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub sasaran: Vec<String>,
    #[serde(default)]
    pub indikator: Vec<String>,
    pub satuan: Option<String>,
    pub parent_id: Option<RecordId>,
    pub plan: Option<PlanYears>,
}

impl RecordDraft {
    /// Presence checks: code and name must be non-blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.code.trim().is_empty() {
            return Err(DomainError::empty_field("code"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::empty_field("name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn record(code: &str, name: &str) -> PlanningRecord {
        PlanningRecord {
            id: RecordId::new(),
            code: code.to_string(),
            name: name.to_string(),
            sasaran: vec![],
            indikator: vec![],
            satuan: None,
            parent_id: None,
            plan: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn search_matches_code_substring() {
        assert!(record("01", "Urusan Wajib").matches_search("1"));
        assert!(!record("02", "Urusan Pilihan").matches_search("1"));
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        assert!(record("01", "Urusan Wajib").matches_search("wajib"));
        assert!(record("01", "Urusan Wajib").matches_search("WAJIB"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(record("01", "Urusan Wajib").matches_search(""));
    }

    #[test]
    fn draft_validation_requires_code_and_name() {
        let mut draft = RecordDraft {
            code: "01".to_string(),
            name: "Urusan Wajib".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.code = "  ".to_string();
        assert_eq!(draft.validate().unwrap_err().code, ErrorCode::EmptyField);

        draft.code = "01".to_string();
        draft.name = String::new();
        assert_eq!(draft.validate().unwrap_err().code, ErrorCode::EmptyField);
    }
}
