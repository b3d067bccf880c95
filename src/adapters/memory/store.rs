//! In-memory implementation of PlanningStore.
//!
//! Backs the orchestration tests and local experiments with the same
//! contract as the PostgreSQL adapter: rows ordered by code, a unique code
//! per table, and not-found errors on missing update/delete targets. A
//! failure toggle lets tests exercise the error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId, Timestamp};
use crate::domain::hierarchy::FieldSet;
use crate::domain::planning::{PlanningRecord, RecordDraft};
use crate::ports::PlanningStore;

/// In-memory planning store keyed by physical table name.
#[derive(Default)]
pub struct InMemoryPlanningStore {
    tables: Mutex<HashMap<&'static str, Vec<PlanningRecord>>>,
    fail: AtomicBool,
}

impl InMemoryPlanningStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every operation fails with a DatabaseError until cleared.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("simulated store failure"));
        }
        Ok(())
    }
}

/// Restricts a draft to the columns the target table actually has.
fn materialize(fields: &FieldSet, draft: &RecordDraft, into: &mut PlanningRecord) {
    into.code = draft.code.clone();
    into.name = draft.name.clone();
    into.sasaran = if fields.sasaran.is_some() {
        draft.sasaran.clone()
    } else {
        Vec::new()
    };
    into.indikator = if fields.indikator.is_some() {
        draft.indikator.clone()
    } else {
        Vec::new()
    };
    into.satuan = if fields.satuan.is_some() {
        draft.satuan.clone()
    } else {
        None
    };
    into.parent_id = if fields.parent_id.is_some() {
        draft.parent_id
    } else {
        None
    };
    into.plan = if fields.plan.is_some() {
        Some(draft.plan.clone().unwrap_or_default())
    } else {
        None
    };
}

#[async_trait]
impl PlanningStore for InMemoryPlanningStore {
    async fn fetch_all(&self, fields: &FieldSet) -> Result<Vec<PlanningRecord>, DomainError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        let mut rows = tables.get(fields.table).cloned().unwrap_or_default();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn insert(
        &self,
        fields: &FieldSet,
        draft: &RecordDraft,
    ) -> Result<PlanningRecord, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(fields.table).or_default();
        if rows.iter().any(|r| r.code == draft.code) {
            return Err(DomainError::database(format!(
                "duplicate code in {}: {}",
                fields.table, draft.code
            )));
        }

        let now = Timestamp::now();
        let mut record = PlanningRecord {
            id: RecordId::new(),
            code: String::new(),
            name: String::new(),
            sasaran: Vec::new(),
            indikator: Vec::new(),
            satuan: None,
            parent_id: None,
            plan: None,
            created_at: now,
            updated_at: now,
        };
        materialize(fields, draft, &mut record);
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        fields: &FieldSet,
        id: &RecordId,
        draft: &RecordDraft,
    ) -> Result<PlanningRecord, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(fields.table).or_default();
        if rows.iter().any(|r| r.code == draft.code && r.id != *id) {
            return Err(DomainError::database(format!(
                "duplicate code in {}: {}",
                fields.table, draft.code
            )));
        }
        let record = rows
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| DomainError::not_found(fields.table, id))?;
        materialize(fields, draft, record);
        record.updated_at = Timestamp::now();
        Ok(record.clone())
    }

    async fn delete(&self, fields: &FieldSet, id: &RecordId) -> Result<(), DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(fields.table).or_default();
        let before = rows.len();
        rows.retain(|r| r.id != *id);
        if rows.len() == before {
            return Err(DomainError::not_found(fields.table, id));
        }
        Ok(())
    }

    async fn find_by_code(
        &self,
        fields: &FieldSet,
        code: &str,
    ) -> Result<Option<PlanningRecord>, DomainError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(fields.table)
            .and_then(|rows| rows.iter().find(|r| r.code == code).cloned()))
    }

    async fn count(&self, fields: &FieldSet) -> Result<u64, DomainError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.get(fields.table).map_or(0, |rows| rows.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hierarchy::{field_set, DatasetKind, HierarchyLevel};

    fn draft(code: &str, name: &str) -> RecordDraft {
        RecordDraft {
            code: code.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fetch_returns_rows_ordered_by_code() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::Master, HierarchyLevel::Urusan);
        store.insert(&fields, &draft("02", "Second")).await.unwrap();
        store.insert(&fields, &draft("01", "First")).await.unwrap();

        let rows = store.fetch_all(&fields).await.unwrap();
        let codes: Vec<_> = rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["01", "02"]);
    }

    #[tokio::test]
    async fn insert_then_fetch_round_trips_logical_fields() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::Master, HierarchyLevel::Program);
        let created = store
            .insert(
                &fields,
                &RecordDraft {
                    code: "0101".to_string(),
                    name: "Program Contoh".to_string(),
                    sasaran: vec!["S1".to_string(), "S2".to_string()],
                    indikator: vec!["I1".to_string()],
                    satuan: Some("persen".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let fetched = store.fetch_all(&fields).await.unwrap();
        assert_eq!(fetched, vec![created]);
    }

    #[tokio::test]
    async fn duplicate_code_is_a_constraint_violation() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::Master, HierarchyLevel::Urusan);
        store.insert(&fields, &draft("01", "First")).await.unwrap();
        let err = store.insert(&fields, &draft("01", "Again")).await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn delete_twice_yields_success_then_not_found() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::Master, HierarchyLevel::Urusan);
        let row = store.insert(&fields, &draft("01", "First")).await.unwrap();

        assert!(store.delete(&fields, &row.id).await.is_ok());
        let err = store.delete(&fields, &row.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn columns_absent_from_the_table_are_dropped() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::Master, HierarchyLevel::Urusan);
        let created = store
            .insert(
                &fields,
                &RecordDraft {
                    code: "01".to_string(),
                    name: "Urusan".to_string(),
                    sasaran: vec!["dropped".to_string()],
                    parent_id: Some(RecordId::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(created.sasaran.is_empty());
        assert!(created.parent_id.is_none());
    }

    #[tokio::test]
    async fn renstra_rows_always_carry_plan_years() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::StrategicPlan, HierarchyLevel::Urusan);
        let created = store.insert(&fields, &draft("01", "Urusan")).await.unwrap();
        assert!(created.plan.is_some());
    }

    #[tokio::test]
    async fn failure_toggle_poisons_every_operation() {
        let store = InMemoryPlanningStore::new();
        let fields = field_set(DatasetKind::Master, HierarchyLevel::Urusan);
        store.set_fail(true);
        assert!(store.fetch_all(&fields).await.is_err());
        assert!(store.insert(&fields, &draft("01", "x")).await.is_err());

        store.set_fail(false);
        assert!(store.fetch_all(&fields).await.is_ok());
    }
}
