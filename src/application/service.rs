//! Gateway orchestration over the planning store.
//!
//! Resolves the schema mapping for each call, runs presence checks before
//! writes, and implements the two lookups the editors need: reference
//! (Kepmen) options and parent resolution.

use std::sync::Arc;

use crate::application::dashboard::DashboardCounts;
use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::hierarchy::{field_set, parent_field_set, DatasetKind, HierarchyLevel};
use crate::domain::planning::{PlanningRecord, RecordDraft};
use crate::ports::PlanningStore;

/// Outcome of one delete within a batch.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub id: RecordId,
    pub result: Result<(), DomainError>,
}

/// Per-id results of a batch delete, in request order.
///
/// A failed delete does not stop later ones and nothing is rolled back, so
/// partial success is an expected shape here.
#[derive(Debug, Clone, Default)]
pub struct BatchDeleteReport {
    pub outcomes: Vec<DeleteOutcome>,
}

impl BatchDeleteReport {
    pub fn deleted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.deleted()
    }

    pub fn all_deleted(&self) -> bool {
        self.failed() == 0
    }
}

/// CRUD and lookup operations for every (dataset, level) table.
pub struct PlanningService {
    store: Arc<dyn PlanningStore>,
}

impl PlanningService {
    pub fn new(store: Arc<dyn PlanningStore>) -> Self {
        Self { store }
    }

    /// All rows of the level's table, ordered ascending by code.
    pub async fn list(
        &self,
        kind: DatasetKind,
        level: HierarchyLevel,
    ) -> Result<Vec<PlanningRecord>, DomainError> {
        self.store.fetch_all(&field_set(kind, level)).await
    }

    /// Creates a row after presence checks on code and name.
    pub async fn create(
        &self,
        kind: DatasetKind,
        level: HierarchyLevel,
        draft: RecordDraft,
    ) -> Result<PlanningRecord, DomainError> {
        draft.validate()?;
        self.store.insert(&field_set(kind, level), &draft).await
    }

    /// Updates a row after presence checks on code and name.
    pub async fn update(
        &self,
        kind: DatasetKind,
        level: HierarchyLevel,
        id: &RecordId,
        draft: RecordDraft,
    ) -> Result<PlanningRecord, DomainError> {
        draft.validate()?;
        self.store.update(&field_set(kind, level), id, &draft).await
    }

    /// Deletes a single row; a missing id is the store's error, not ours.
    pub async fn delete(
        &self,
        kind: DatasetKind,
        level: HierarchyLevel,
        id: &RecordId,
    ) -> Result<(), DomainError> {
        self.store.delete(&field_set(kind, level), id).await
    }

    /// Deletes each id in order, collecting per-id outcomes.
    pub async fn delete_many(
        &self,
        kind: DatasetKind,
        level: HierarchyLevel,
        ids: &[RecordId],
    ) -> BatchDeleteReport {
        let fields = field_set(kind, level);
        let mut report = BatchDeleteReport::default();
        for id in ids {
            let result = self.store.delete(&fields, id).await;
            report.outcomes.push(DeleteOutcome { id: *id, result });
        }
        report
    }

    /// Kepmen rows for the level, used to seed new records.
    pub async fn reference_options(
        &self,
        level: HierarchyLevel,
    ) -> Result<Vec<PlanningRecord>, DomainError> {
        self.store
            .fetch_all(&field_set(DatasetKind::Reference, level))
            .await
    }

    /// Persisted parent-level rows for the level's parent dropdown.
    ///
    /// Empty for urusan, which has no parent level.
    pub async fn parent_options(
        &self,
        kind: DatasetKind,
        level: HierarchyLevel,
    ) -> Result<Vec<PlanningRecord>, DomainError> {
        match parent_field_set(kind, level) {
            Some(fields) => self.store.fetch_all(&fields).await,
            None => Ok(Vec::new()),
        }
    }

    /// Resolves the owning urusan for a program-level code.
    ///
    /// The candidate parent code is the first 4 characters of `code` (the
    /// whole code when shorter), matched exactly against the persisted
    /// urusan table of the same dataset. No match is `None`, not an error.
    pub async fn resolve_parent_urusan(
        &self,
        kind: DatasetKind,
        code: &str,
    ) -> Result<Option<RecordId>, DomainError> {
        let fields = field_set(kind, HierarchyLevel::Urusan);
        let parent = self.store.find_by_code(&fields, code_prefix(code)).await?;
        Ok(parent.map(|record| record.id))
    }

    /// Master-data row counts per level, for the dashboard tiles.
    pub async fn master_counts(&self) -> Result<DashboardCounts, DomainError> {
        let kind = DatasetKind::Master;
        let urusan = field_set(kind, HierarchyLevel::Urusan);
        let program = field_set(kind, HierarchyLevel::Program);
        let kegiatan = field_set(kind, HierarchyLevel::Kegiatan);
        let sub_kegiatan = field_set(kind, HierarchyLevel::SubKegiatan);

        let (urusan, program, kegiatan, sub_kegiatan) = futures::try_join!(
            self.store.count(&urusan),
            self.store.count(&program),
            self.store.count(&kegiatan),
            self.store.count(&sub_kegiatan),
        )?;

        Ok(DashboardCounts {
            urusan,
            program,
            kegiatan,
            sub_kegiatan,
        })
    }
}

/// The first 4 characters of a code, or the whole code when shorter.
fn code_prefix(code: &str) -> &str {
    match code.char_indices().nth(4) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}
