//! Planning store port.
//!
//! The relational store is an external collaborator offering row-level
//! operations against the tables described by the schema mapping:
//! select-all ordered by the code column, insert, update, delete, an
//! equality filter on code, and a row count.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::hierarchy::FieldSet;
use crate::domain::planning::{PlanningRecord, RecordDraft};

/// Row-level access to one planning table at a time.
///
/// All failures surface as `DatabaseError` except missing rows on
/// update/delete, which surface as `RecordNotFound`. There is no
/// client-side duplicate check; constraint violations come back from the
/// store.
#[async_trait]
pub trait PlanningStore: Send + Sync {
    /// All rows of the table, ordered ascending by its code column.
    async fn fetch_all(&self, fields: &FieldSet) -> Result<Vec<PlanningRecord>, DomainError>;

    /// Inserts a row and returns it with generated id and timestamps.
    async fn insert(
        &self,
        fields: &FieldSet,
        draft: &RecordDraft,
    ) -> Result<PlanningRecord, DomainError>;

    /// Updates a row by id and returns the persisted row.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the id does not exist
    /// - `DatabaseError` on transport or constraint failure
    async fn update(
        &self,
        fields: &FieldSet,
        id: &RecordId,
        draft: &RecordDraft,
    ) -> Result<PlanningRecord, DomainError>;

    /// Deletes a row by id.
    ///
    /// Deleting a missing id surfaces the store's error rather than being
    /// silently ignored: the second delete of the same id fails with
    /// `RecordNotFound`.
    async fn delete(&self, fields: &FieldSet, id: &RecordId) -> Result<(), DomainError>;

    /// The row whose code column equals `code` exactly, if any.
    async fn find_by_code(
        &self,
        fields: &FieldSet,
        code: &str,
    ) -> Result<Option<PlanningRecord>, DomainError>;

    /// Number of rows in the table.
    async fn count(&self, fields: &FieldSet) -> Result<u64, DomainError>;
}
