//! PostgreSQL implementation of PlanningStore.
//!
//! Every query is assembled from the static identifiers in the schema
//! mapping; nothing user-supplied ever reaches the SQL text, only binds.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, RecordId, Timestamp};
use crate::domain::hierarchy::FieldSet;
use crate::domain::planning::{PlanYears, PlanningRecord, RecordDraft};
use crate::ports::PlanningStore;

/// PostgreSQL implementation of PlanningStore.
#[derive(Clone)]
pub struct PostgresPlanningStore {
    pool: PgPool,
}

impl PostgresPlanningStore {
    /// Creates a new PostgresPlanningStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanningStore for PostgresPlanningStore {
    async fn fetch_all(&self, fields: &FieldSet) -> Result<Vec<PlanningRecord>, DomainError> {
        let sql = select_sql(fields);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("fetch rows", fields, e))?;

        rows.into_iter().map(|row| row_to_record(fields, &row)).collect()
    }

    async fn insert(
        &self,
        fields: &FieldSet,
        draft: &RecordDraft,
    ) -> Result<PlanningRecord, DomainError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO ");
        qb.push(fields.table).push(" (");
        push_columns(&mut qb, fields);
        qb.push(") VALUES (");
        push_binds(&mut qb, fields, draft);
        qb.push(") RETURNING ").push(select_columns(fields));

        let row = qb
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("insert row", fields, e))?;

        row_to_record(fields, &row)
    }

    async fn update(
        &self,
        fields: &FieldSet,
        id: &RecordId,
        draft: &RecordDraft,
    ) -> Result<PlanningRecord, DomainError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE ");
        qb.push(fields.table).push(" SET ");
        push_assignments(&mut qb, fields, draft);
        qb.push(", updated_at = NOW() WHERE id = ");
        qb.push_bind(*id.as_uuid());
        qb.push(" RETURNING ").push(select_columns(fields));

        let row = qb
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("update row", fields, e))?;

        match row {
            Some(row) => row_to_record(fields, &row),
            None => Err(DomainError::not_found(fields.table, id)),
        }
    }

    async fn delete(&self, fields: &FieldSet, id: &RecordId) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", fields.table);
        let result = sqlx::query(&sql)
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete row", fields, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(fields.table, id));
        }
        Ok(())
    }

    async fn find_by_code(
        &self,
        fields: &FieldSet,
        code: &str,
    ) -> Result<Option<PlanningRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1 LIMIT 1",
            select_columns(fields),
            fields.table,
            fields.code
        );
        let row = sqlx::query(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find row by code", fields, e))?;

        row.map(|row| row_to_record(fields, &row)).transpose()
    }

    async fn count(&self, fields: &FieldSet) -> Result<u64, DomainError> {
        let sql = format!("SELECT COUNT(*) FROM {}", fields.table);
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count rows", fields, e))?;

        Ok(count as u64)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query assembly helpers
// ════════════════════════════════════════════════════════════════════════════

/// The non-generated columns of the table, in bind order.
fn draft_columns(fields: &FieldSet) -> Vec<&'static str> {
    let mut cols = vec![fields.code, fields.name];
    cols.extend(fields.sasaran);
    cols.extend(fields.indikator);
    cols.extend(fields.satuan);
    cols.extend(fields.parent_id);
    if let Some(plan) = &fields.plan {
        for i in 0..4 {
            cols.push(plan.target[i]);
            cols.push(plan.anggaran[i]);
        }
    }
    cols
}

/// All columns a row is read back with.
fn select_columns(fields: &FieldSet) -> String {
    let mut cols = vec!["id"];
    cols.extend(draft_columns(fields));
    cols.push("created_at");
    cols.push("updated_at");
    cols.join(", ")
}

fn select_sql(fields: &FieldSet) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} ASC",
        select_columns(fields),
        fields.table,
        fields.code
    )
}

fn push_columns(qb: &mut QueryBuilder<'_, Postgres>, fields: &FieldSet) {
    let mut sep = qb.separated(", ");
    for col in draft_columns(fields) {
        sep.push(col);
    }
}

fn push_binds(qb: &mut QueryBuilder<'_, Postgres>, fields: &FieldSet, draft: &RecordDraft) {
    let mut sep = qb.separated(", ");
    sep.push_bind(draft.code.clone());
    sep.push_bind(draft.name.clone());
    if fields.sasaran.is_some() {
        sep.push_bind(draft.sasaran.clone());
    }
    if fields.indikator.is_some() {
        sep.push_bind(draft.indikator.clone());
    }
    if fields.satuan.is_some() {
        sep.push_bind(draft.satuan.clone());
    }
    if fields.parent_id.is_some() {
        sep.push_bind(draft.parent_id.map(|id| *id.as_uuid()));
    }
    if fields.plan.is_some() {
        let plan = draft.plan.clone().unwrap_or_default();
        for year in plan.years {
            sep.push_bind(year.target);
            sep.push_bind(year.anggaran);
        }
    }
}

fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, fields: &FieldSet, draft: &RecordDraft) {
    let mut sep = qb.separated(", ");
    sep.push(fields.code)
        .push_unseparated(" = ")
        .push_bind_unseparated(draft.code.clone());
    sep.push(fields.name)
        .push_unseparated(" = ")
        .push_bind_unseparated(draft.name.clone());
    if let Some(col) = fields.sasaran {
        sep.push(col)
            .push_unseparated(" = ")
            .push_bind_unseparated(draft.sasaran.clone());
    }
    if let Some(col) = fields.indikator {
        sep.push(col)
            .push_unseparated(" = ")
            .push_bind_unseparated(draft.indikator.clone());
    }
    if let Some(col) = fields.satuan {
        sep.push(col)
            .push_unseparated(" = ")
            .push_bind_unseparated(draft.satuan.clone());
    }
    if let Some(col) = fields.parent_id {
        sep.push(col)
            .push_unseparated(" = ")
            .push_bind_unseparated(draft.parent_id.map(|id| *id.as_uuid()));
    }
    if let Some(plan_cols) = &fields.plan {
        let plan = draft.plan.clone().unwrap_or_default();
        for (i, year) in plan.years.into_iter().enumerate() {
            sep.push(plan_cols.target[i])
                .push_unseparated(" = ")
                .push_bind_unseparated(year.target);
            sep.push(plan_cols.anggaran[i])
                .push_unseparated(" = ")
                .push_bind_unseparated(year.anggaran);
        }
    }
}

fn row_to_record(fields: &FieldSet, row: &PgRow) -> Result<PlanningRecord, DomainError> {
    let decode = |e: sqlx::Error| {
        DomainError::database(format!("Failed to decode {} row: {}", fields.table, e))
    };

    let id: Uuid = row.try_get("id").map_err(decode)?;
    let code: String = row.try_get(fields.code).map_err(decode)?;
    let name: String = row.try_get(fields.name).map_err(decode)?;

    let sasaran: Vec<String> = match fields.sasaran {
        Some(col) => row.try_get(col).map_err(decode)?,
        None => Vec::new(),
    };
    let indikator: Vec<String> = match fields.indikator {
        Some(col) => row.try_get(col).map_err(decode)?,
        None => Vec::new(),
    };
    let satuan: Option<String> = match fields.satuan {
        Some(col) => row.try_get(col).map_err(decode)?,
        None => None,
    };
    let parent_id: Option<Uuid> = match fields.parent_id {
        Some(col) => row.try_get(col).map_err(decode)?,
        None => None,
    };

    let plan = match &fields.plan {
        Some(plan_cols) => {
            let mut plan = PlanYears::default();
            for i in 0..4 {
                plan.years[i].target = row.try_get(plan_cols.target[i]).map_err(decode)?;
                plan.years[i].anggaran = row.try_get(plan_cols.anggaran[i]).map_err(decode)?;
            }
            Some(plan)
        }
        None => None,
    };

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(decode)?;
    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(decode)?;

    Ok(PlanningRecord {
        id: RecordId::from_uuid(id),
        code,
        name,
        sasaran,
        indikator,
        satuan,
        parent_id: parent_id.map(RecordId::from_uuid),
        plan,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}

fn db_error(action: &str, fields: &FieldSet, e: sqlx::Error) -> DomainError {
    DomainError::database(format!("Failed to {} in {}: {}", action, fields.table, e))
}
