//! Grid orchestration for one dataset.
//!
//! A `GridSession` owns the level selector, load state, row cache,
//! selection set, search box, and the edit dialog's open/close lifecycle.
//! Loading is `idle → loading → loaded`; the dialog is an independent
//! closed/open machine held in `form`.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::form::FormSession;
use crate::application::service::PlanningService;
use crate::domain::foundation::RecordId;
use crate::domain::hierarchy::{DatasetKind, HierarchyLevel};
use crate::domain::planning::{FormMode, PlanningRecord};
use crate::ports::{Notifier, Toast};

/// Grid loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// One grid over one dataset (master data or Renstra).
pub struct GridSession {
    kind: DatasetKind,
    level: HierarchyLevel,
    load_state: LoadState,
    rows: Vec<PlanningRecord>,
    selection: BTreeSet<RecordId>,
    search: String,
    form: Option<FormSession>,
    service: Arc<PlanningService>,
    notifier: Arc<dyn Notifier>,
}

impl GridSession {
    /// A fresh grid at the urusan level, not yet loaded.
    pub fn new(
        kind: DatasetKind,
        service: Arc<PlanningService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            kind,
            level: HierarchyLevel::Urusan,
            load_state: LoadState::Idle,
            rows: Vec::new(),
            selection: BTreeSet::new(),
            search: String::new(),
            form: None,
            service,
            notifier,
        }
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn level(&self) -> HierarchyLevel {
        self.level
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// All loaded rows, unfiltered.
    pub fn rows(&self) -> &[PlanningRecord] {
        &self.rows
    }

    /// Reloads the current level's rows.
    ///
    /// A failed load toasts, keeps the previous rows, and still ends in
    /// `Loaded` (the grid is no longer loading). Selection is pruned to ids
    /// that still exist.
    pub async fn refresh(&mut self) {
        self.load_state = LoadState::Loading;
        match self.service.list(self.kind, self.level).await {
            Ok(rows) => {
                let existing: BTreeSet<RecordId> = rows.iter().map(|r| r.id).collect();
                self.selection.retain(|id| existing.contains(id));
                self.rows = rows;
            }
            Err(e) => {
                tracing::error!(error = %e, kind = %self.kind, level = %self.level, "failed to load rows");
                self.notifier.notify(Toast::error("Failed to load data"));
            }
        }
        self.load_state = LoadState::Loaded;
    }

    /// Switches the hierarchy level: clears selection and reloads.
    pub async fn change_level(&mut self, level: HierarchyLevel) {
        self.level = level;
        self.selection.clear();
        self.refresh().await;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows passing the search filter, in load order.
    ///
    /// Filtering is client-side over code and name; it never touches the
    /// persisted query.
    pub fn visible_rows(&self) -> Vec<&PlanningRecord> {
        self.rows
            .iter()
            .filter(|row| row.matches_search(&self.search))
            .collect()
    }

    pub fn selection(&self) -> &BTreeSet<RecordId> {
        &self.selection
    }

    /// Toggles one row in or out of the selection.
    pub fn toggle_select(&mut self, id: RecordId) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Edit needs exactly one selected row.
    pub fn can_edit(&self) -> bool {
        self.selection.len() == 1
    }

    /// Delete needs at least one selected row.
    pub fn can_delete(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The open edit dialog, if any.
    pub fn form(&self) -> Option<&FormSession> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormSession> {
        self.form.as_mut()
    }

    /// Opens the dialog in create mode.
    pub async fn open_create(&mut self) {
        self.form = Some(
            FormSession::open_create(
                self.kind,
                self.level,
                self.service.clone(),
                self.notifier.clone(),
            )
            .await,
        );
    }

    /// Opens the dialog in edit mode for the single selected row.
    ///
    /// Returns false (and does nothing) unless exactly one row is selected
    /// and still present.
    pub async fn open_edit(&mut self) -> bool {
        if !self.can_edit() {
            return false;
        }
        let Some(id) = self.selection.iter().next().copied() else {
            return false;
        };
        let Some(record) = self.rows.iter().find(|r| r.id == id).cloned() else {
            return false;
        };
        self.form = Some(
            FormSession::open_edit(
                self.kind,
                self.level,
                &record,
                self.service.clone(),
                self.notifier.clone(),
            )
            .await,
        );
        true
    }

    /// Closes the dialog without saving.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submits the open dialog.
    ///
    /// On success the dialog closes, the grid reloads, and a successful add
    /// clears the selection. On failure the dialog stays open; the form has
    /// already toasted.
    pub async fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let mode = form.mode();
        if form.submit().await.is_ok() {
            if mode == FormMode::Create {
                self.selection.clear();
            }
            self.form = None;
            self.refresh().await;
        }
    }

    /// Deletes every selected row and reloads.
    ///
    /// The batch reports per-id outcomes, but the user sees one aggregate
    /// toast: success only when every delete succeeded.
    pub async fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let ids: Vec<RecordId> = self.selection.iter().copied().collect();
        let report = self.service.delete_many(self.kind, self.level, &ids).await;
        if report.all_deleted() {
            self.notifier.notify(Toast::success("Items deleted successfully"));
        } else {
            tracing::error!(
                failed = report.failed(),
                deleted = report.deleted(),
                "bulk delete partially failed"
            );
            self.notifier.notify(Toast::error("Failed to delete items"));
        }
        self.refresh().await;
    }
}
