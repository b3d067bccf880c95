//! Edit-dialog orchestration.
//!
//! A `FormSession` exists while the dialog is open. Opening loads the
//! Kepmen reference options (skipped for urusan in the master-data
//! variant, which has no reference selector there) and the parent dropdown
//! options for non-urusan levels. Selecting a reference row overwrites the
//! template fields, and for program-level forms also pre-fills the parent
//! urusan resolved from the code prefix.

use std::sync::Arc;

use crate::application::service::PlanningService;
use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::hierarchy::{DatasetKind, HierarchyLevel};
use crate::domain::planning::{FormDraft, FormMode, PlanningRecord};
use crate::ports::{Notifier, Toast};

/// Open edit dialog: mode, option lists, and the level-tagged draft.
pub struct FormSession {
    kind: DatasetKind,
    level: HierarchyLevel,
    mode: FormMode,
    target: Option<RecordId>,
    draft: FormDraft,
    reference_options: Vec<PlanningRecord>,
    parent_options: Vec<PlanningRecord>,
    service: Arc<PlanningService>,
    notifier: Arc<dyn Notifier>,
}

impl FormSession {
    /// Opens the dialog in create mode with an empty draft.
    pub async fn open_create(
        kind: DatasetKind,
        level: HierarchyLevel,
        service: Arc<PlanningService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mut session = Self {
            kind,
            level,
            mode: FormMode::Create,
            target: None,
            draft: FormDraft::empty(kind, level),
            reference_options: Vec::new(),
            parent_options: Vec::new(),
            service,
            notifier,
        };
        session.load_options().await;
        session
    }

    /// Opens the dialog in edit mode seeded from a persisted row.
    pub async fn open_edit(
        kind: DatasetKind,
        level: HierarchyLevel,
        record: &PlanningRecord,
        service: Arc<PlanningService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mut session = Self {
            kind,
            level,
            mode: FormMode::Edit,
            target: Some(record.id),
            draft: FormDraft::from_record(level, record),
            reference_options: Vec::new(),
            parent_options: Vec::new(),
            service,
            notifier,
        };
        session.load_options().await;
        session
    }

    /// Loads the option lists. A failed load toasts and leaves the list
    /// empty; there is no retry.
    async fn load_options(&mut self) {
        let has_reference_selector =
            !(self.kind == DatasetKind::Master && self.level == HierarchyLevel::Urusan);
        if has_reference_selector {
            match self.service.reference_options(self.level).await {
                Ok(options) => self.reference_options = options,
                Err(e) => {
                    tracing::error!(error = %e, level = %self.level, "failed to load reference options");
                    self.notifier.notify(Toast::error("Failed to load reference data"));
                }
            }
        }

        if self.level != HierarchyLevel::Urusan {
            match self.service.parent_options(self.kind, self.level).await {
                Ok(options) => self.parent_options = options,
                Err(e) => {
                    tracing::error!(error = %e, level = %self.level, "failed to load parent options");
                    self.notifier.notify(Toast::error("Failed to load parent data"));
                }
            }
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn level(&self) -> HierarchyLevel {
        self.level
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    pub fn reference_options(&self) -> &[PlanningRecord] {
        &self.reference_options
    }

    pub fn parent_options(&self) -> &[PlanningRecord] {
        &self.parent_options
    }

    /// Applies the chosen Kepmen row to the draft.
    ///
    /// For program-level forms the owning urusan is derived from the
    /// reference code's 4-character prefix; no match leaves the parent
    /// empty, silently. An unknown option id is ignored.
    pub async fn select_reference(&mut self, id: &RecordId) {
        let Some(reference) = self.reference_options.iter().find(|r| r.id == *id).cloned()
        else {
            return;
        };
        self.draft.apply_reference(&reference);

        if self.level == HierarchyLevel::Program {
            match self.service.resolve_parent_urusan(self.kind, &reference.code).await {
                Ok(parent) => self.draft.set_parent(parent),
                Err(e) => {
                    // leave whatever parent was already selected
                    tracing::error!(error = %e, "failed to resolve parent urusan");
                }
            }
        }
    }

    /// Sets the parent from the dropdown.
    pub fn select_parent(&mut self, parent: Option<RecordId>) {
        self.draft.set_parent(parent);
    }

    /// Persists the draft. Success and failure both toast; the caller
    /// decides whether the dialog closes.
    pub async fn submit(&mut self) -> Result<PlanningRecord, DomainError> {
        let result = match self.mode {
            FormMode::Create => {
                self.service
                    .create(self.kind, self.level, self.draft.to_record_draft())
                    .await
            }
            FormMode::Edit => match self.target {
                Some(id) => {
                    self.service
                        .update(self.kind, self.level, &id, self.draft.to_record_draft())
                        .await
                }
                None => Err(DomainError::new(
                    ErrorCode::InternalError,
                    "edit form has no target row",
                )),
            },
        };

        match &result {
            Ok(_) => {
                let description = match self.mode {
                    FormMode::Create => "Item created successfully",
                    FormMode::Edit => "Item updated successfully",
                };
                self.notifier.notify(Toast::success(description));
            }
            Err(e) => {
                tracing::error!(error = %e, level = %self.level, "failed to save row");
                self.notifier.notify(Toast::error("Failed to save data"));
            }
        }

        result
    }
}
