//! Form state for the master-data and Renstra editors.
//!
//! The edit dialog's state is a tagged union over the hierarchy levels, so
//! each level carries exactly the fields its table has: an urusan form has
//! no sasaran/indikator/satuan and no parent, while deeper levels do. This
//! replaces the untyped field-name-keyed map the screens grew up with.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::hierarchy::{DatasetKind, HierarchyLevel};
use crate::domain::planning::{PlanYears, PlanningRecord, RecordDraft};

/// Whether the form creates a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit,
}

/// Form fields for a top-level urusan row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrusanDraft {
    pub code: String,
    pub name: String,
    pub plan: Option<PlanYears>,
}

/// Form fields for a program row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramDraft {
    pub code: String,
    pub name: String,
    pub sasaran: Vec<String>,
    pub indikator: Vec<String>,
    pub satuan: String,
    pub urusan_id: Option<RecordId>,
    pub plan: Option<PlanYears>,
}

/// Form fields for a kegiatan row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KegiatanDraft {
    pub code: String,
    pub name: String,
    pub sasaran: Vec<String>,
    pub indikator: Vec<String>,
    pub satuan: String,
    pub program_id: Option<RecordId>,
    pub plan: Option<PlanYears>,
}

/// Form fields for a sub-kegiatan row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubKegiatanDraft {
    pub code: String,
    pub name: String,
    pub sasaran: Vec<String>,
    pub indikator: Vec<String>,
    pub satuan: String,
    pub kegiatan_id: Option<RecordId>,
    pub plan: Option<PlanYears>,
}

/// Level-tagged form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "kebab-case")]
pub enum FormDraft {
    Urusan(UrusanDraft),
    Program(ProgramDraft),
    Kegiatan(KegiatanDraft),
    SubKegiatan(SubKegiatanDraft),
}

impl FormDraft {
    /// An empty draft for the given dataset and level.
    ///
    /// Renstra drafts start with four zeroed plan years; master drafts carry
    /// none.
    pub fn empty(kind: DatasetKind, level: HierarchyLevel) -> Self {
        let plan = match kind {
            DatasetKind::StrategicPlan => Some(PlanYears::default()),
            _ => None,
        };
        match level {
            HierarchyLevel::Urusan => FormDraft::Urusan(UrusanDraft {
                plan,
                ..Default::default()
            }),
            HierarchyLevel::Program => FormDraft::Program(ProgramDraft {
                plan,
                ..Default::default()
            }),
            HierarchyLevel::Kegiatan => FormDraft::Kegiatan(KegiatanDraft {
                plan,
                ..Default::default()
            }),
            HierarchyLevel::SubKegiatan => FormDraft::SubKegiatan(SubKegiatanDraft {
                plan,
                ..Default::default()
            }),
        }
    }

    /// A draft seeded from a persisted row, for edit mode.
    pub fn from_record(level: HierarchyLevel, record: &PlanningRecord) -> Self {
        let mut draft = FormDraft::empty(DatasetKind::Master, level);
        match &mut draft {
            FormDraft::Urusan(d) => {
                d.code = record.code.clone();
                d.name = record.name.clone();
            }
            FormDraft::Program(d) => {
                d.code = record.code.clone();
                d.name = record.name.clone();
                d.sasaran = record.sasaran.clone();
                d.indikator = record.indikator.clone();
                d.satuan = record.satuan.clone().unwrap_or_default();
                d.urusan_id = record.parent_id;
            }
            FormDraft::Kegiatan(d) => {
                d.code = record.code.clone();
                d.name = record.name.clone();
                d.sasaran = record.sasaran.clone();
                d.indikator = record.indikator.clone();
                d.satuan = record.satuan.clone().unwrap_or_default();
                d.program_id = record.parent_id;
            }
            FormDraft::SubKegiatan(d) => {
                d.code = record.code.clone();
                d.name = record.name.clone();
                d.sasaran = record.sasaran.clone();
                d.indikator = record.indikator.clone();
                d.satuan = record.satuan.clone().unwrap_or_default();
                d.kegiatan_id = record.parent_id;
            }
        }
        if let Some(plan) = &record.plan {
            draft.set_plan(plan.clone());
        }
        draft
    }

    /// The hierarchy level this draft belongs to.
    pub fn level(&self) -> HierarchyLevel {
        match self {
            FormDraft::Urusan(_) => HierarchyLevel::Urusan,
            FormDraft::Program(_) => HierarchyLevel::Program,
            FormDraft::Kegiatan(_) => HierarchyLevel::Kegiatan,
            FormDraft::SubKegiatan(_) => HierarchyLevel::SubKegiatan,
        }
    }

    /// Overwrites code/name/sasaran/indikator/satuan from a Kepmen row.
    ///
    /// Parent and plan fields are left untouched.
    pub fn apply_reference(&mut self, reference: &PlanningRecord) {
        match self {
            FormDraft::Urusan(d) => {
                d.code = reference.code.clone();
                d.name = reference.name.clone();
            }
            FormDraft::Program(d) => {
                d.code = reference.code.clone();
                d.name = reference.name.clone();
                d.sasaran = reference.sasaran.clone();
                d.indikator = reference.indikator.clone();
                d.satuan = reference.satuan.clone().unwrap_or_default();
            }
            FormDraft::Kegiatan(d) => {
                d.code = reference.code.clone();
                d.name = reference.name.clone();
                d.sasaran = reference.sasaran.clone();
                d.indikator = reference.indikator.clone();
                d.satuan = reference.satuan.clone().unwrap_or_default();
            }
            FormDraft::SubKegiatan(d) => {
                d.code = reference.code.clone();
                d.name = reference.name.clone();
                d.sasaran = reference.sasaran.clone();
                d.indikator = reference.indikator.clone();
                d.satuan = reference.satuan.clone().unwrap_or_default();
            }
        }
    }

    /// The selected parent row id, if this level has one.
    pub fn parent_id(&self) -> Option<RecordId> {
        match self {
            FormDraft::Urusan(_) => None,
            FormDraft::Program(d) => d.urusan_id,
            FormDraft::Kegiatan(d) => d.program_id,
            FormDraft::SubKegiatan(d) => d.kegiatan_id,
        }
    }

    /// Sets the parent row id. No-op for urusan.
    pub fn set_parent(&mut self, parent: Option<RecordId>) {
        match self {
            FormDraft::Urusan(_) => {}
            FormDraft::Program(d) => d.urusan_id = parent,
            FormDraft::Kegiatan(d) => d.program_id = parent,
            FormDraft::SubKegiatan(d) => d.kegiatan_id = parent,
        }
    }

    /// Replaces the sasaran list from multi-line text, dropping blank lines.
    /// No-op for urusan.
    pub fn set_sasaran_text(&mut self, text: &str) {
        let lines = split_lines(text);
        match self {
            FormDraft::Urusan(_) => {}
            FormDraft::Program(d) => d.sasaran = lines,
            FormDraft::Kegiatan(d) => d.sasaran = lines,
            FormDraft::SubKegiatan(d) => d.sasaran = lines,
        }
    }

    /// Replaces the indikator list from multi-line text, dropping blank
    /// lines. No-op for urusan.
    pub fn set_indikator_text(&mut self, text: &str) {
        let lines = split_lines(text);
        match self {
            FormDraft::Urusan(_) => {}
            FormDraft::Program(d) => d.indikator = lines,
            FormDraft::Kegiatan(d) => d.indikator = lines,
            FormDraft::SubKegiatan(d) => d.indikator = lines,
        }
    }

    /// Mutable access to the plan years, when the draft carries them.
    pub fn plan_mut(&mut self) -> Option<&mut PlanYears> {
        match self {
            FormDraft::Urusan(d) => d.plan.as_mut(),
            FormDraft::Program(d) => d.plan.as_mut(),
            FormDraft::Kegiatan(d) => d.plan.as_mut(),
            FormDraft::SubKegiatan(d) => d.plan.as_mut(),
        }
    }

    fn set_plan(&mut self, plan: PlanYears) {
        match self {
            FormDraft::Urusan(d) => d.plan = Some(plan),
            FormDraft::Program(d) => d.plan = Some(plan),
            FormDraft::Kegiatan(d) => d.plan = Some(plan),
            FormDraft::SubKegiatan(d) => d.plan = Some(plan),
        }
    }

    /// Sets the code field.
    pub fn set_code(&mut self, code: impl Into<String>) {
        let code = code.into();
        match self {
            FormDraft::Urusan(d) => d.code = code,
            FormDraft::Program(d) => d.code = code,
            FormDraft::Kegiatan(d) => d.code = code,
            FormDraft::SubKegiatan(d) => d.code = code,
        }
    }

    /// Sets the name (uraian) field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            FormDraft::Urusan(d) => d.name = name,
            FormDraft::Program(d) => d.name = name,
            FormDraft::Kegiatan(d) => d.name = name,
            FormDraft::SubKegiatan(d) => d.name = name,
        }
    }

    /// Presence checks on the level's required fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.to_record_draft().validate()
    }

    /// Flattens the draft into the store's logical row shape.
    pub fn to_record_draft(&self) -> RecordDraft {
        match self {
            FormDraft::Urusan(d) => RecordDraft {
                code: d.code.clone(),
                name: d.name.clone(),
                plan: d.plan.clone(),
                ..Default::default()
            },
            FormDraft::Program(d) => RecordDraft {
                code: d.code.clone(),
                name: d.name.clone(),
                sasaran: d.sasaran.clone(),
                indikator: d.indikator.clone(),
                satuan: some_if_not_empty(&d.satuan),
                parent_id: d.urusan_id,
                plan: d.plan.clone(),
            },
            FormDraft::Kegiatan(d) => RecordDraft {
                code: d.code.clone(),
                name: d.name.clone(),
                sasaran: d.sasaran.clone(),
                indikator: d.indikator.clone(),
                satuan: some_if_not_empty(&d.satuan),
                parent_id: d.program_id,
                plan: d.plan.clone(),
            },
            FormDraft::SubKegiatan(d) => RecordDraft {
                code: d.code.clone(),
                name: d.name.clone(),
                sasaran: d.sasaran.clone(),
                indikator: d.indikator.clone(),
                satuan: some_if_not_empty(&d.satuan),
                parent_id: d.kegiatan_id,
                plan: d.plan.clone(),
            },
        }
    }
}

/// Splits textarea input into an ordered list, dropping blank lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn some_if_not_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Timestamp};

    fn reference(code: &str, name: &str) -> PlanningRecord {
        PlanningRecord {
            id: RecordId::new(),
            code: code.to_string(),
            name: name.to_string(),
            sasaran: vec!["Sasaran A".to_string()],
            indikator: vec!["Indikator A".to_string()],
            satuan: Some("persen".to_string()),
            parent_id: None,
            plan: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn empty_renstra_draft_has_zeroed_plan_years() {
        let mut draft = FormDraft::empty(DatasetKind::StrategicPlan, HierarchyLevel::Urusan);
        let plan = draft.plan_mut().expect("renstra draft carries plan years");
        assert_eq!(plan.years.len(), 4);
        assert!(plan.years.iter().all(|y| y.target.is_empty() && y.anggaran == 0));
    }

    #[test]
    fn empty_master_draft_has_no_plan() {
        let mut draft = FormDraft::empty(DatasetKind::Master, HierarchyLevel::Program);
        assert!(draft.plan_mut().is_none());
    }

    #[test]
    fn apply_reference_overwrites_template_fields_only() {
        let mut draft = FormDraft::empty(DatasetKind::StrategicPlan, HierarchyLevel::Kegiatan);
        let parent = RecordId::new();
        draft.set_parent(Some(parent));

        draft.apply_reference(&reference("01.02.03", "Kegiatan Contoh"));

        let flat = draft.to_record_draft();
        assert_eq!(flat.code, "01.02.03");
        assert_eq!(flat.name, "Kegiatan Contoh");
        assert_eq!(flat.sasaran, vec!["Sasaran A".to_string()]);
        assert_eq!(flat.satuan, Some("persen".to_string()));
        // untouched by reference selection
        assert_eq!(flat.parent_id, Some(parent));
        assert!(flat.plan.is_some());
    }

    #[test]
    fn urusan_draft_ignores_detail_fields() {
        let mut draft = FormDraft::empty(DatasetKind::Master, HierarchyLevel::Urusan);
        draft.set_sasaran_text("ignored");
        draft.set_parent(Some(RecordId::new()));
        let flat = draft.to_record_draft();
        assert!(flat.sasaran.is_empty());
        assert!(flat.parent_id.is_none());
    }

    #[test]
    fn multiline_input_drops_blank_lines_and_keeps_order() {
        let mut draft = FormDraft::empty(DatasetKind::Master, HierarchyLevel::Program);
        draft.set_sasaran_text("first\n\n  \nsecond\nthird\n");
        let flat = draft.to_record_draft();
        assert_eq!(
            flat.sasaran,
            vec!["first".to_string(), "second".to_string(), "third".to_string()]
        );
    }

    #[test]
    fn validation_rejects_blank_required_fields() {
        let mut draft = FormDraft::empty(DatasetKind::Master, HierarchyLevel::SubKegiatan);
        assert_eq!(draft.validate().unwrap_err().code, ErrorCode::EmptyField);

        draft.set_code("01.02.03.04");
        draft.set_name("Sub Kegiatan Contoh");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn from_record_round_trips_edit_fields() {
        let record = PlanningRecord {
            id: RecordId::new(),
            code: "0102".to_string(),
            name: "Program Contoh".to_string(),
            sasaran: vec!["S1".to_string(), "S2".to_string()],
            indikator: vec!["I1".to_string()],
            satuan: Some("dokumen".to_string()),
            parent_id: Some(RecordId::new()),
            plan: Some(PlanYears::default()),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };
        let draft = FormDraft::from_record(HierarchyLevel::Program, &record);
        assert_eq!(draft.level(), HierarchyLevel::Program);
        let flat = draft.to_record_draft();
        assert_eq!(flat.code, record.code);
        assert_eq!(flat.sasaran, record.sasaran);
        assert_eq!(flat.parent_id, record.parent_id);
        assert_eq!(flat.plan, record.plan);
    }
}
