//! Planning module - Logical row shapes and form state.

mod form;
mod record;

pub use form::{
    split_lines, FormDraft, FormMode, KegiatanDraft, ProgramDraft, SubKegiatanDraft, UrusanDraft,
};
pub use record::{PlanYear, PlanYears, PlanningRecord, RecordDraft};
