//! The schema table mapping a dataset and hierarchy level to its physical
//! table and column names.
//!
//! Column names are level-specific throughout the planning store (the code
//! column of `kepmen_900_prog` is `kode_rek_900prog`, not a shared `code`),
//! so every data access goes through this one explicit mapping instead of
//! interpolating field names from level strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HierarchyLevel;

/// Which of the three table families a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Immutable Kepmen catalog, used only to seed new rows.
    Reference,
    /// Editable master data.
    Master,
    /// Strategic plan (Renstra) with four-year targets and budgets.
    StrategicPlan,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Reference => "reference",
            DatasetKind::Master => "master",
            DatasetKind::StrategicPlan => "renstra",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column names for the four target/budget year pairs of a Renstra table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanFields {
    pub target: [&'static str; 4],
    pub anggaran: [&'static str; 4],
}

/// Physical table and column names for one (dataset, level) pair.
///
/// `sasaran`/`indikator`/`satuan` are `None` exactly for Urusan tables;
/// `parent_id` is `None` for Urusan tables and for the whole reference
/// catalog (Kepmen rows carry no hierarchy linkage); `plan` is present
/// exactly for Renstra tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    pub table: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub sasaran: Option<&'static str>,
    pub indikator: Option<&'static str>,
    pub satuan: Option<&'static str>,
    pub parent_id: Option<&'static str>,
    pub plan: Option<PlanFields>,
}

/// Resolves the field set for a dataset and hierarchy level.
///
/// Pure and total: every combination has an entry, and there are no error
/// conditions.
pub fn field_set(kind: DatasetKind, level: HierarchyLevel) -> FieldSet {
    use DatasetKind::*;
    use HierarchyLevel::*;

    match (kind, level) {
        (Reference, Urusan) => FieldSet {
            table: "kepmen_900_urusan",
            code: "kode_rek_900urusan",
            name: "uraian_900urusan",
            sasaran: None,
            indikator: None,
            satuan: None,
            parent_id: None,
            plan: None,
        },
        (Reference, Program) => FieldSet {
            table: "kepmen_900_prog",
            code: "kode_rek_900prog",
            name: "uraian_900prog",
            sasaran: Some("sasaran_900prog"),
            indikator: Some("indikator_900prog"),
            satuan: Some("satuan_900prog"),
            parent_id: None,
            plan: None,
        },
        (Reference, Kegiatan) => FieldSet {
            table: "kepmen_900_keg",
            code: "kode_rek_900keg",
            name: "uraian_900keg",
            sasaran: Some("sasaran_900keg"),
            indikator: Some("indikator_900keg"),
            satuan: Some("satuan_900keg"),
            parent_id: None,
            plan: None,
        },
        (Reference, SubKegiatan) => FieldSet {
            table: "kepmen_900_subkeg",
            code: "kode_rek_900subkeg",
            name: "uraian_900subkeg",
            sasaran: Some("sasaran_900subkeg"),
            indikator: Some("indikator_900subkeg"),
            satuan: Some("satuan_900subkeg"),
            parent_id: None,
            plan: None,
        },
        (Master, Urusan) => FieldSet {
            table: "master_urusan",
            code: "kode_rek_urusan",
            name: "uraian_urusan",
            sasaran: None,
            indikator: None,
            satuan: None,
            parent_id: None,
            plan: None,
        },
        (Master, Program) => FieldSet {
            table: "master_prog",
            code: "kode_rek_prog",
            name: "uraian_prog",
            sasaran: Some("sasaran_prog"),
            indikator: Some("indikator_prog"),
            satuan: Some("satuan_prog"),
            parent_id: Some("urusan_id"),
            plan: None,
        },
        (Master, Kegiatan) => FieldSet {
            table: "master_keg",
            code: "kode_rek_keg",
            name: "uraian_keg",
            sasaran: Some("sasaran_keg"),
            indikator: Some("indikator_keg"),
            satuan: Some("satuan_keg"),
            parent_id: Some("program_id"),
            plan: None,
        },
        (Master, SubKegiatan) => FieldSet {
            table: "master_subkeg",
            code: "kode_rek_subkeg",
            name: "uraian_subkeg",
            sasaran: Some("sasaran_subkeg"),
            indikator: Some("indikator_subkeg"),
            satuan: Some("satuan_subkeg"),
            parent_id: Some("kegiatan_id"),
            plan: None,
        },
        (StrategicPlan, Urusan) => FieldSet {
            table: "renstra_urusan",
            code: "renstra_kode_rek_urusan",
            name: "renstra_uraian_urusan",
            sasaran: None,
            indikator: None,
            satuan: None,
            parent_id: None,
            plan: Some(PlanFields {
                target: [
                    "renstra_targetn1_urusan",
                    "renstra_targetn2_urusan",
                    "renstra_targetn3_urusan",
                    "renstra_targetn4_urusan",
                ],
                anggaran: [
                    "renstra_anggarann1_urusan",
                    "renstra_anggarann2_urusan",
                    "renstra_anggarann3_urusan",
                    "renstra_anggarann4_urusan",
                ],
            }),
        },
        (StrategicPlan, Program) => FieldSet {
            table: "renstra_prog",
            code: "renstra_kode_rek_prog",
            name: "renstra_uraian_prog",
            sasaran: Some("renstra_sasaran_prog"),
            indikator: Some("renstra_indikator_prog"),
            satuan: Some("renstra_satuan_prog"),
            parent_id: Some("urusan_id"),
            plan: Some(PlanFields {
                target: [
                    "renstra_targetn1_prog",
                    "renstra_targetn2_prog",
                    "renstra_targetn3_prog",
                    "renstra_targetn4_prog",
                ],
                anggaran: [
                    "renstra_anggarann1_prog",
                    "renstra_anggarann2_prog",
                    "renstra_anggarann3_prog",
                    "renstra_anggarann4_prog",
                ],
            }),
        },
        (StrategicPlan, Kegiatan) => FieldSet {
            table: "renstra_keg",
            code: "renstra_kode_rek_keg",
            name: "renstra_uraian_keg",
            sasaran: Some("renstra_sasaran_keg"),
            indikator: Some("renstra_indikator_keg"),
            satuan: Some("renstra_satuan_keg"),
            parent_id: Some("program_id"),
            plan: Some(PlanFields {
                target: [
                    "renstra_targetn1_keg",
                    "renstra_targetn2_keg",
                    "renstra_targetn3_keg",
                    "renstra_targetn4_keg",
                ],
                anggaran: [
                    "renstra_anggarann1_keg",
                    "renstra_anggarann2_keg",
                    "renstra_anggarann3_keg",
                    "renstra_anggarann4_keg",
                ],
            }),
        },
        (StrategicPlan, SubKegiatan) => FieldSet {
            table: "renstra_subkeg",
            code: "renstra_kode_rek_subkeg",
            name: "renstra_uraian_subkeg",
            sasaran: Some("renstra_sasaran_subkeg"),
            indikator: Some("renstra_indikator_subkeg"),
            satuan: Some("renstra_satuan_subkeg"),
            parent_id: Some("kegiatan_id"),
            plan: Some(PlanFields {
                target: [
                    "renstra_targetn1_subkeg",
                    "renstra_targetn2_subkeg",
                    "renstra_targetn3_subkeg",
                    "renstra_targetn4_subkeg",
                ],
                anggaran: [
                    "renstra_anggarann1_subkeg",
                    "renstra_anggarann2_subkeg",
                    "renstra_anggarann3_subkeg",
                    "renstra_anggarann4_subkeg",
                ],
            }),
        },
    }
}

/// The field set of the level's parent table within the same dataset.
pub fn parent_field_set(kind: DatasetKind, level: HierarchyLevel) -> Option<FieldSet> {
    level.parent().map(|parent| field_set(kind, parent))
}
