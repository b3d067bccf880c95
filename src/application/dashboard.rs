//! Dashboard overview: master-data row counts per level.

use serde::{Deserialize, Serialize};

/// Row totals shown on the dashboard tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub urusan: u64,
    pub program: u64,
    pub kegiatan: u64,
    pub sub_kegiatan: u64,
}

impl DashboardCounts {
    /// Total rows across all four levels.
    pub fn total(&self) -> u64 {
        self.urusan + self.program + self.kegiatan + self.sub_kegiatan
    }
}
