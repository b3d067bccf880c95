//! The four nested planning hierarchy levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the planning hierarchy:
/// government affairs area → program → activity → sub-activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HierarchyLevel {
    #[default]
    Urusan,
    Program,
    Kegiatan,
    SubKegiatan,
}

impl HierarchyLevel {
    /// All levels, top to bottom.
    pub const ALL: [HierarchyLevel; 4] = [
        HierarchyLevel::Urusan,
        HierarchyLevel::Program,
        HierarchyLevel::Kegiatan,
        HierarchyLevel::SubKegiatan,
    ];

    /// The level one step up, or `None` for Urusan.
    pub fn parent(&self) -> Option<HierarchyLevel> {
        match self {
            HierarchyLevel::Urusan => None,
            HierarchyLevel::Program => Some(HierarchyLevel::Urusan),
            HierarchyLevel::Kegiatan => Some(HierarchyLevel::Program),
            HierarchyLevel::SubKegiatan => Some(HierarchyLevel::Kegiatan),
        }
    }

    /// The wire/UI string form of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyLevel::Urusan => "urusan",
            HierarchyLevel::Program => "program",
            HierarchyLevel::Kegiatan => "kegiatan",
            HierarchyLevel::SubKegiatan => "sub-kegiatan",
        }
    }

    /// Parses a level string, falling back to Urusan for anything unknown.
    ///
    /// The fallback mirrors the long-standing behavior of the data-entry
    /// screens; it applies only at the string boundary. Typed code carries
    /// the enum and never falls back.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "urusan" => HierarchyLevel::Urusan,
            "program" => HierarchyLevel::Program,
            "kegiatan" => HierarchyLevel::Kegiatan,
            "sub-kegiatan" => HierarchyLevel::SubKegiatan,
            _ => HierarchyLevel::Urusan,
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_chain_walks_to_urusan() {
        assert_eq!(
            HierarchyLevel::SubKegiatan.parent(),
            Some(HierarchyLevel::Kegiatan)
        );
        assert_eq!(
            HierarchyLevel::Kegiatan.parent(),
            Some(HierarchyLevel::Program)
        );
        assert_eq!(
            HierarchyLevel::Program.parent(),
            Some(HierarchyLevel::Urusan)
        );
        assert_eq!(HierarchyLevel::Urusan.parent(), None);
    }

    #[test]
    fn parse_lossy_accepts_all_level_strings() {
        for level in HierarchyLevel::ALL {
            assert_eq!(HierarchyLevel::parse_lossy(level.as_str()), level);
        }
    }

    #[test]
    fn parse_lossy_falls_back_to_urusan() {
        assert_eq!(
            HierarchyLevel::parse_lossy("subkegiatan"),
            HierarchyLevel::Urusan
        );
        assert_eq!(HierarchyLevel::parse_lossy(""), HierarchyLevel::Urusan);
    }

    #[test]
    fn serializes_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&HierarchyLevel::SubKegiatan).unwrap(),
            "\"sub-kegiatan\""
        );
        let level: HierarchyLevel = serde_json::from_str("\"sub-kegiatan\"").unwrap();
        assert_eq!(level, HierarchyLevel::SubKegiatan);
    }
}
