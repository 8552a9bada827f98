//! Load type definitions
//!
//! A two-pile cap carries gravity loads only: the column's dead and live
//! actions plus the cap's own weight.

use serde::{Deserialize, Serialize};

/// Load categories used by the strength combination
///
/// Variants are ordered so that load cases iterate deterministically.
///
/// # Example
/// ```
/// use pilecap_core::loads::LoadType;
///
/// let dead = LoadType::Dead;
/// assert_eq!(dead.code(), "D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load delivered by the column
    Dead,
    /// L - Live load delivered by the column
    Live,
    /// SW - Self-weight of the cap
    SelfWeight,
}

impl LoadType {
    /// Standard abbreviation code (D, L, SW)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::SelfWeight => "SW",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        assert_eq!(LoadType::Dead.code(), "D");
        assert_eq!(LoadType::Live.code(), "L");
        assert_eq!(LoadType::SelfWeight.code(), "SW");
    }


    #[test]
    fn test_ordering() {
        assert!(LoadType::Dead < LoadType::Live);
        assert!(LoadType::Live < LoadType::SelfWeight);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::SelfWeight).unwrap();
        assert_eq!(json, "\"SelfWeight\"");

        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::SelfWeight);
    }
}
