//! Load cases and the strength design combination
//!
//! # Overview
//!
//! - [`LoadType`] - Load categories (D, L, SW)
//! - [`LoadCase`] - A collection of service load values for one action (axial or moment)
//! - [`LoadCombination`] - Factors applied to a load case
//! - [`strength_combination`] - `1.4D + 1.7L` with the cap weight as dead load
//!
//! # Example
//!
//! ```
//! use pilecap_core::loads::{strength_combination, LoadCase, LoadType};
//! use pilecap_core::settings::DesignSettings;
//!
//! let axial = LoadCase::new("Column axial")
//!     .with_load(LoadType::Dead, 48.0)   // kN
//!     .with_load(LoadType::Live, 30.0);  // kN
//!
//! let pu = strength_combination(&DesignSettings::default()).apply(&axial);
//! assert!((pu - 118.2).abs() < 1e-9);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{strength_combination, LoadCombination};
pub use load_types::LoadType;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A collection of load values by type for one action
///
/// LoadCase stores unfactored (service) values. Axial forces are in kN,
/// moments in kN·m; the caller decides which by building separate cases.
///
/// # Example
/// ```
/// use pilecap_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Column axial")
///     .with_load(LoadType::Dead, 48.0)
///     .with_load(LoadType::Live, 30.0);
///
/// assert_eq!(case.get(LoadType::Dead), 48.0);
/// assert_eq!(case.get(LoadType::SelfWeight), 0.0);
/// ```
///
/// # JSON Format
/// ```json
/// {
///   "label": "Column axial",
///   "loads": { "Dead": 48.0, "Live": 30.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// User-provided label for this load case
    pub label: String,

    /// Load values keyed by type
    pub loads: BTreeMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: BTreeMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_case_builder() {
        let case = LoadCase::new("Test")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Live, 20.0)
            .with_load(LoadType::Live, 25.0);

        assert_eq!(case.label, "Test");
        assert_eq!(case.get(LoadType::Dead), 10.0);
        assert_eq!(case.get(LoadType::Live), 25.0);
        assert_eq!(case.get(LoadType::SelfWeight), 0.0);
    }

    #[test]
    fn test_load_case_serialization() {
        let case = LoadCase::new("Column")
            .with_load(LoadType::Dead, 48.0)
            .with_load(LoadType::Live, 30.0);

        let json = serde_json::to_string(&case).unwrap();
        assert_eq!(json, r#"{"label":"Column","loads":{"Dead":48.0,"Live":30.0}}"#);
        let parsed: LoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, case);
    }
}
