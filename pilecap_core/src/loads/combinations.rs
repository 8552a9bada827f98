//! Strength Design Load Combination
//!
//! The cap is designed for the single ultimate combination
//! `U = 1.4D + 1.7L`, with the cap self-weight factored as dead load.
//! Factors come from [`DesignSettings`] so a project can adopt a different
//! code without touching the calculation stages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LoadCase;
use crate::settings::DesignSettings;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use pilecap_core::loads::{LoadCase, LoadCombination, LoadType};
///
/// let combo = LoadCombination::new("U", "1.4D + 1.7L")
///     .with_factor(LoadType::Dead, 1.4)
///     .with_factor(LoadType::Live, 1.7);
///
/// let column = LoadCase::new("Column")
///     .with_load(LoadType::Dead, 48.0)
///     .with_load(LoadType::Live, 30.0);
///
/// assert!((combo.apply(&column) - 118.2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier
    pub name: String,

    /// Human-readable equation for display (e.g., "1.4D + 1.7L")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: BTreeMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: BTreeMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the total factored load
    ///
    /// Terms are summed in `LoadType` order, so the same inputs always give
    /// bit-identical results.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }
}

/// Ultimate strength combination built from the settings' load factors
///
/// # Example
/// ```
/// use pilecap_core::loads::{strength_combination, LoadType};
/// use pilecap_core::settings::DesignSettings;
///
/// let combo = strength_combination(&DesignSettings::default());
/// assert_eq!(combo.equation, "1.4D + 1.7L + 1.4SW");
/// assert_eq!(combo.factors[&LoadType::Live], 1.7);
/// ```
pub fn strength_combination(settings: &DesignSettings) -> LoadCombination {
    let mut combo = LoadCombination::new("U", "")
        .with_factor(LoadType::Dead, settings.dead_load_factor)
        .with_factor(LoadType::Live, settings.live_load_factor)
        .with_factor(LoadType::SelfWeight, settings.self_weight_factor);
    combo.equation = combo
        .factors
        .iter()
        .map(|(load_type, factor)| format!("{}{}", factor, load_type))
        .collect::<Vec<_>>()
        .join(" + ");
    combo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strength_factors() {
        let combo = strength_combination(&DesignSettings::default());
        assert_eq!(combo.factors[&LoadType::Dead], 1.4);
        assert_eq!(combo.factors[&LoadType::Live], 1.7);
        assert_eq!(combo.factors[&LoadType::SelfWeight], 1.4);
        assert_eq!(combo.equation, "1.4D + 1.7L + 1.4SW");
    }

    #[test]
    fn test_missing_load_is_zero() {
        let combo = strength_combination(&DesignSettings::default());
        let case = LoadCase::new("Dead only").with_load(LoadType::Dead, 10.0);
        assert!((combo.apply(&case) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_group_load_includes_self_weight() {
        let combo = strength_combination(&DesignSettings::default());
        let case = LoadCase::new("Group")
            .with_load(LoadType::Dead, 48.0)
            .with_load(LoadType::Live, 30.0)
            .with_load(LoadType::SelfWeight, 12.96);
        assert!((combo.apply(&case) - 136.344).abs() < 1e-9);
    }

    #[test]
    fn test_custom_factors() {
        let settings = DesignSettings {
            dead_load_factor: 1.2,
            live_load_factor: 1.6,
            ..DesignSettings::default()
        };
        let combo = strength_combination(&settings);
        let case = LoadCase::new("Column")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Live, 50.0);
        assert!((combo.apply(&case) - 200.0).abs() < 1e-9);
        assert!(combo.equation.starts_with("1.2D + 1.6L"));
    }
}
