//! Reinforcing Steel Grades (TIS 24-2548)
//!
//! Deformed bar grades and their specified yield strengths. The table is
//! ordered as published; lookup is by exact grade code.
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::materials::SteelStandard;
//!
//! let steel = SteelStandard::thai_tis();
//! assert_eq!(steel.fy_mpa("SD40").unwrap(), 390.0);
//! assert!(steel.lookup("SD60").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, GradeKind};

/// A reinforcing steel grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelGrade {
    /// Grade code (e.g., "SD40")
    pub code: String,

    /// Specified yield strength fy (MPa)
    pub fy_mpa: f64,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl SteelGrade {
    pub fn new(code: impl Into<String>, fy_mpa: f64, description: impl Into<String>) -> Self {
        SteelGrade {
            code: code.into(),
            fy_mpa,
            description: description.into(),
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (fy = {} MPa)", self.code, self.fy_mpa)
    }
}

/// Ordered table of steel grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelStandard {
    pub grades: Vec<SteelGrade>,
}

impl SteelStandard {
    /// Thai TIS 24-2548 deformed bar grades
    pub fn thai_tis() -> Self {
        SteelStandard {
            grades: vec![
                SteelGrade::new("SD30", 295.0, "Deformed bar SD30 (fy = 295 MPa)"),
                SteelGrade::new("SD40", 390.0, "Deformed bar SD40 (fy = 390 MPa)"),
                SteelGrade::new("SD50", 490.0, "Deformed bar SD50 (fy = 490 MPa)"),
            ],
        }
    }

    /// Look up a grade by exact code
    pub fn lookup(&self, code: &str) -> CalcResult<&SteelGrade> {
        self.grades
            .iter()
            .find(|g| g.code == code)
            .ok_or_else(|| CalcError::unknown_grade(GradeKind::Steel, code))
    }

    /// Yield strength for a grade code (MPa)
    pub fn fy_mpa(&self, code: &str) -> CalcResult<f64> {
        self.lookup(code).map(|g| g.fy_mpa)
    }

    /// Grade codes in table order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|g| g.code.as_str())
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.grades.is_empty() {
            return Err(CalcError::invalid_standards("steel table is empty"));
        }
        for (i, grade) in self.grades.iter().enumerate() {
            if !(grade.fy_mpa.is_finite() && grade.fy_mpa > 0.0) {
                return Err(CalcError::invalid_standards(format!(
                    "steel grade '{}' has non-positive fy",
                    grade.code
                )));
            }
            if self.grades[..i].iter().any(|g| g.code == grade.code) {
                return Err(CalcError::invalid_standards(format!(
                    "duplicate steel grade '{}'",
                    grade.code
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_grades() {
        let steel = SteelStandard::thai_tis();
        assert_eq!(steel.fy_mpa("SD30").unwrap(), 295.0);
        assert_eq!(steel.fy_mpa("SD40").unwrap(), 390.0);
        assert_eq!(steel.fy_mpa("SD50").unwrap(), 490.0);
        assert_eq!(steel.codes().collect::<Vec<_>>(), vec!["SD30", "SD40", "SD50"]);
    }

    #[test]
    fn test_lookup_is_exact() {
        let steel = SteelStandard::thai_tis();
        let err = steel.lookup("sd40").unwrap_err();
        assert_eq!(err, CalcError::unknown_grade(GradeKind::Steel, "sd40"));
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let mut steel = SteelStandard::thai_tis();
        steel.grades.push(SteelGrade::new("SD40", 400.0, ""));
        assert!(steel.validate().is_err());
    }

    #[test]
    fn test_display() {
        let steel = SteelStandard::thai_tis();
        assert_eq!(steel.lookup("SD40").unwrap().to_string(), "SD40 (fy = 390 MPa)");
    }
}
