//! Concrete Grades (TIS 166-2549)
//!
//! Ready-mixed concrete strength classes with their specified compressive
//! strength fc', plus the material constants shared by every grade.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, GradeKind};

/// A concrete strength class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteGrade {
    /// Grade code, cylinder/cube strength (e.g., "C25/30")
    pub code: String,

    /// Specified compressive strength fc' (MPa)
    pub fc_mpa: f64,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl ConcreteGrade {
    pub fn new(code: impl Into<String>, fc_mpa: f64, description: impl Into<String>) -> Self {
        ConcreteGrade {
            code: code.into(),
            fc_mpa,
            description: description.into(),
        }
    }

    /// Modulus of elasticity Ec = k·√fc' (MPa)
    pub fn elastic_modulus_mpa(&self, factor: f64) -> f64 {
        factor * self.fc_mpa.sqrt()
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (fc' = {} MPa)", self.code, self.fc_mpa)
    }
}

/// Constants that apply to all concrete grades
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcreteProperties {
    /// Unit weight γc (kN/m³)
    pub unit_weight_kn_m3: f64,
    /// Coefficient k in Ec = k·√fc' (MPa)
    pub elastic_modulus_factor: f64,
    /// Poisson's ratio
    pub poisson_ratio: f64,
    /// Coefficient of thermal expansion (1/°C)
    pub thermal_expansion_per_c: f64,
}

impl Default for ConcreteProperties {
    fn default() -> Self {
        ConcreteProperties {
            unit_weight_kn_m3: 24.0,
            elastic_modulus_factor: 4700.0,
            poisson_ratio: 0.2,
            thermal_expansion_per_c: 10e-6,
        }
    }
}

/// Ordered table of concrete grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteStandard {
    pub grades: Vec<ConcreteGrade>,

    #[serde(default)]
    pub properties: ConcreteProperties,
}

impl ConcreteStandard {
    /// Thai TIS 166-2549 ready-mixed concrete classes
    pub fn thai_tis() -> Self {
        ConcreteStandard {
            grades: vec![
                ConcreteGrade::new("C15/20", 15.0, "General works"),
                ConcreteGrade::new("C20/25", 20.0, "Light structural works"),
                ConcreteGrade::new("C25/30", 25.0, "General structural works"),
                ConcreteGrade::new("C30/37", 30.0, "Medium structural works"),
                ConcreteGrade::new("C35/45", 35.0, "Heavy structural works"),
                ConcreteGrade::new("C40/50", 40.0, "Special structural works"),
                ConcreteGrade::new("C45/55", 45.0, "High-strength structural works"),
                ConcreteGrade::new("C50/60", 50.0, "Very high-strength structural works"),
            ],
            properties: ConcreteProperties::default(),
        }
    }

    /// Look up a grade by exact code
    pub fn lookup(&self, code: &str) -> CalcResult<&ConcreteGrade> {
        self.grades
            .iter()
            .find(|g| g.code == code)
            .ok_or_else(|| CalcError::unknown_grade(GradeKind::Concrete, code))
    }

    /// Compressive strength for a grade code (MPa)
    pub fn fc_mpa(&self, code: &str) -> CalcResult<f64> {
        self.lookup(code).map(|g| g.fc_mpa)
    }

    /// Grade codes in table order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|g| g.code.as_str())
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.grades.is_empty() {
            return Err(CalcError::invalid_standards("concrete table is empty"));
        }
        for (i, grade) in self.grades.iter().enumerate() {
            if !(grade.fc_mpa.is_finite() && grade.fc_mpa > 0.0) {
                return Err(CalcError::invalid_standards(format!(
                    "concrete grade '{}' has non-positive fc'",
                    grade.code
                )));
            }
            if self.grades[..i].iter().any(|g| g.code == grade.code) {
                return Err(CalcError::invalid_standards(format!(
                    "duplicate concrete grade '{}'",
                    grade.code
                )));
            }
        }
        let props = &self.properties;
        if !(props.unit_weight_kn_m3.is_finite() && props.unit_weight_kn_m3 > 0.0) {
            return Err(CalcError::invalid_standards("concrete unit weight must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_grades() {
        let concrete = ConcreteStandard::thai_tis();
        assert_eq!(concrete.grades.len(), 8);
        assert_eq!(concrete.fc_mpa("C25/30").unwrap(), 25.0);
        assert_eq!(concrete.fc_mpa("C50/60").unwrap(), 50.0);
        assert_eq!(concrete.codes().next(), Some("C15/20"));
    }

    #[test]
    fn test_unknown_grade() {
        let concrete = ConcreteStandard::thai_tis();
        let err = concrete.lookup("C60/75").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_elastic_modulus() {
        let concrete = ConcreteStandard::thai_tis();
        let c25 = concrete.lookup("C25/30").unwrap();
        // Ec = 4700 * sqrt(25) = 23500 MPa
        assert_eq!(c25.elastic_modulus_mpa(concrete.properties.elastic_modulus_factor), 23_500.0);
    }

    #[test]
    fn test_default_properties() {
        let props = ConcreteProperties::default();
        assert_eq!(props.unit_weight_kn_m3, 24.0);
        assert_eq!(props.poisson_ratio, 0.2);
    }
}
