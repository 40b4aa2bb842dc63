// Clinical input value objects for the cardio-metabolic calculator
// Constructed by a front-end (form, CLI, batch file) and handed to the risk core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traits::{ClinicalRanges, Validatable, ValidationError};

/// Biological sex; selects the VAI coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "Male", alias = "MALE", alias = "m", alias = "M")]
    Male,
    #[serde(alias = "Female", alias = "FEMALE", alias = "f", alias = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(ValidationError::InvalidFormat {
                field: "sex",
                message: "expected 'male' or 'female'",
            }),
        }
    }
}

/// Immutable, range-checked clinical inputs for one evaluation.
///
/// The only ways to obtain a value are [`ClinicalInputs::new`] and
/// deserialization, and both run range validation, so every
/// `ClinicalInputs` in circulation has strictly positive BMI and HDL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClinicalInputs")]
pub struct ClinicalInputs {
    sex: Sex,
    age: u32,
    bmi: f64,
    waist_circumference: f64,
    triglycerides: f64,
    hdl_cholesterol: f64,
    lipoprotein_a: f64,
}

impl ClinicalInputs {
    /// Builds inputs without a lipoprotein(a) measurement.
    pub fn new(
        sex: Sex,
        age: u32,
        bmi: f64,
        waist_circumference: f64,
        triglycerides: f64,
        hdl_cholesterol: f64,
    ) -> Result<Self, ValidationError> {
        let inputs = Self {
            sex,
            age,
            bmi,
            waist_circumference,
            triglycerides,
            hdl_cholesterol,
            lipoprotein_a: 0.0,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Returns a copy carrying a lipoprotein(a) value in mg/dL.
    pub fn with_lipoprotein_a(self, lipoprotein_a: f64) -> Result<Self, ValidationError> {
        ClinicalRanges::DECLARED
            .lipoprotein_a
            .check("lipoprotein_a", lipoprotein_a)?;
        Ok(Self {
            lipoprotein_a,
            ..self
        })
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn waist_circumference(&self) -> f64 {
        self.waist_circumference
    }

    pub fn triglycerides(&self) -> f64 {
        self.triglycerides
    }

    pub fn hdl_cholesterol(&self) -> f64 {
        self.hdl_cholesterol
    }

    /// 0.0 when the value was not provided.
    pub fn lipoprotein_a(&self) -> f64 {
        self.lipoprotein_a
    }
}

impl Validatable for ClinicalInputs {
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with_ctx(&ClinicalRanges::DECLARED)
    }

    fn validate_with_ctx(&self, ctx: &ClinicalRanges) -> Result<(), ValidationError> {
        ctx.age.check("age", f64::from(self.age))?;
        ctx.bmi.check("bmi", self.bmi)?;
        ctx.waist_circumference
            .check("waist_circumference", self.waist_circumference)?;
        ctx.triglycerides.check("triglycerides", self.triglycerides)?;
        ctx.hdl_cholesterol
            .check("hdl_cholesterol", self.hdl_cholesterol)?;
        ctx.lipoprotein_a.check("lipoprotein_a", self.lipoprotein_a)?;
        Ok(())
    }
}

/// Wire shape accepted from JSON/TOML before range validation. Unknown keys
/// are rejected so a misspelled optional field cannot fall back to its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClinicalInputs {
    sex: Sex,
    age: u32,
    bmi: f64,
    #[serde(alias = "wc")]
    waist_circumference: f64,
    #[serde(alias = "tg")]
    triglycerides: f64,
    #[serde(alias = "hdl")]
    hdl_cholesterol: f64,
    #[serde(default, alias = "lpa")]
    lipoprotein_a: Option<f64>,
}

impl TryFrom<RawClinicalInputs> for ClinicalInputs {
    type Error = ValidationError;

    fn try_from(raw: RawClinicalInputs) -> Result<Self, Self::Error> {
        let inputs = ClinicalInputs::new(
            raw.sex,
            raw.age,
            raw.bmi,
            raw.waist_circumference,
            raw.triglycerides,
            raw.hdl_cholesterol,
        )?;
        match raw.lipoprotein_a {
            Some(lpa) => inputs.with_lipoprotein_a(lpa),
            None => Ok(inputs),
        }
    }
}
