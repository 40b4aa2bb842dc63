//! Sex-specific Visceral Adiposity Index (Amato et al., Diabetes Care 2010).
//!
//! ```text
//! male:   VAI = WC / (39.68 + 1.88 * BMI) * (TG / 1.03) * (1.31 / HDL)
//! female: VAI = WC / (36.58 + 1.89 * BMI) * (TG / 0.81) * (1.52 / HDL)
//! ```
//!
//! WC in cm, BMI in kg/m², TG and HDL in mmol/L.

use cardio_types::{ClinicalInputs, Sex, ValidationError};

use crate::error::RiskResult;

/// One sex-specific coefficient set of the VAI formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaiCoefficients {
    pub waist_intercept: f64,
    pub bmi_slope: f64,
    pub triglyceride_divisor: f64,
    pub hdl_numerator: f64,
}

impl VaiCoefficients {
    pub const MALE: VaiCoefficients = VaiCoefficients {
        waist_intercept: 39.68,
        bmi_slope: 1.88,
        triglyceride_divisor: 1.03,
        hdl_numerator: 1.31,
    };

    pub const FEMALE: VaiCoefficients = VaiCoefficients {
        waist_intercept: 36.58,
        bmi_slope: 1.89,
        triglyceride_divisor: 0.81,
        hdl_numerator: 1.52,
    };

    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::MALE,
            Sex::Female => Self::FEMALE,
        }
    }

    /// Evaluates the formula on raw measurements.
    ///
    /// Inputs are not range-checked here; only the conditions that would make
    /// the result undefined are rejected.
    pub fn evaluate(
        &self,
        bmi: f64,
        waist_circumference: f64,
        triglycerides: f64,
        hdl_cholesterol: f64,
    ) -> RiskResult<f64> {
        if hdl_cholesterol.is_nan() || hdl_cholesterol <= 0.0 {
            return Err(ValidationError::InvariantViolation(
                "hdl_cholesterol must be strictly positive",
            )
            .into());
        }
        let waist_denominator = self.waist_intercept + self.bmi_slope * bmi;
        if waist_denominator.is_nan() || waist_denominator <= 0.0 {
            return Err(ValidationError::InvariantViolation(
                "bmi yields a non-positive waist denominator",
            )
            .into());
        }

        let vai = (waist_circumference / waist_denominator)
            * (triglycerides / self.triglyceride_divisor)
            * (self.hdl_numerator / hdl_cholesterol);

        if !vai.is_finite() {
            return Err(ValidationError::InvariantViolation("VAI is not finite").into());
        }
        Ok(vai)
    }
}

/// Computes the unrounded VAI for validated inputs.
pub fn compute_vai(inputs: &ClinicalInputs) -> RiskResult<f64> {
    VaiCoefficients::for_sex(inputs.sex()).evaluate(
        inputs.bmi(),
        inputs.waist_circumference(),
        inputs.triglycerides(),
        inputs.hdl_cholesterol(),
    )
}
