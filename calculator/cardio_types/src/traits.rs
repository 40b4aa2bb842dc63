// Validation primitives shared by the clinical input types

use serde::{Deserialize, Serialize};

/// Inclusive bounds for a single clinical measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN and infinities are never contained.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Returns `OutOfRange` for `field` when `value` falls outside the bounds.
    pub fn check(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                field,
                min: self.min,
                max: self.max,
                actual: value,
            })
        }
    }
}

/// Accepted range per input field. The default table holds the clinically
/// constrained ranges of the calculator form; a narrower table can be passed
/// to `Validatable::validate_with_ctx` for site-specific limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRanges {
    /// Years
    pub age: Bounds,
    /// kg/m²
    pub bmi: Bounds,
    /// cm
    pub waist_circumference: Bounds,
    /// mmol/L
    pub triglycerides: Bounds,
    /// mmol/L
    pub hdl_cholesterol: Bounds,
    /// mg/dL, 0 means not measured
    pub lipoprotein_a: Bounds,
}

impl ClinicalRanges {
    pub const DECLARED: ClinicalRanges = ClinicalRanges {
        age: Bounds::new(18.0, 95.0),
        bmi: Bounds::new(15.0, 45.0),
        waist_circumference: Bounds::new(60.0, 150.0),
        triglycerides: Bounds::new(0.5, 10.0),
        hdl_cholesterol: Bounds::new(0.5, 3.5),
        lipoprotein_a: Bounds::new(0.0, 300.0),
    };
}

impl Default for ClinicalRanges {
    fn default() -> Self {
        Self::DECLARED
    }
}

/// Simple validation trait used by domain types
pub trait Validatable {
    /// Validation against the declared clinical ranges
    fn validate(&self) -> Result<(), ValidationError>;

    /// Validation against a caller-supplied range table.
    /// Default implementation falls back to `validate()`.
    fn validate_with_ctx(&self, ctx: &ClinicalRanges) -> Result<(), ValidationError> {
        let _ = ctx;
        self.validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },
    InvalidFormat {
        field: &'static str,
        message: &'static str,
    },
    /// A derived quantity would make the result undefined (e.g. a zero denominator).
    InvariantViolation(&'static str),
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => Some(*field),
            ValidationError::InvariantViolation(_) => None,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "Field '{field}' value {actual} is out of allowed range [{min}, {max}]."
            ),
            ValidationError::InvalidFormat { field, message } => {
                write!(f, "Field '{field}' has invalid format: {message}.")
            }
            ValidationError::InvariantViolation(msg) => write!(f, "Invariant violation: {msg}."),
        }
    }
}

impl std::error::Error for ValidationError {}
