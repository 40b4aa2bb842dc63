//! Cardio-metabolic risk core.
//!
//! Maps validated [`ClinicalInputs`] to a [`RiskAssessment`]: the sex-specific
//! Visceral Adiposity Index (VAI) and a "metabolic age" raised by fixed
//! offsets when VAI or lipoprotein(a) cross their thresholds. Everything here
//! is pure and may be called from any number of threads.
//!
//! ```
//! use cardio_risk::{assess, RiskFlag};
//! use cardio_types::{ClinicalInputs, Sex};
//!
//! let inputs = ClinicalInputs::new(Sex::Male, 52, 30.0, 110.0, 2.5, 0.9)
//!     .unwrap()
//!     .with_lipoprotein_a(120.0)
//!     .unwrap();
//! let out = assess(&inputs).unwrap();
//! assert_eq!(out.metabolic_age, 65);
//! assert_eq!(out.risk_flags, vec![RiskFlag::HighVisceralAdiposity, RiskFlag::ElevatedLipoproteinA]);
//! ```

pub mod assessment;
pub mod error;
pub mod phenotype;
pub mod rules;
pub mod vai;

pub use assessment::{assess, assess_with, RiskAssessment, RoundingPolicy};
pub use error::{RiskError, RiskResult};
pub use phenotype::{classify_phenotype, Phenotype};
pub use rules::{evaluate_rules, RiskFlag, RuleOutcome};
pub use vai::{compute_vai, VaiCoefficients};

pub use cardio_types::{ClinicalInputs, Sex};
