use std::fmt;
use std::str::FromStr;

use cardio_types::ClinicalInputs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::RiskResult;
use crate::rules::{evaluate_rules, RiskFlag};
use crate::vai::compute_vai;

/// Decimal places kept on the reported VAI.
pub const VAI_DISPLAY_DECIMALS: i32 = 2;

/// How reported values are rounded to the nearest step.
///
/// Metabolic age is chronological age plus whole-year offsets, so the policy
/// only changes integer results if fractional ages are ever introduced. It
/// does affect the two-decimal VAI at exact ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    #[default]
    HalfAwayFromZero,
    HalfEven,
}

impl RoundingPolicy {
    pub fn round(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::HalfAwayFromZero => value.round(),
            RoundingPolicy::HalfEven => value.round_ties_even(),
        }
    }

    pub fn round_to(self, value: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        self.round(value * scale) / scale
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingPolicy::HalfAwayFromZero => "half-away-from-zero",
            RoundingPolicy::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rounding policy '{0}' (expected 'half-away-from-zero' or 'half-even')")]
pub struct ParseRoundingPolicyError(pub String);

impl FromStr for RoundingPolicy {
    type Err = ParseRoundingPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "half-away-from-zero" | "half-up" => Ok(RoundingPolicy::HalfAwayFromZero),
            "half-even" | "bankers" => Ok(RoundingPolicy::HalfEven),
            other => Err(ParseRoundingPolicyError(other.to_string())),
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Rounded to two decimals.
    pub vai: f64,
    pub metabolic_age: u32,
    /// VAI flag first, Lp(a) flag second.
    pub risk_flags: Vec<RiskFlag>,
    /// `metabolic_age - age`; positive means the profile looks older.
    pub age_delta: i32,
}

impl RiskAssessment {
    pub fn has_flags(&self) -> bool {
        !self.risk_flags.is_empty()
    }
}

/// Evaluates `inputs` with the default rounding policy.
pub fn assess(inputs: &ClinicalInputs) -> RiskResult<RiskAssessment> {
    assess_with(inputs, RoundingPolicy::default())
}

/// Thresholds are applied to the unrounded VAI; rounding happens last.
pub fn assess_with(
    inputs: &ClinicalInputs,
    rounding: RoundingPolicy,
) -> RiskResult<RiskAssessment> {
    let vai = compute_vai(inputs)?;
    let outcome = evaluate_rules(inputs.age(), vai, inputs.lipoprotein_a());

    // Both values are bounded by age + 13, well inside u32/i32.
    let metabolic_age = rounding.round(outcome.metabolic_age) as u32;
    let age_delta = rounding.round(outcome.metabolic_age - f64::from(inputs.age())) as i32;

    log::debug!(
        "assess: sex={} vai={vai:.4} metabolic_age={metabolic_age} flags={:?}",
        inputs.sex(),
        outcome.flags
    );

    Ok(RiskAssessment {
        vai: rounding.round_to(vai, VAI_DISPLAY_DECIMALS),
        metabolic_age,
        risk_flags: outcome.flags,
        age_delta,
    })
}
