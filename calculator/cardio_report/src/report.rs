use cardio_risk::{
    assess_with, classify_phenotype, ClinicalInputs, Phenotype, RiskAssessment, RiskFlag,
    RiskResult, RoundingPolicy,
};
use serde::{Deserialize, Serialize};

use crate::describe::{flag_description, SUCCESS_MESSAGE, WARNING_MESSAGE};
use crate::recommend::{suggest_next_steps, Recommendation};

pub const DEFAULT_TITLE: &str = "Global Precision Cardio-Metabolic Tool";
pub const DEFAULT_SUBTITLE: &str =
    "Assessing Adipose Tissue Dysfunction and 'Hidden' Metabolic Risk";

/// Copy text that distinguishes one front-end variant from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProfile {
    pub title: String,
    pub subtitle: String,
}

impl Default for ReportProfile {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

/// Direction of the metabolic-age delta. Older is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaTone {
    Better,
    Neutral,
    Worse,
}

impl DeltaTone {
    pub fn from_delta(delta: i32) -> Self {
        match delta.signum() {
            1 => DeltaTone::Worse,
            -1 => DeltaTone::Better,
            _ => DeltaTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    pub vai: f64,
    pub chronological_age: u32,
    pub metabolic_age: u32,
    pub age_delta: i32,
    pub delta_tone: DeltaTone,
}

impl HeadlineMetrics {
    pub fn from_assessment(inputs: &ClinicalInputs, assessment: &RiskAssessment) -> Self {
        Self {
            vai: assessment.vai,
            chronological_age: inputs.age(),
            metabolic_age: assessment.metabolic_age,
            age_delta: assessment.age_delta,
            delta_tone: DeltaTone::from_delta(assessment.age_delta),
        }
    }

    /// Signed delta, e.g. `+13`, `0`.
    pub fn delta_label(&self) -> String {
        if self.age_delta > 0 {
            format!("+{}", self.age_delta)
        } else {
            self.age_delta.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub flag: RiskFlag,
    pub description: String,
}

/// Everything a front-end displays for one "Generate Risk Analysis" action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub subtitle: String,
    pub inputs: ClinicalInputs,
    pub assessment: RiskAssessment,
    pub headline: HeadlineMetrics,
    pub status: Status,
    pub findings: Vec<Finding>,
    pub phenotype: Phenotype,
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    pub fn new(
        profile: &ReportProfile,
        inputs: ClinicalInputs,
        assessment: RiskAssessment,
    ) -> Self {
        let phenotype = classify_phenotype(&inputs, &assessment);
        let findings: Vec<Finding> = assessment
            .risk_flags
            .iter()
            .map(|&flag| Finding {
                flag,
                description: flag_description(flag).to_string(),
            })
            .collect();
        let status = if findings.is_empty() {
            Status {
                level: StatusLevel::Success,
                message: SUCCESS_MESSAGE.to_string(),
            }
        } else {
            Status {
                level: StatusLevel::Warning,
                message: WARNING_MESSAGE.to_string(),
            }
        };

        Self {
            title: profile.title.clone(),
            subtitle: profile.subtitle.clone(),
            headline: HeadlineMetrics::from_assessment(&inputs, &assessment),
            recommendations: suggest_next_steps(&assessment, phenotype),
            inputs,
            assessment,
            status,
            findings,
            phenotype,
        }
    }
}

/// Runs the risk core and assembles the report.
pub fn generate(
    profile: &ReportProfile,
    inputs: &ClinicalInputs,
    rounding: RoundingPolicy,
) -> RiskResult<Report> {
    let assessment = assess_with(inputs, rounding)?;
    log::debug!(
        "generate: {} finding(s), rounding={rounding}",
        assessment.risk_flags.len()
    );
    Ok(Report::new(profile, *inputs, assessment))
}
