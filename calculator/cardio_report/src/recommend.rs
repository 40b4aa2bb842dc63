use cardio_risk::{Phenotype, RiskAssessment, RiskFlag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub rationale: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(action: &str, rationale: impl Into<String>, priority: Priority) -> Self {
        Self {
            action: action.to_string(),
            rationale: rationale.into(),
            priority,
        }
    }
}

/// Next steps for one assessment, flag order first, then phenotype notes.
pub fn suggest_next_steps(
    assessment: &RiskAssessment,
    phenotype: Phenotype,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    for flag in &assessment.risk_flags {
        match flag {
            RiskFlag::HighVisceralAdiposity => out.push(Recommendation::new(
                "lifestyle_intervention",
                format!(
                    "VAI {:.2} indicates adipose tissue dysfunction; early lifestyle modification or metformin reduces diabetes incidence",
                    assessment.vai
                ),
                Priority::High,
            )),
            RiskFlag::ElevatedLipoproteinA => out.push(Recommendation::new(
                "lipid_risk_review",
                "Lp(a) is a genetically determined, independent causal factor for atherosclerosis; treat as a risk-enhancing marker",
                Priority::High,
            )),
        }
    }

    if phenotype.is_hidden_risk() {
        out.push(Recommendation::new(
            "look_beyond_bmi",
            "normal BMI masks elevated visceral or genetic risk (MONW)",
            Priority::Medium,
        ));
    }

    if out.is_empty() {
        out.push(Recommendation::new(
            "routine_care",
            "no elevated risk markers detected",
            Priority::Low,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assessment(flags: Vec<RiskFlag>) -> RiskAssessment {
        RiskAssessment {
            vai: 2.4,
            metabolic_age: 40,
            risk_flags: flags,
            age_delta: 0,
        }
    }

    #[test]
    fn no_flags_means_routine_care() {
        let recs = suggest_next_steps(&assessment(vec![]), Phenotype::NoElevatedMarkers);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].action, "routine_care");
        assert_eq!(recs[0].priority, Priority::Low);
    }

    #[test]
    fn monw_adds_bmi_note_after_flag_actions() {
        let recs = suggest_next_steps(
            &assessment(vec![RiskFlag::HighVisceralAdiposity]),
            Phenotype::MetabolicallyObeseNormalWeight,
        );
        let actions: Vec<&str> = recs.iter().map(|r| r.action.as_str()).collect();
        assert_eq!(actions, vec!["lifestyle_intervention", "look_beyond_bmi"]);
        assert!(recs[0].rationale.contains("VAI 2.40"));
    }

    #[test]
    fn both_flags_produce_two_high_priority_actions() {
        let recs = suggest_next_steps(
            &assessment(vec![
                RiskFlag::HighVisceralAdiposity,
                RiskFlag::ElevatedLipoproteinA,
            ]),
            Phenotype::ElevatedRisk,
        );
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.priority == Priority::High));
    }
}
