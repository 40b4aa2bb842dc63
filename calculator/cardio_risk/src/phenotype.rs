use cardio_types::ClinicalInputs;
use serde::{Deserialize, Serialize};

use crate::assessment::RiskAssessment;

/// BMI below this is treated as normal weight (WHO cut-off).
pub const NORMAL_WEIGHT_BMI_LIMIT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phenotype {
    NoElevatedMarkers,
    ElevatedRisk,
    /// Normal BMI with elevated VAI or Lp(a): the risk BMI alone hides.
    MetabolicallyObeseNormalWeight,
}

impl Phenotype {
    pub fn is_hidden_risk(&self) -> bool {
        matches!(self, Phenotype::MetabolicallyObeseNormalWeight)
    }
}

pub fn classify_phenotype(inputs: &ClinicalInputs, assessment: &RiskAssessment) -> Phenotype {
    if !assessment.has_flags() {
        Phenotype::NoElevatedMarkers
    } else if inputs.bmi() < NORMAL_WEIGHT_BMI_LIMIT {
        Phenotype::MetabolicallyObeseNormalWeight
    } else {
        Phenotype::ElevatedRisk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess;
    use cardio_types::Sex;

    #[test]
    fn normal_bmi_with_high_vai_is_monw() {
        let inputs = ClinicalInputs::new(Sex::Female, 30, 22.0, 85.0, 1.5, 1.1).unwrap();
        let assessment = assess(&inputs).unwrap();
        let phenotype = classify_phenotype(&inputs, &assessment);
        assert_eq!(phenotype, Phenotype::MetabolicallyObeseNormalWeight);
        assert!(phenotype.is_hidden_risk());
    }

    #[test]
    fn overweight_with_flags_is_elevated_risk() {
        let inputs = ClinicalInputs::new(Sex::Male, 52, 30.0, 110.0, 2.5, 0.9).unwrap();
        let assessment = assess(&inputs).unwrap();
        assert_eq!(
            classify_phenotype(&inputs, &assessment),
            Phenotype::ElevatedRisk
        );
    }

    #[test]
    fn no_flags_is_unremarkable_regardless_of_bmi() {
        let inputs = ClinicalInputs::new(Sex::Male, 45, 32.0, 70.0, 0.8, 1.6).unwrap();
        let assessment = assess(&inputs).unwrap();
        assert_eq!(
            classify_phenotype(&inputs, &assessment),
            Phenotype::NoElevatedMarkers
        );
    }
}
