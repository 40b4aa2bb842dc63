// Human-readable wording for the stable identifiers emitted by the risk core

use cardio_risk::{Phenotype, RiskFlag};

pub fn flag_description(flag: RiskFlag) -> &'static str {
    match flag {
        RiskFlag::HighVisceralAdiposity => "High Visceral Adiposity (VAI > 1.9)",
        RiskFlag::ElevatedLipoproteinA => "Elevated Genetic Risk (Lp(a) > 50 mg/dL)",
    }
}

pub fn phenotype_description(phenotype: Phenotype) -> &'static str {
    match phenotype {
        Phenotype::NoElevatedMarkers => "No elevated markers",
        Phenotype::ElevatedRisk => "Elevated cardio-metabolic risk",
        Phenotype::MetabolicallyObeseNormalWeight => "Metabolically Obese, Normal Weight (MONW)",
    }
}

pub const WARNING_MESSAGE: &str = "Elevated cardio-metabolic risk markers detected";
pub const SUCCESS_MESSAGE: &str = "No elevated risk markers detected";
