//! Static educational text shown next to every result. Nothing here depends on
//! the computed assessment.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RationaleSection {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub authors: &'static str,
    pub journal: &'static str,
    pub year: u16,
}

impl Reference {
    pub const fn new(authors: &'static str, journal: &'static str, year: u16) -> Self {
        Self {
            authors,
            journal,
            year,
        }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}. {}.", self.authors, self.journal, self.year)
    }
}

pub const CLINICAL_RATIONALE: &[RationaleSection] = &[
    RationaleSection {
        heading: "What is the Visceral Adiposity Index (VAI)?",
        points: &[
            "The VAI is a sex-specific mathematical model that serves as a reliable indicator of visceral fat function and cellular adipose tissue dysregulation.",
            "It integrates anthropometric data (BMI and Waist Circumference) with functional metabolic markers (Triglycerides and HDL) to provide a holistic risk profile.",
            "Traditional metrics like BMI fail to differentiate between subcutaneous fat and dangerous ectopic visceral fat.",
            "Consequently, the VAI identifies \"Metabolically Obese, Normal Weight\" (MONW) individuals who possess high cardiovascular risk despite a standard body weight.",
        ],
    },
    RationaleSection {
        heading: "Global Clinical Utility",
        points: &[
            "Across diverse global populations, obesity and metabolic syndrome are rising sharply due to nutritional and lifestyle shifts.",
            "High visceral adiposity is a primary driver of systemic inflammation and insulin resistance regardless of geographic location.",
            "Early intervention through lifestyle modification or metformin has been proven to significantly reduce diabetes incidence.",
            "Cardiovascular disease prediction requires integrating multiple risk factor categories rather than relying on isolated variables.",
            "Lipoprotein(a) is a genetically determined, independent causal factor for atherosclerosis and is a critical \"risk-enhancing\" marker for patients worldwide.",
            "Managing blood cholesterol through targeted, precision assessment is now the global gold standard for preventing premature mortality.",
            "Global health equity requires using advanced metrics to uncover hidden risks in populations that do not fit traditional \"obese\" phenotypes.",
        ],
    },
];

pub const REFERENCES: &[Reference] = &[
    Reference::new("Amato MC, et al", "Diabetes Care", 2010),
    Reference::new("Enas EA, et al", "J CardioMetab Syndr", 2007),
    Reference::new("Misra A, et al", "J Clin Endocrinol Metab", 2009),
    Reference::new("Toth PP, et al", "Eur J Prev Cardiol", 2019),
    Reference::new("Amato MC & Giordano C", "Expert Rev Endocrinol Metab", 2014),
    Reference::new("Unni S, et al", "Glob Health Action", 2014),
    Reference::new("Yajnik CS, et al", "Int J Obes", 2003),
    Reference::new("Knowler WC, et al", "N Engl J Med", 2002),
    Reference::new("Wilson PW, et al", "Circulation", 1998),
    Reference::new("Grundy SM, et al", "J Am Coll Cardiol", 2019),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_list_is_complete_and_formatted() {
        assert_eq!(REFERENCES.len(), 10);
        assert_eq!(REFERENCES[0].to_string(), "Amato MC, et al. Diabetes Care. 2010.");
    }
}
