use serde::{Deserialize, Serialize};

/// VAI above this value counts as visceral adipose dysfunction.
pub const VAI_THRESHOLD: f64 = 1.9;
/// Lp(a) above this value (mg/dL) counts as elevated genetic risk.
pub const LIPOPROTEIN_A_THRESHOLD: f64 = 50.0;

/// Stable identifier of a triggered risk condition. Wording is left to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    HighVisceralAdiposity,
    ElevatedLipoproteinA,
}

impl RiskFlag {
    /// Evaluation order. Flags are reported in this order.
    pub const ALL: [RiskFlag; 2] = [
        RiskFlag::HighVisceralAdiposity,
        RiskFlag::ElevatedLipoproteinA,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RiskFlag::HighVisceralAdiposity => "high_visceral_adiposity",
            RiskFlag::ElevatedLipoproteinA => "elevated_lipoprotein_a",
        }
    }

    /// Years added to the metabolic age when the flag fires.
    pub fn age_offset_years(&self) -> u32 {
        match self {
            RiskFlag::HighVisceralAdiposity => 5,
            RiskFlag::ElevatedLipoproteinA => 8,
        }
    }

    /// Both comparisons are strict.
    pub fn is_triggered(&self, vai: f64, lipoprotein_a: f64) -> bool {
        match self {
            RiskFlag::HighVisceralAdiposity => vai > VAI_THRESHOLD,
            RiskFlag::ElevatedLipoproteinA => lipoprotein_a > LIPOPROTEIN_A_THRESHOLD,
        }
    }
}

/// Result of the threshold step before any rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub metabolic_age: f64,
    pub flags: Vec<RiskFlag>,
}

/// Applies the independent threshold rules to an unrounded VAI.
pub fn evaluate_rules(age: u32, vai: f64, lipoprotein_a: f64) -> RuleOutcome {
    let mut metabolic_age = f64::from(age);
    let mut flags = Vec::new();
    for flag in RiskFlag::ALL {
        if flag.is_triggered(vai, lipoprotein_a) {
            metabolic_age += f64::from(flag.age_offset_years());
            flags.push(flag);
        }
    }
    RuleOutcome {
        metabolic_age,
        flags,
    }
}
