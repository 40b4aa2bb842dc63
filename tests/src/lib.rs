//! Reference patients shared by the scenario tests.
//!
//! Expected VAI values were regenerated from the published formula and locked
//! here; the rounded value is what `assess` reports.

use cardio_risk::RiskFlag;
use cardio_types::{ClinicalInputs, Sex};

pub struct Fixture {
    pub name: &'static str,
    pub sex: Sex,
    pub age: u32,
    pub bmi: f64,
    pub waist_circumference: f64,
    pub triglycerides: f64,
    pub hdl_cholesterol: f64,
    pub lipoprotein_a: f64,
    pub raw_vai: f64,
    pub reported_vai: f64,
    pub metabolic_age: u32,
    pub flags: &'static [RiskFlag],
}

impl Fixture {
    pub fn inputs(&self) -> ClinicalInputs {
        ClinicalInputs::new(
            self.sex,
            self.age,
            self.bmi,
            self.waist_circumference,
            self.triglycerides,
            self.hdl_cholesterol,
        )
        .and_then(|i| i.with_lipoprotein_a(self.lipoprotein_a))
        .unwrap_or_else(|e| panic!("fixture '{}' is invalid: {e}", self.name))
    }
}

pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "male form defaults",
        sex: Sex::Male,
        age: 25,
        bmi: 22.0,
        waist_circumference: 85.0,
        triglycerides: 1.5,
        hdl_cholesterol: 1.1,
        lipoprotein_a: 0.0,
        raw_vai: 1.819_081_420_788_356_8,
        reported_vai: 1.82,
        metabolic_age: 25,
        flags: &[],
    },
    Fixture {
        name: "female normal weight, high VAI",
        sex: Sex::Female,
        age: 30,
        bmi: 22.0,
        waist_circumference: 85.0,
        triglycerides: 1.5,
        hdl_cholesterol: 1.1,
        lipoprotein_a: 0.0,
        raw_vai: 2.782_861_022_369_722,
        reported_vai: 2.78,
        metabolic_age: 35,
        flags: &[RiskFlag::HighVisceralAdiposity],
    },
    Fixture {
        name: "lean male, elevated Lp(a)",
        sex: Sex::Male,
        age: 40,
        bmi: 22.0,
        waist_circumference: 70.0,
        triglycerides: 0.8,
        hdl_cholesterol: 1.6,
        lipoprotein_a: 51.0,
        raw_vai: 0.549_291_252_551_778_4,
        reported_vai: 0.55,
        metabolic_age: 48,
        flags: &[RiskFlag::ElevatedLipoproteinA],
    },
    Fixture {
        name: "lean female, Lp(a) at threshold",
        sex: Sex::Female,
        age: 45,
        bmi: 22.0,
        waist_circumference: 70.0,
        triglycerides: 0.8,
        hdl_cholesterol: 1.6,
        lipoprotein_a: 50.0,
        raw_vai: 0.840_314_896_950_857_3,
        reported_vai: 0.84,
        metabolic_age: 45,
        flags: &[],
    },
    Fixture {
        name: "obese male, both markers",
        sex: Sex::Male,
        age: 52,
        bmi: 30.0,
        waist_circumference: 110.0,
        triglycerides: 2.5,
        hdl_cholesterol: 0.9,
        lipoprotein_a: 120.0,
        raw_vai: 4.044_746_062_926_705,
        reported_vai: 4.04,
        metabolic_age: 65,
        flags: &[RiskFlag::HighVisceralAdiposity, RiskFlag::ElevatedLipoproteinA],
    },
];
