use cardio_report::{
    generate, render, RenderOptions, Report, ReportFormat, ReportProfile, StatusLevel,
};
use cardio_risk::{ClinicalInputs, Phenotype, RoundingPolicy, Sex};
use pretty_assertions::assert_eq;

fn monw_report() -> Report {
    let inputs = ClinicalInputs::new(Sex::Female, 30, 22.0, 85.0, 1.5, 1.1).unwrap();
    generate(&ReportProfile::default(), &inputs, RoundingPolicy::default()).unwrap()
}

fn options(format: ReportFormat, include_rationale: bool) -> RenderOptions {
    RenderOptions {
        format,
        include_rationale,
    }
}

#[test]
fn text_report_shows_headline_and_warning() {
    let text = render(&monw_report(), options(ReportFormat::Text, false)).unwrap();
    assert!(text.starts_with("Global Precision Cardio-Metabolic Tool\n"));
    assert!(text.contains("VAI Index            2.78"));
    assert!(text.contains("Chronological Age    30"));
    assert!(text.contains("Metabolic Age        35 (+5)"));
    assert!(text.contains("WARNING: Elevated cardio-metabolic risk markers detected"));
    assert!(text.contains("  - High Visceral Adiposity (VAI > 1.9)"));
    assert!(text.contains("Phenotype: Metabolically Obese, Normal Weight (MONW)"));
    assert!(!text.contains("References"));
}

#[test]
fn text_report_can_append_rationale() {
    let text = render(&monw_report(), options(ReportFormat::Text, true)).unwrap();
    assert!(text.contains("Clinical Rationale"));
    assert!(text.contains("Global Clinical Utility"));
    assert!(text.contains("  1. Amato MC, et al. Diabetes Care. 2010."));
}

#[test]
fn markdown_report_has_metric_table() {
    let md = render(&monw_report(), options(ReportFormat::Markdown, false)).unwrap();
    assert!(md.starts_with("# Global Precision Cardio-Metabolic Tool"));
    assert!(md.contains("| 2.78 | 30 | 35 (+5) |"));
    assert!(md.contains("> **Warning:**"));
}

#[test]
fn json_report_uses_stable_identifiers() {
    let json = render(&monw_report(), options(ReportFormat::Json, false)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["assessment"]["risk_flags"][0], "high_visceral_adiposity");
    assert_eq!(value["assessment"]["metabolic_age"], 35);
    assert_eq!(value["findings"][0]["description"], "High Visceral Adiposity (VAI > 1.9)");
    assert_eq!(value["phenotype"], "metabolically_obese_normal_weight");
    assert_eq!(value["headline"]["delta_tone"], "worse");
    assert_eq!(value["status"]["level"], "warning");
    assert_eq!(value["inputs"]["sex"], "female");
    assert!(value.get("references").is_none());
}

#[test]
fn json_report_includes_references_on_request() {
    let json = render(&monw_report(), options(ReportFormat::Json, true)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["references"].as_array().unwrap().len(), 10);
    assert_eq!(value["rationale"][1]["heading"], "Global Clinical Utility");
}

#[test]
fn custom_profile_replaces_copy_text() {
    let profile = ReportProfile {
        title: "Hidden Risk Screen".into(),
        subtitle: "Clinic edition".into(),
    };
    let inputs = ClinicalInputs::new(Sex::Male, 25, 22.0, 85.0, 1.5, 1.1).unwrap();
    let report = generate(&profile, &inputs, RoundingPolicy::HalfEven).unwrap();
    assert_eq!(report.status.level, StatusLevel::Success);
    assert_eq!(report.phenotype, Phenotype::NoElevatedMarkers);

    let text = render(&report, options(ReportFormat::Text, false)).unwrap();
    assert!(text.starts_with("Hidden Risk Screen\nClinic edition\n"));
    assert!(text.contains("OK: No elevated risk markers detected"));
    assert!(text.contains("[low] routine_care"));
}
