//! Presentation layer for the cardio-metabolic calculator.
//!
//! One parameterized renderer over the risk core: resolves flag identifiers to
//! wording, builds the headline metrics and status message, suggests next
//! steps, and renders text, Markdown or JSON. Static clinical rationale and
//! references live in [`rationale`].
//!
//! ```
//! use cardio_report::{generate, render, RenderOptions, ReportFormat, ReportProfile};
//! use cardio_risk::{ClinicalInputs, RoundingPolicy, Sex};
//!
//! let inputs = ClinicalInputs::new(Sex::Female, 30, 22.0, 85.0, 1.5, 1.1).unwrap();
//! let report = generate(&ReportProfile::default(), &inputs, RoundingPolicy::default()).unwrap();
//! let text = render(&report, RenderOptions { format: ReportFormat::Text, include_rationale: false }).unwrap();
//! assert!(text.contains("High Visceral Adiposity (VAI > 1.9)"));
//! ```

pub mod describe;
pub mod rationale;
pub mod recommend;
pub mod render;
pub mod report;

pub use describe::{flag_description, phenotype_description};
pub use recommend::{suggest_next_steps, Priority, Recommendation};
pub use render::{render, write_rationale_text, RenderError, RenderOptions, ReportFormat};
pub use report::{
    generate, DeltaTone, Finding, HeadlineMetrics, Report, ReportProfile, Status, StatusLevel,
};
