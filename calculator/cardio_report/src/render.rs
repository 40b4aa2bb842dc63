use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::describe::phenotype_description;
use crate::rationale::{RationaleSection, Reference, CLINICAL_RATIONALE, REFERENCES};
use crate::report::{Report, StatusLevel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    #[serde(alias = "txt")]
    Text,
    #[serde(alias = "md")]
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown report format '{0}' (expected text, markdown or json)")]
    UnknownFormat(String),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format report")]
    Fmt(#[from] std::fmt::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: ReportFormat,
    /// Append the clinical rationale and reference list.
    pub include_rationale: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    rationale: Option<&'static [RationaleSection]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    references: Option<&'static [Reference]>,
}

pub fn render(report: &Report, options: RenderOptions) -> Result<String, RenderError> {
    match options.format {
        ReportFormat::Text => render_text(report, options.include_rationale),
        ReportFormat::Markdown => render_markdown(report, options.include_rationale),
        ReportFormat::Json => {
            let view = JsonReport {
                report,
                rationale: options.include_rationale.then_some(CLINICAL_RATIONALE),
                references: options.include_rationale.then_some(REFERENCES),
            };
            Ok(serde_json::to_string_pretty(&view)?)
        }
    }
}

fn render_text(report: &Report, include_rationale: bool) -> Result<String, RenderError> {
    let mut out = String::new();
    let h = &report.headline;

    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", report.subtitle)?;
    writeln!(out)?;
    writeln!(out, "{:<20} {:.2}", "VAI Index", h.vai)?;
    writeln!(out, "{:<20} {}", "Chronological Age", h.chronological_age)?;
    writeln!(
        out,
        "{:<20} {} ({})",
        "Metabolic Age",
        h.metabolic_age,
        h.delta_label()
    )?;
    writeln!(out)?;

    let marker = match report.status.level {
        StatusLevel::Warning => "WARNING",
        StatusLevel::Success => "OK",
    };
    writeln!(out, "{marker}: {}", report.status.message)?;
    for finding in &report.findings {
        writeln!(out, "  - {}", finding.description)?;
    }
    writeln!(
        out,
        "Phenotype: {}",
        phenotype_description(report.phenotype)
    )?;
    writeln!(out)?;

    writeln!(out, "Recommended next steps:")?;
    for rec in &report.recommendations {
        writeln!(
            out,
            "  [{}] {}: {}",
            rec.priority.as_str(),
            rec.action,
            rec.rationale
        )?;
    }

    if include_rationale {
        writeln!(out)?;
        write_rationale_text(&mut out)?;
    }
    Ok(out)
}

/// Plain-text clinical rationale and references, shared with `cardio explain`.
pub fn write_rationale_text(out: &mut String) -> std::fmt::Result {
    writeln!(out, "Clinical Rationale")?;
    for section in CLINICAL_RATIONALE {
        writeln!(out)?;
        writeln!(out, "{}", section.heading)?;
        for point in section.points {
            writeln!(out, "  * {point}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "References")?;
    for (i, reference) in REFERENCES.iter().enumerate() {
        writeln!(out, "  {}. {reference}", i + 1)?;
    }
    Ok(())
}

fn render_markdown(report: &Report, include_rationale: bool) -> Result<String, RenderError> {
    let mut out = String::new();
    let h = &report.headline;

    writeln!(out, "# {}", report.title)?;
    writeln!(out)?;
    writeln!(out, "### {}", report.subtitle)?;
    writeln!(out)?;
    writeln!(out, "| VAI Index | Chronological Age | Metabolic Age |")?;
    writeln!(out, "|---|---|---|")?;
    writeln!(
        out,
        "| {:.2} | {} | {} ({}) |",
        h.vai,
        h.chronological_age,
        h.metabolic_age,
        h.delta_label()
    )?;
    writeln!(out)?;

    match report.status.level {
        StatusLevel::Warning => writeln!(out, "> **Warning:** {}", report.status.message)?,
        StatusLevel::Success => writeln!(out, "> **OK:** {}", report.status.message)?,
    }
    if !report.findings.is_empty() {
        writeln!(out)?;
        for finding in &report.findings {
            writeln!(out, "- {}", finding.description)?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "**Phenotype:** {}",
        phenotype_description(report.phenotype)
    )?;
    writeln!(out)?;
    writeln!(out, "## Recommended next steps")?;
    writeln!(out)?;
    for rec in &report.recommendations {
        writeln!(
            out,
            "- **{}** ({}): {}",
            rec.action,
            rec.priority.as_str(),
            rec.rationale
        )?;
    }

    if include_rationale {
        writeln!(out)?;
        writeln!(out, "## Clinical Rationale")?;
        for section in CLINICAL_RATIONALE {
            writeln!(out)?;
            writeln!(out, "**{}**", section.heading)?;
            for point in section.points {
                writeln!(out, "* {point}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "## References")?;
        writeln!(out)?;
        for (i, reference) in REFERENCES.iter().enumerate() {
            writeln!(out, "{}. {reference}", i + 1)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_aliases() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!(matches!(
            "pdf".parse::<ReportFormat>(),
            Err(RenderError::UnknownFormat(_))
        ));
    }

    #[test]
    fn serde_accepts_the_same_short_names() {
        let md: ReportFormat = serde_json::from_str("\"md\"").unwrap();
        let txt: ReportFormat = serde_json::from_str("\"txt\"").unwrap();
        assert_eq!(md, ReportFormat::Markdown);
        assert_eq!(txt, ReportFormat::Text);
        assert_eq!(serde_json::to_string(&md).unwrap(), "\"markdown\"");
    }

    #[test]
    fn rationale_text_lists_every_reference() {
        let mut out = String::new();
        write_rationale_text(&mut out).unwrap();
        assert!(out.contains("What is the Visceral Adiposity Index (VAI)?"));
        assert!(out.contains("  10. Grundy SM, et al. J Am Coll Cardiol. 2019."));
    }
}
