use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use cardio_report::{ReportFormat, ReportProfile};
use cardio_risk::RoundingPolicy;
use cardio_types::{Bounds, ClinicalRanges};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "cardio.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CardioConfig {
    #[serde(default)]
    pub report: ReportSection,

    #[serde(default)]
    pub assessment: AssessmentSection,

    #[serde(default)]
    pub ranges: RangesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default)]
    pub rationale: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentSection {
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Site-specific input limits. Each entry may only narrow the declared range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RangesSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Bounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<Bounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_circumference: Option<Bounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triglycerides: Option<Bounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdl_cholesterol: Option<Bounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lipoprotein_a: Option<Bounds>,
}

impl RangesSection {
    /// Declared ranges with the configured overrides applied.
    pub fn clinical_ranges(&self) -> ClinicalRanges {
        let declared = ClinicalRanges::DECLARED;
        ClinicalRanges {
            age: self.age.unwrap_or(declared.age),
            bmi: self.bmi.unwrap_or(declared.bmi),
            waist_circumference: self
                .waist_circumference
                .unwrap_or(declared.waist_circumference),
            triglycerides: self.triglycerides.unwrap_or(declared.triglycerides),
            hdl_cholesterol: self.hdl_cholesterol.unwrap_or(declared.hdl_cholesterol),
            lipoprotein_a: self.lipoprotein_a.unwrap_or(declared.lipoprotein_a),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let declared = ClinicalRanges::DECLARED;
        let entries = [
            ("age", self.age, declared.age),
            ("bmi", self.bmi, declared.bmi),
            (
                "waist_circumference",
                self.waist_circumference,
                declared.waist_circumference,
            ),
            ("triglycerides", self.triglycerides, declared.triglycerides),
            ("hdl_cholesterol", self.hdl_cholesterol, declared.hdl_cholesterol),
            ("lipoprotein_a", self.lipoprotein_a, declared.lipoprotein_a),
        ];
        for (field, configured, allowed) in entries {
            let Some(bounds) = configured else {
                continue;
            };
            if !(allowed.contains(bounds.min) && allowed.contains(bounds.max))
                || bounds.min > bounds.max
            {
                return Err(format!(
                    "ranges.{field} [{}, {}] must be a sub-range of [{}, {}]",
                    bounds.min, bounds.max, allowed.min, allowed.max
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid '{path}': {message}")]
    Invalid { path: PathBuf, message: String },
}

impl ReportSection {
    pub fn profile(&self) -> ReportProfile {
        let mut profile = ReportProfile::default();
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            profile.subtitle = subtitle.clone();
        }
        profile
    }
}

impl CardioConfig {
    /// Semantic checks serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if matches!(&self.report.title, Some(t) if t.trim().is_empty()) {
            return Err("report.title must not be empty".to_string());
        }
        if matches!(&self.report.subtitle, Some(s) if s.trim().is_empty()) {
            return Err("report.subtitle must not be empty".to_string());
        }
        self.ranges.validate()
    }
}

impl fmt::Display for CardioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format={:?} rationale={} rounding={}",
            self.report.format, self.report.rationale, self.assessment.rounding
        )
    }
}

pub fn parse_config(text: &str, path: &Path) -> Result<CardioConfig, ConfigError> {
    let config = toml::from_str::<CardioConfig>(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate().map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(config)
}

pub fn read_config(path: &Path) -> Result<CardioConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

/// Resolves the active config: an explicit path must exist, otherwise
/// `./cardio.toml` is used when present and defaults apply when it is not.
pub fn load_config(explicit: Option<&Path>) -> Result<CardioConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let default_path = PathBuf::from(CONFIG_FILE);
            if default_path.exists() {
                read_config(&default_path)
            } else {
                log::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(CardioConfig::default())
            }
        }
    }
}

pub fn generate_default_config() -> String {
    let mut out = String::new();
    out.push_str("# cardio configuration\n");
    out.push_str("\n[report]\n");
    out.push_str("# Output format: text, markdown or json\n");
    out.push_str("format = \"text\"\n");
    out.push_str("# Append the clinical rationale and references to every report\n");
    out.push_str("rationale = false\n");
    out.push_str("# Override the report heading\n");
    out.push_str("# title = \"Global Precision Cardio-Metabolic Tool\"\n");
    out.push_str("# subtitle = \"Assessing Adipose Tissue Dysfunction and 'Hidden' Metabolic Risk\"\n");
    out.push_str("\n[assessment]\n");
    out.push_str("# Rounding of reported values: half-away-from-zero or half-even\n");
    out.push_str("rounding = \"half-away-from-zero\"\n");
    out.push_str("\n[ranges]\n");
    out.push_str("# Narrow the accepted input ranges for this site, e.g.\n");
    out.push_str("# age = { min = 40.0, max = 75.0 }\n");
    out.push_str("# lipoprotein_a = { min = 0.0, max = 200.0 }\n");
    out
}
