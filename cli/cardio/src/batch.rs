// Bulk evaluation over a JSON array or newline-delimited JSON records

use std::io::{self, Write};

use cardio_risk::{assess_with, ClinicalInputs, RiskAssessment, RoundingPolicy};
use cardio_types::{ClinicalRanges, Validatable};
use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Serialize)]
pub struct BatchLine {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<RiskAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Splits the input into records. A leading `[` means one JSON array;
/// anything else is read as NDJSON, where a malformed line becomes a
/// per-record error instead of aborting the batch.
pub fn parse_records(text: &str) -> Result<Vec<Result<JsonValue, String>>, serde_json::Error> {
    if text.trim_start().starts_with('[') {
        let values: Vec<JsonValue> = serde_json::from_str(text)?;
        return Ok(values.into_iter().map(Ok).collect());
    }
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<JsonValue>(line).map_err(|e| e.to_string()))
        .collect())
}

/// Settings shared by every record of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchSettings {
    pub ranges: ClinicalRanges,
    pub rounding: RoundingPolicy,
}

pub fn evaluate_record(
    record: Result<JsonValue, String>,
    settings: &BatchSettings,
) -> Result<RiskAssessment, String> {
    let value = record?;
    let inputs: ClinicalInputs = serde_json::from_value(value).map_err(|e| e.to_string())?;
    inputs
        .validate_with_ctx(&settings.ranges)
        .map_err(|e| e.to_string())?;
    assess_with(&inputs, settings.rounding).map_err(|e| e.to_string())
}

pub fn run_batch<W: Write>(
    text: &str,
    settings: &BatchSettings,
    out: &mut W,
) -> io::Result<BatchSummary> {
    let records = parse_records(text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut summary = BatchSummary::default();

    for (index, record) in records.into_iter().enumerate() {
        let line = match evaluate_record(record, settings) {
            Ok(assessment) => {
                summary.succeeded += 1;
                BatchLine {
                    index,
                    assessment: Some(assessment),
                    error: None,
                }
            }
            Err(error) => {
                log::info!("record {index} rejected: {error}");
                summary.failed += 1;
                BatchLine {
                    index,
                    assessment: None,
                    error: Some(error),
                }
            }
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NDJSON: &str = r#"{"sex":"male","age":25,"bmi":22.0,"wc":85,"tg":1.5,"hdl":1.1}

{"sex":"female","age":30,"bmi":22.0,"wc":85,"tg":1.5,"hdl":0.0}
not json
"#;

    fn lines(buf: &[u8]) -> Vec<JsonValue> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn ndjson_keeps_going_past_bad_records() {
        let mut buf = Vec::new();
        let summary = run_batch(NDJSON, &BatchSettings::default(), &mut buf).unwrap();
        assert_eq!(summary, BatchSummary { succeeded: 1, failed: 2 });

        let out = lines(&buf);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["assessment"]["vai"], 1.82);
        assert!(out[1]["error"].as_str().unwrap().contains("hdl_cholesterol"));
        assert_eq!(out[2]["index"], 2);
        assert!(out[2].get("assessment").is_none());
    }

    #[test]
    fn json_array_input() {
        let text = r#"[
            {"sex":"female","age":30,"bmi":22.0,"waist_circumference":85,"triglycerides":1.5,"hdl_cholesterol":1.1},
            {"sex":"male","age":52,"bmi":30.0,"wc":110,"tg":2.5,"hdl":0.9,"lpa":120}
        ]"#;
        let mut buf = Vec::new();
        let summary = run_batch(text, &BatchSettings::default(), &mut buf).unwrap();
        assert_eq!(summary.failed, 0);

        let out = lines(&buf);
        assert_eq!(out[0]["assessment"]["metabolic_age"], 35);
        assert_eq!(out[1]["assessment"]["age_delta"], 13);
    }

    #[test]
    fn malformed_array_fails_whole_batch() {
        let mut buf = Vec::new();
        let err = run_batch("[{\"sex\":", &BatchSettings::default(), &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(buf.is_empty());
    }

    #[test]
    fn unknown_key_fails_that_record_only() {
        let text = r#"{"sex":"male","age":40,"bmi":22.0,"wc":70,"tg":0.8,"hdl":1.6,"lipoprotein":120}
{"sex":"male","age":40,"bmi":22.0,"wc":70,"tg":0.8,"hdl":1.6,"lpa":120}
"#;
        let mut buf = Vec::new();
        let summary = run_batch(text, &BatchSettings::default(), &mut buf).unwrap();
        assert_eq!(summary, BatchSummary { succeeded: 1, failed: 1 });

        let out = lines(&buf);
        assert!(out[0]["error"].as_str().unwrap().contains("lipoprotein"));
        assert!(out[0].get("assessment").is_none());
        assert_eq!(out[1]["assessment"]["metabolic_age"], 48);
    }

    #[test]
    fn site_ranges_reject_records_outside_them() {
        let mut settings = BatchSettings::default();
        settings.ranges.age = cardio_types::Bounds::new(40.0, 75.0);
        let text = r#"{"sex":"male","age":25,"bmi":22.0,"wc":85,"tg":1.5,"hdl":1.1}"#;
        let mut buf = Vec::new();
        let summary = run_batch(text, &settings, &mut buf).unwrap();
        assert_eq!(summary.failed, 1);
        assert!(lines(&buf)[0]["error"].as_str().unwrap().contains("'age'"));
    }
}
