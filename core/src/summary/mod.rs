//! Clinical summary structuring
//!
//! Builds the prompt sent to the summary-structuring LLM and parses its
//! reply. The reply must carry exactly one fenced JSON block; anything else
//! is a hard failure.

use crate::error::{LabExtractError, Result};
use crate::extraction::numeric::parse_value;
use crate::extraction::Normalizer;
use crate::types::Measurement;
use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Instructions placed before the redacted text
pub const SUMMARY_PREAMBLE: &str = "\
あなたは医療記録を構造化するアシスタントです。
以下の臨床テキストを読み、次のスキーマに従うJSONを1つだけ ```json ブロックで出力してください。
個人を特定できる情報は出力しないでください。[REDACTED] はそのまま扱ってください。

{
  \"patient_info\": {\"age\": number|null, \"sex\": string|null, \"diagnoses\": [string]},
  \"lab_results\": [{\"date\": string|null, \"results\": [{\"item\": string, \"value\": number|string, \"unit\": string|null}]}],
  \"treatments\": [{\"name\": string, \"category\": string|null, \"dosage\": string|null, \"date\": string|null}],
  \"events\": [{\"type\": string, \"start_date\": string|null, \"end_date\": string|null, \"note\": string|null}]
}
";

/// Structured summary returned by the LLM
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalSummary {
    #[serde(default)]
    pub patient_info: PatientInfo,

    #[serde(default)]
    pub lab_results: Vec<LabResultGroup>,

    #[serde(default)]
    pub treatments: Vec<TreatmentRecord>,

    #[serde(default)]
    pub events: Vec<ClinicalEvent>,
}

/// De-identified patient attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub sex: Option<String>,

    #[serde(default)]
    pub diagnoses: Vec<String>,
}

/// Lab results sharing one collection date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabResultGroup {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub results: Vec<LabResultEntry>,
}

/// A lab value as written in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabValue {
    Number(f64),
    Text(String),
}

impl LabValue {
    /// Numeric reading of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LabValue::Number(n) => Some(*n),
            LabValue::Text(s) => parse_value(s, true),
        }
    }
}

/// One lab result line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResultEntry {
    pub item: String,

    #[serde(default)]
    pub value: Option<LabValue>,

    #[serde(default)]
    pub unit: Option<String>,
}

/// A treatment: drug, procedure or therapy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub dosage: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}

/// A dated clinical event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalEvent {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub note: Option<String>,
}

impl ClinicalSummary {
    /// Rewrites lab labels to canonical items and fills missing units
    ///
    /// Labels the normalizer does not recognize are left as written.
    /// Returns the number of entries rewritten.
    pub fn canonicalize_labels(&mut self, normalizer: &Normalizer) -> usize {
        let dictionary = normalizer.dictionary();
        let mut rewritten = 0;

        for entry in self.lab_results.iter_mut().flat_map(|g| g.results.iter_mut()) {
            let Some(item) = normalizer.normalize(&entry.item) else {
                trace!("Summary label '{}' left as written", entry.item);
                continue;
            };

            if entry.item != item {
                entry.item = item.to_string();
                rewritten += 1;
            }

            let unit = dictionary.unit(item);
            let missing = entry.unit.as_deref().map_or(true, str::is_empty);
            if missing && !unit.is_empty() {
                entry.unit = Some(unit.to_string());
            }
        }

        debug!("Canonicalized {} summary lab labels", rewritten);
        rewritten
    }

    /// First numeric value per canonical item, in summary order
    ///
    /// Call after [`ClinicalSummary::canonicalize_labels`]; entries whose
    /// label is not a known item or whose value is not numeric are skipped.
    pub fn measurements(&self, normalizer: &Normalizer) -> Vec<Measurement> {
        let dictionary = normalizer.dictionary();
        let mut seen = HashSet::new();
        let mut measurements = Vec::new();

        for entry in self.lab_results.iter().flat_map(|g| g.results.iter()) {
            let Some(entry_def) = dictionary.get(&entry.item) else {
                continue;
            };
            let Some(value) = entry.value.as_ref().and_then(LabValue::as_f64) else {
                continue;
            };
            if value < 0.0 && !entry_def.signed {
                continue;
            }
            if seen.insert(entry_def.id) {
                measurements.push(Measurement::new(entry_def.id, value, entry_def.unit));
            }
        }

        measurements
    }
}

/// Builds the LLM prompt from already-redacted text
pub fn build_summary_prompt(redacted_text: &str) -> String {
    format!("{}\n---\n{}\n---\n", SUMMARY_PREAMBLE, redacted_text.trim())
}

/// Returns the body of the first fenced JSON block
///
/// Accepts a fence tagged `json`, or an untagged fence whose body is a JSON
/// object.
pub fn extract_json_block(response: &str) -> Result<&str> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n(.*?)```").expect("Failed to compile regex")
    });

    re.captures_iter(response)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|body| body.starts_with('{'))
        .ok_or(LabExtractError::MissingJsonBlock)
}

/// Parses the LLM reply into a summary
///
/// # Errors
///
/// Returns [`LabExtractError::MissingJsonBlock`] when no fenced block is
/// found and [`LabExtractError::SummaryJson`] when the block does not match
/// the schema.
///
/// # Example
///
/// ```
/// use labextract_core::summary::parse_summary_response;
///
/// let reply = "結果です。\n```json\n{\"lab_results\": [{\"date\": \"2024-04-01\", \"results\": [{\"item\": \"CRP\", \"value\": 2.5}]}]}\n```";
/// let summary = parse_summary_response(reply).unwrap();
///
/// assert_eq!(summary.lab_results[0].results[0].item, "CRP");
/// assert!(parse_summary_response("no json here").is_err());
/// ```
pub fn parse_summary_response(response: &str) -> Result<ClinicalSummary> {
    let block = extract_json_block(response)?;
    let summary: ClinicalSummary = serde_json::from_str(block)?;
    debug!(
        "Parsed summary: {} lab groups, {} treatments, {} events",
        summary.lab_results.len(),
        summary.treatments.len(),
        summary.events.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"以下のとおり構造化しました。

```json
{
  "patient_info": {"age": 72, "sex": "男性", "diagnoses": ["肺炎"]},
  "lab_results": [
    {"date": "2024-04-01", "results": [
      {"item": "ＣＲＰ", "value": 12.3},
      {"item": "白血球数", "value": "11800", "unit": "/μL"},
      {"item": "BE", "value": -2.1},
      {"item": "プロカルシトニン値", "value": "0.8"},
      {"item": "尿潜血", "value": "(+)"},
      {"item": "Alb", "value": null}
    ]},
    {"date": "2024-04-05", "results": [
      {"item": "CRP", "value": 3.1}
    ]}
  ],
  "treatments": [
    {"name": "セフトリアキソン", "category": "抗菌薬", "dosage": "2g/日", "date": "2024-04-01"}
  ],
  "events": [
    {"type": "入院", "start_date": "2024-04-01", "end_date": "2024-04-10", "note": null}
  ]
}
```
"#;

    #[test]
    fn test_parse_full_reply() {
        let summary = parse_summary_response(REPLY).unwrap();
        assert_eq!(summary.patient_info.age, Some(72));
        assert_eq!(summary.patient_info.diagnoses, vec!["肺炎".to_string()]);
        assert_eq!(summary.lab_results.len(), 2);
        assert_eq!(summary.treatments[0].dosage.as_deref(), Some("2g/日"));
        assert_eq!(summary.events[0].event_type, "入院");
        assert_eq!(summary.events[0].end_date.as_deref(), Some("2024-04-10"));
    }

    #[test]
    fn test_missing_block_is_an_error() {
        let err = parse_summary_response("{\"lab_results\": []}").unwrap_err();
        assert!(matches!(err, LabExtractError::MissingJsonBlock));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = parse_summary_response("```json\n{\"lab_results\": [\n```").unwrap_err();
        assert!(matches!(err, LabExtractError::SummaryJson(_)));
    }

    #[test]
    fn test_bare_fence_is_accepted() {
        let summary = parse_summary_response("```\n{}\n```").unwrap();
        assert_eq!(summary, ClinicalSummary::default());
    }

    #[test]
    fn test_canonicalize_labels() {
        let mut summary = parse_summary_response(REPLY).unwrap();
        let rewritten = summary.canonicalize_labels(Normalizer::standard());

        let first = &summary.lab_results[0].results;
        assert_eq!(first[0].item, "CRP");
        assert_eq!(first[0].unit.as_deref(), Some("mg/dL"));
        assert_eq!(first[1].item, "WBC");
        assert_eq!(first[1].unit.as_deref(), Some("/μL"));
        assert_eq!(first[3].item, "PCT");
        assert_eq!(first[4].item, "尿潜血");
        assert_eq!(rewritten, 3);
    }

    #[test]
    fn test_measurements_from_summary() {
        let mut summary = parse_summary_response(REPLY).unwrap();
        let normalizer = Normalizer::standard();
        summary.canonicalize_labels(normalizer);

        let measurements = summary.measurements(normalizer);
        assert_eq!(
            measurements,
            vec![
                Measurement::new("CRP", 12.3, "mg/dL"),
                Measurement::new("WBC", 11800.0, "/μL"),
                Measurement::new("BE", -2.1, "mEq/L"),
                Measurement::new("PCT", 0.8, "ng/mL"),
            ]
        );
    }

    #[test]
    fn test_prompt_carries_text() {
        let prompt = build_summary_prompt("  [REDACTED]\nCRP 2.5  ");
        assert!(prompt.starts_with(SUMMARY_PREAMBLE));
        assert!(prompt.contains("[REDACTED]\nCRP 2.5"));
    }
}
