use crate::extraction::{LabExtractor, Normalizer};
use crate::redaction::PiiRedactor;
use crate::types::Measurement;
use serde::{Deserialize, Serialize};

/// Redacts PII from raw OCR text with the built-in rules
///
/// Best-effort: see [`crate::redaction`] for the shapes it does not catch.
///
/// # Example
///
/// ```
/// use labextract_core::{redact_pii, PII_MARKER};
///
/// let redacted = redact_pii("患者名: 山田太郎\nAST 64");
///
/// assert!(!redacted.contains("山田太郎"));
/// assert!(redacted.contains(PII_MARKER));
/// ```
pub fn redact_pii(raw_text: &str) -> String {
    PiiRedactor::standard().redact(raw_text)
}

/// Extracts measurements from redacted text with the built-in tables
///
/// Never fails: unrecognized text yields an empty list.
///
/// # Example
///
/// ```
/// use labextract_core::{extract_lab_measurements, Measurement};
///
/// let measurements = extract_lab_measurements("AST (GOT) 64\nBE -3.2");
///
/// assert_eq!(
///     measurements,
///     vec![
///         Measurement::new("AST", 64.0, "U/L"),
///         Measurement::new("BE", -3.2, "mEq/L"),
///     ]
/// );
/// assert!(extract_lab_measurements("所見なし").is_empty());
/// ```
pub fn extract_lab_measurements(redacted_text: &str) -> Vec<Measurement> {
    LabExtractor::standard().extract(redacted_text)
}

/// Resolves a free-form label to its canonical item
///
/// # Example
///
/// ```
/// use labextract_core::normalize_label;
///
/// assert_eq!(normalize_label("AST（GOT）"), Some("AST"));
/// assert_eq!(normalize_label("白血球数"), Some("WBC"));
/// assert_eq!(normalize_label("備考"), None);
/// ```
pub fn normalize_label(raw_label: &str) -> Option<&'static str> {
    Normalizer::standard().normalize(raw_label)
}

/// Result of processing one lab report
///
/// Holds the redacted text only; the raw OCR text is never kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabReport {
    /// OCR text after PII redaction
    pub redacted_text: String,

    /// Extracted measurements, in discovery order
    pub measurements: Vec<Measurement>,
}

impl LabReport {
    /// Redacts and extracts raw text with the built-in tables
    pub fn from_raw_text(raw_text: &str) -> Self {
        let redacted_text = redact_pii(raw_text);
        let measurements = extract_lab_measurements(&redacted_text);
        Self {
            redacted_text,
            measurements,
        }
    }

    /// Looks up the measurement of an item
    pub fn get(&self, item: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.item == item)
    }

    /// Whether no measurement was found
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.measurements.len()
    }
}
