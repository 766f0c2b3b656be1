//! Python wrappers for the module-level functions

use pyo3::prelude::*;

use super::errors::convert_error;
use super::measurement::{PyExtractorConfig, PyMeasurement};
use crate::extraction::{LabExtractor, Normalizer};

/// Redact PII from raw OCR text
///
/// Args:
///     text: Raw OCR text
///
/// Returns:
///     str: Text with every detected PII span replaced by "[REDACTED]"
#[pyfunction]
#[pyo3(name = "redact_pii")]
pub fn py_redact_pii(text: &str) -> String {
    crate::api::redact_pii(text)
}

/// Extract lab measurements from redacted text
///
/// Args:
///     text: Redacted OCR text
///     config: Optional ExtractorConfig (default: both strategies)
///
/// Returns:
///     List[Measurement]: Measurements in discovery order
///
/// Example:
///     >>> from labextract import extract_lab_measurements
///     >>> [m.item for m in extract_lab_measurements("AST (GOT) 64")]
///     ['AST']
#[pyfunction]
#[pyo3(name = "extract_lab_measurements", signature = (text, config=None))]
pub fn py_extract_lab_measurements(
    text: &str,
    config: Option<PyExtractorConfig>,
) -> Vec<PyMeasurement> {
    let extractor = LabExtractor::standard();
    let config = config.map(Into::into).unwrap_or_else(|| extractor.config());
    extractor
        .extract_with(text, config)
        .into_iter()
        .map(PyMeasurement::from)
        .collect()
}

/// Resolve a free-form label to its canonical item
///
/// Returns:
///     Optional[str]: Canonical item, or None when the label is unknown
#[pyfunction]
#[pyo3(name = "normalize_label")]
pub fn py_normalize_label(label: &str) -> Option<&'static str> {
    crate::api::normalize_label(label)
}

/// Canonical unit of an item, or None when the item is unknown
#[pyfunction]
#[pyo3(name = "canonical_unit")]
pub fn py_canonical_unit(item: &str) -> Option<&'static str> {
    crate::dictionary::AliasDictionary::standard()
        .get(item)
        .map(|entry| entry.unit)
}

/// Parse an LLM reply into a summary with canonical lab labels
///
/// Args:
///     reply: Free-text LLM reply carrying one fenced JSON block
///
/// Returns:
///     str: The summary re-serialized as JSON
///
/// Raises:
///     SummaryError: If the reply carries no usable JSON block
#[pyfunction]
#[pyo3(name = "parse_summary_response")]
pub fn py_parse_summary_response(reply: &str) -> PyResult<String> {
    let mut summary = crate::summary::parse_summary_response(reply).map_err(convert_error)?;
    summary.canonicalize_labels(Normalizer::standard());
    serde_json::to_string(&summary).map_err(|e| convert_error(e.into()))
}

/// Build the LLM prompt for already-redacted text
#[pyfunction]
#[pyo3(name = "build_summary_prompt")]
pub fn py_build_summary_prompt(redacted_text: &str) -> String {
    crate::summary::build_summary_prompt(redacted_text)
}
