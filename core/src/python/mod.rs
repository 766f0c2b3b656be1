//! Python bindings for labextract
//!
//! Exposes redaction, extraction and label normalization over the built-in
//! tables. OCR and LLM calls stay on the Python side.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod functions;
mod measurement;

pub use errors::*;
pub use functions::*;
pub use measurement::*;

/// Python module definition
#[pymodule]
fn _labextract(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "LabExtractError",
        py.get_type_bound::<errors::PyLabExtractError>(),
    )?;
    m.add(
        "DictionaryError",
        py.get_type_bound::<errors::PyDictionaryError>(),
    )?;
    m.add("SummaryError", py.get_type_bound::<errors::PySummaryError>())?;
    m.add(
        "CollaboratorError",
        py.get_type_bound::<errors::PyCollaboratorError>(),
    )?;
    m.add(
        "ExtractionError",
        py.get_type_bound::<errors::PyExtractionError>(),
    )?;

    m.add_class::<PyMeasurement>()?;
    m.add_class::<PyExtractorConfig>()?;

    m.add_function(wrap_pyfunction!(py_redact_pii, m)?)?;
    m.add_function(wrap_pyfunction!(py_extract_lab_measurements, m)?)?;
    m.add_function(wrap_pyfunction!(py_normalize_label, m)?)?;
    m.add_function(wrap_pyfunction!(py_canonical_unit, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_summary_response, m)?)?;
    m.add_function(wrap_pyfunction!(py_build_summary_prompt, m)?)?;

    m.add("PII_MARKER", crate::redaction::PII_MARKER)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
