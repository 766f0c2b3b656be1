//! Python exception types for labextract

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

use crate::error::LabExtractError;

create_exception!(
    labextract,
    PyLabExtractError,
    PyException,
    "Base exception for all labextract errors"
);

create_exception!(
    labextract,
    PyDictionaryError,
    PyLabExtractError,
    "Alias dictionary or rule table failed validation"
);

create_exception!(
    labextract,
    PySummaryError,
    PyLabExtractError,
    "LLM reply could not be parsed into a summary"
);

create_exception!(
    labextract,
    PyCollaboratorError,
    PyLabExtractError,
    "OCR or LLM collaborator failure"
);

create_exception!(
    labextract,
    PyExtractionError,
    PyLabExtractError,
    "Generic extraction error"
);

/// Convert LabExtractError to the matching Python exception
pub fn convert_error(err: LabExtractError) -> PyErr {
    match err {
        LabExtractError::DictionaryIntegrity { .. }
        | LabExtractError::DuplicateItem(_)
        | LabExtractError::EmptyAlias(_)
        | LabExtractError::UnknownItem(_)
        | LabExtractError::InvalidPattern { .. } => PyDictionaryError::new_err(err.to_string()),
        LabExtractError::MissingJsonBlock | LabExtractError::SummaryJson(_) => {
            PySummaryError::new_err(err.to_string())
        }
        LabExtractError::Ocr(_) | LabExtractError::Llm(_) => {
            PyCollaboratorError::new_err(err.to_string())
        }
        LabExtractError::Extraction(msg) => PyExtractionError::new_err(msg),
        LabExtractError::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
    }
}
