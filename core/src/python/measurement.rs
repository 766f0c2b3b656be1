//! Python wrappers for Measurement and ExtractorConfig

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::types::{ExtractorConfig, Measurement};

/// One extracted lab measurement
#[pyclass(name = "Measurement", module = "labextract")]
#[derive(Clone, Debug)]
pub struct PyMeasurement {
    pub(crate) inner: Measurement,
}

#[pymethods]
impl PyMeasurement {
    #[new]
    fn new(item: String, value: f64, unit: String) -> Self {
        Measurement::new(item, value, unit).into()
    }

    /// Canonical item identifier
    #[getter]
    fn item(&self) -> &str {
        &self.inner.item
    }

    #[getter]
    fn value(&self) -> f64 {
        self.inner.value
    }

    /// Canonical unit; empty when the item has none
    #[getter]
    fn unit(&self) -> &str {
        &self.inner.unit
    }

    /// Convert measurement to dictionary
    pub fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("item", self.item())?;
        dict.set_item("value", self.value())?;
        dict.set_item("unit", self.unit())?;
        Ok(dict.unbind())
    }

    fn __repr__(&self) -> String {
        format!(
            "Measurement(item={:?}, value={}, unit={:?})",
            self.inner.item, self.inner.value, self.inner.unit
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __eq__(&self, other: &PyMeasurement) -> bool {
        self.inner == other.inner
    }
}

impl From<Measurement> for PyMeasurement {
    fn from(inner: Measurement) -> Self {
        Self { inner }
    }
}

/// Which extraction strategies run
#[pyclass(name = "ExtractorConfig", module = "labextract")]
#[derive(Clone, Debug)]
pub struct PyExtractorConfig {
    pub(crate) inner: ExtractorConfig,
}

#[pymethods]
impl PyExtractorConfig {
    #[new]
    #[pyo3(signature = (line_scan=true, next_line_values=true, fallback=true))]
    fn new(line_scan: bool, next_line_values: bool, fallback: bool) -> Self {
        ExtractorConfig {
            line_scan,
            next_line_values,
            fallback,
        }
        .into()
    }

    #[staticmethod]
    fn line_scan_only() -> Self {
        ExtractorConfig::line_scan_only().into()
    }

    #[getter]
    fn line_scan(&self) -> bool {
        self.inner.line_scan
    }

    #[getter]
    fn next_line_values(&self) -> bool {
        self.inner.next_line_values
    }

    #[getter]
    fn fallback(&self) -> bool {
        self.inner.fallback
    }

    fn __repr__(&self) -> String {
        format!(
            "ExtractorConfig(line_scan={}, next_line_values={}, fallback={})",
            self.inner.line_scan, self.inner.next_line_values, self.inner.fallback
        )
    }
}

impl From<ExtractorConfig> for PyExtractorConfig {
    fn from(inner: ExtractorConfig) -> Self {
        Self { inner }
    }
}

impl From<PyExtractorConfig> for ExtractorConfig {
    fn from(config: PyExtractorConfig) -> Self {
        config.inner
    }
}
