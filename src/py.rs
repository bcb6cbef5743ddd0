//! Python bindings for the vehicle matcher using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::MatcherConfig;
use crate::matcher::VehicleMatcher;
use crate::normalize::normalize_text;

/// Normalize a raw description (Python function)
#[pyfunction]
pub fn py_normalize(text: &str) -> String {
    normalize_text(text)
}

/// Python wrapper for the vehicle matcher
#[pyclass]
pub struct PyVehicleMatcher {
    matcher: VehicleMatcher,
}

#[pymethods]
impl PyVehicleMatcher {
    /// Build from a list of `brand_model` identifiers and an optional JSON config
    #[new]
    #[pyo3(signature = (identifiers, config_json=None))]
    fn new(identifiers: Vec<String>, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(raw) => MatcherConfig::from_json(raw)
                .map_err(|e| PyValueError::new_err(format!("Invalid config: {}", e)))?,
            None => MatcherConfig::default(),
        };

        let matcher = VehicleMatcher::with_config(identifiers, config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { matcher })
    }

    /// Best match as a `(identifier or None, confidence)` tuple
    fn best_match(&self, text: &str) -> (Option<String>, f64) {
        let result = self.matcher.best_match(text);
        (result.best_match, result.confidence)
    }

    /// Top candidates with their score breakdown
    #[pyo3(signature = (text, limit=5))]
    fn rank<'py>(&self, text: &str, limit: usize, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
        self.matcher
            .rank(text, limit)
            .iter()
            .map(|c| -> PyResult<Bound<'py, PyDict>> {
                let dict = PyDict::new_bound(py);
                dict.set_item("identifier", &c.identifier)?;
                dict.set_item("brand_score", c.brand_score)?;
                dict.set_item("model_score", c.model_score)?;
                dict.set_item("sequence_score", c.sequence_score)?;
                dict.set_item("composite", c.composite)?;
                Ok(dict)
            })
            .collect()
    }

    /// Ranked candidates serialized as a JSON array
    #[pyo3(signature = (text, limit=5))]
    fn rank_json(&self, text: &str, limit: usize) -> PyResult<String> {
        serde_json::to_string(&self.matcher.rank(text, limit))
            .map_err(|e| PyValueError::new_err(format!("Failed to serialize ranking: {}", e)))
    }

    fn normalize(&self, text: &str) -> String {
        self.matcher.normalize(text)
    }

    /// Number of catalog identifiers
    fn __len__(&self) -> usize {
        self.matcher.catalog().len()
    }
}
