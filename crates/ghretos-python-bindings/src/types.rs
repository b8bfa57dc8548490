//! Conversions between ghretos types and Python objects.

use ghretos_core::{MatcherSettings, Resource};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pythonize::{depythonize, pythonize};
use serde::Serialize;

/// Python view of a Resource: its own fields plus the canonical URL.
#[derive(Debug, Clone, Serialize)]
pub struct PyResource<'a> {
    #[serde(flatten)]
    pub resource: &'a Resource,
    pub html_url: String,
}

impl<'a> From<&'a Resource> for PyResource<'a> {
    fn from(resource: &'a Resource) -> Self {
        Self {
            resource,
            html_url: resource.html_url(),
        }
    }
}

impl PyResource<'_> {
    /// Convert to a Python object using pythonize.
    pub fn to_py(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        pythonize(py, self)
            .map(|bound| bound.unbind())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// Converts an optional resource into a dict or `None`.
pub fn resource_to_py(py: Python<'_>, resource: Option<&Resource>) -> PyResult<Option<Py<PyAny>>> {
    resource
        .map(|resource| PyResource::from(resource).to_py(py))
        .transpose()
}

/// Builds matcher settings from an optional dict of `MatcherSettings` fields.
///
/// Unknown keys and wrongly typed values raise `ValueError`.
pub fn settings_from_dict(dict: Option<&Bound<'_, PyDict>>) -> PyResult<MatcherSettings> {
    match dict {
        Some(dict) => depythonize(dict.as_any())
            .map_err(|e| PyValueError::new_err(format!("invalid settings: {}", e))),
        None => Ok(MatcherSettings::default()),
    }
}
