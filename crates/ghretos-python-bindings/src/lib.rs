//! Python bindings for ghretos.
//!
//! This crate provides Python bindings using PyO3 for the ghretos-core library.
//! Resources are returned as plain dicts with a `"type"` key.

use ghretos_core::ResourceKind;
use pyo3::prelude::*;
use pyo3::types::PyDict;

mod types;

use types::{resource_to_py, settings_from_dict};

/// Parse a GitHub URL into a resource.
///
/// Args:
///     url: The URL to classify.
///     settings: Optional dictionary of matcher settings. Keys are the
///         `MatcherSettings` field names, e.g. `issues`, `pull_request_comments`,
///         `domains`, `require_strict_type`. Missing keys keep their defaults.
///
/// Returns:
///     A dictionary with a `type` key, the resource fields and its
///     `html_url`, or None if the URL is not recognized.
///
/// Example:
///     >>> parse_url("https://github.com/octocat/hello-world/issues/1")
///     {'type': 'issue', 'repo': {'owner': 'octocat', 'name': 'hello-world'}, 'number': 1, 'html_url': 'https://github.com/octocat/hello-world/issues/1'}
///     >>> parse_url("https://github.com/octocat/hello-world/issues/1", {"issues": False}) is None
///     True
#[pyfunction]
#[pyo3(signature = (url, settings=None))]
fn parse_url(
    py: Python<'_>,
    url: &str,
    settings: Option<&Bound<'_, PyDict>>,
) -> PyResult<Option<Py<PyAny>>> {
    let settings = settings_from_dict(settings)?;
    let resource = ghretos_core::parse_url_with_settings(url, &settings);
    resource_to_py(py, resource.as_ref())
}

/// Parse a shorthand reference such as `owner/repo#123` or `owner/repo@main`.
///
/// Args:
///     shorthand: The reference to parse.
///     default_user: Owner to use when the reference has none (`repo#123`).
///     settings: Optional dictionary of matcher settings (see parse_url).
///
/// Returns:
///     A dictionary describing the resource, or None.
///
/// Example:
///     >>> parse_shorthand("hello-world#7", default_user="octocat")["type"]
///     'numbered_resource'
#[pyfunction]
#[pyo3(signature = (shorthand, default_user=None, settings=None))]
fn parse_shorthand(
    py: Python<'_>,
    shorthand: &str,
    default_user: Option<&str>,
    settings: Option<&Bound<'_, PyDict>>,
) -> PyResult<Option<Py<PyAny>>> {
    let settings = settings_from_dict(settings)?;
    let resource = ghretos_core::parse_shorthand(shorthand, default_user, &settings);
    resource_to_py(py, resource.as_ref())
}

/// Check whether a string is a valid git ref name.
#[pyfunction]
fn validate_ref(name: &str) -> bool {
    ghretos_core::validate_ref(name)
}

/// List every resource kind name, in declaration order.
#[pyfunction]
fn resource_kinds() -> Vec<&'static str> {
    ResourceKind::ALL.iter().map(|kind| kind.as_str()).collect()
}

/// Generate deterministic GitHub URLs for benchmarking.
///
/// Args:
///     num_urls: Number of URLs to generate.
///     seed: Random seed.
///     noise_percent: Share (0-100) of URLs that should not match.
#[cfg(feature = "generate")]
#[pyfunction]
#[pyo3(signature = (num_urls, seed=42, noise_percent=10))]
fn generate_urls(num_urls: usize, seed: u64, noise_percent: u32) -> Vec<String> {
    use ghretos_core::generate::GeneratorConfig;

    let config = GeneratorConfig::new(num_urls)
        .with_seed(seed)
        .with_noise_percent(noise_percent);
    ghretos_core::generate::generate_urls(&config)
}

/// The Python module for ghretos.
#[pymodule]
fn _ghretos(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Forward Rust log records to Python's logging module
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(parse_url, m)?)?;
    m.add_function(wrap_pyfunction!(parse_shorthand, m)?)?;
    m.add_function(wrap_pyfunction!(validate_ref, m)?)?;
    m.add_function(wrap_pyfunction!(resource_kinds, m)?)?;
    #[cfg(feature = "generate")]
    m.add_function(wrap_pyfunction!(generate_urls, m)?)?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    log::debug!("ghretos {} loaded", env!("CARGO_PKG_VERSION"));

    Ok(())
}
