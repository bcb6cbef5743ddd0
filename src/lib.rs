//! Vehicle matcher - fuzzy mapping of free-text vehicle descriptions
//!
//! Maps noisy make/model strings from insurance and registration records
//! to canonical `brand_model` identifiers from a fixed catalog, together
//! with a 0-100 confidence score.

pub mod types;
pub mod error;
pub mod config;
pub mod catalog;
pub mod normalize;
pub mod extractor;
pub mod similarity;
pub mod matcher;
pub mod demo;

pub use types::*;
pub use error::*;
pub use config::*;
pub use catalog::*;
pub use normalize::*;
pub use extractor::*;
pub use similarity::*;
pub use matcher::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn vehicle_matcher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyVehicleMatcher>()?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    Ok(())
}
