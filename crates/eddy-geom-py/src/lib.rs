//! PyO3 bindings for selected `eddy_geom` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: flat lists in, tuples/lists out.
//!   NumPy conversion is left to the Python wrapper.
//! - Library errors surface as `ValueError` with the library message.

use pyo3::prelude::*;

mod common;
mod contour;
mod geom;

#[pymodule]
fn eddy_geom_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    contour::register(m)?;
    Ok(())
}
