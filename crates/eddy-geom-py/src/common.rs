use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use eddy_geom::GeomError;

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
