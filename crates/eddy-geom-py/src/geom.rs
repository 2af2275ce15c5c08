//! Circle fit, containment and distance bindings.

use crate::common::map_geom_err;
use nalgebra::Vector2;
use pyo3::prelude::*;

/// `(center_x, center_y, radius, shape_error)` of the best-fit circle.
#[pyfunction]
pub fn fit_circle(x: Vec<f64>, y: Vec<f64>) -> PyResult<(f64, f64, f64, f64)> {
    let fit = eddy_geom::circle::fit_circle(&x, &y).map_err(map_geom_err)?;
    Ok((fit.center.x, fit.center.y, fit.radius, fit.shape_error))
}

#[pyfunction]
pub fn winding_number(point: (f64, f64), ring: Vec<(f64, f64)>) -> i32 {
    let ring: Vec<Vector2<f64>> = ring.into_iter().map(|(a, b)| Vector2::new(a, b)).collect();
    eddy_geom::poly::winding_number(Vector2::new(point.0, point.1), &ring)
}

#[pyfunction]
pub fn distance(lon0: f64, lat0: f64, lon1: f64, lat1: f64) -> f64 {
    eddy_geom::geodesic::distance(lon0, lat0, lon1, lat1)
}

#[pyfunction]
pub fn distance_vector(
    lon0: Vec<f64>,
    lat0: Vec<f64>,
    lon1: Vec<f64>,
    lat1: Vec<f64>,
) -> PyResult<Vec<f64>> {
    eddy_geom::geodesic::distance_vector(&lon0, &lat0, &lon1, &lat1).map_err(map_geom_err)
}

/// Row-major nested lists, `n0 × n1`.
#[pyfunction]
pub fn distance_matrix(
    lon0: Vec<f64>,
    lat0: Vec<f64>,
    lon1: Vec<f64>,
    lat1: Vec<f64>,
) -> PyResult<Vec<Vec<f64>>> {
    let m = eddy_geom::geodesic::distance_matrix(&lon0, &lat0, &lon1, &lat1)
        .map_err(map_geom_err)?;
    Ok(m.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fit_circle, m)?)?;
    m.add_function(wrap_pyfunction!(winding_number, m)?)?;
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(distance_vector, m)?)?;
    m.add_function(wrap_pyfunction!(distance_matrix, m)?)?;
    Ok(())
}
