//! Contour lookup bindings (flat CSR arrays as produced by contour extraction).

use crate::common::map_geom_err;
use eddy_geom::contour::ContourCollection;
use pyo3::prelude::*;

#[pyfunction]
pub fn nearest_point_offset(
    x: Vec<f64>,
    y: Vec<f64>,
    target_x: f64,
    target_y: f64,
    start: usize,
    end: usize,
) -> PyResult<usize> {
    eddy_geom::contour::nearest_point_offset(&x, &y, target_x, target_y, start, end)
        .map_err(map_geom_err)
}

/// Within-level index of the nearest contour, or `None` for an empty level.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn locate_nearest_contour(
    level: usize,
    l_i: Vec<usize>,
    nb_c_per_l: Vec<usize>,
    nb_pt_per_c: Vec<usize>,
    indices_of_first_pts: Vec<usize>,
    x_value: Vec<f64>,
    y_value: Vec<f64>,
    target_x: f64,
    target_y: f64,
) -> PyResult<Option<usize>> {
    let coll = ContourCollection::new(
        x_value,
        y_value,
        indices_of_first_pts,
        nb_pt_per_c,
        nb_c_per_l,
        l_i,
    )
    .map_err(map_geom_err)?;
    coll.locate_nearest_contour(level, target_x, target_y)
        .map_err(map_geom_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(nearest_point_offset, m)?)?;
    m.add_function(wrap_pyfunction!(locate_nearest_contour, m)?)?;
    Ok(())
}
