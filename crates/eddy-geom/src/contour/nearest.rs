use crate::error::{check_finite, check_finite_target, check_same_len, GeomError};

use super::types::ContourCollection;

/// Offset (relative to `start`) of the point of `[start, end)` closest to the
/// target, by squared Euclidean distance.
///
/// Ties go to the lowest index (strict `<` during a left-to-right scan).
/// A non-finite target or vertex inside the range is rejected.
pub fn nearest_point_offset(
    x: &[f64],
    y: &[f64],
    target_x: f64,
    target_y: f64,
    start: usize,
    end: usize,
) -> Result<usize, GeomError> {
    check_same_len("x/y", x.len(), y.len())?;
    if start >= end {
        return Err(GeomError::EmptyRange { start, end });
    }
    if end > x.len() {
        return Err(GeomError::OutOfBounds { end, len: x.len() });
    }
    check_finite_target(target_x, target_y)?;
    check_finite(&x[start..end], &y[start..end], start)?;
    let mut best = 0usize;
    let mut d_min = f64::INFINITY;
    for (k, (&px, &py)) in x[start..end].iter().zip(&y[start..end]).enumerate() {
        let dx = px - target_x;
        let dy = py - target_y;
        let d = dx * dx + dy * dy;
        if d < d_min {
            d_min = d;
            best = k;
        }
    }
    Ok(best)
}

/// Index, within `level`, of the contour owning the point nearest to the
/// target. `Ok(None)` when the level holds no contour.
pub fn locate_nearest_contour(
    level: usize,
    collection: &ContourCollection,
    target_x: f64,
    target_y: f64,
) -> Result<Option<usize>, GeomError> {
    let contours = collection.level_contours(level)?;
    check_finite_target(target_x, target_y)?;
    if contours.is_empty() {
        return Ok(None);
    }
    let points = collection.level_points(level)?;
    let offset = nearest_point_offset(
        collection.x(),
        collection.y(),
        target_x,
        target_y,
        points.start,
        points.end,
    )?;

    let firsts = collection.indices_of_first_pts();
    let mut owner = contours.start;
    for c in contours.clone() {
        if firsts[c] - points.start > offset {
            break;
        }
        owner = c;
    }
    Ok(Some(owner - contours.start))
}

impl ContourCollection {
    /// Method form of [`locate_nearest_contour`].
    #[inline]
    pub fn locate_nearest_contour(
        &self,
        level: usize,
        target_x: f64,
        target_y: f64,
    ) -> Result<Option<usize>, GeomError> {
        locate_nearest_contour(level, self, target_x, target_y)
    }
}
