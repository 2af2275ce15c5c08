use nalgebra::Vector2;

use crate::error::{check_same_len, GeomError};

/// Signed shoelace area (positive for counter-clockwise rings).
///
/// Rings with fewer than 3 vertices have zero area. Mismatched `x`/`y` are
/// truncated to the shorter length; callers validate lengths upstream.
pub fn signed_area(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..n {
        let j = (k + 1) % n;
        acc += x[k] * y[j] - x[j] * y[k];
    }
    0.5 * acc
}

/// Absolute polygon area (shoelace).
#[inline]
pub fn polygon_area(x: &[f64], y: &[f64]) -> f64 {
    signed_area(x, y).abs()
}

/// Zip parallel coordinate arrays into a vertex ring.
pub fn ring_from_xy(x: &[f64], y: &[f64]) -> Result<Vec<Vector2<f64>>, GeomError> {
    check_same_len("ring x/y", x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(&a, &b)| Vector2::new(a, b)).collect())
}
