//! Least-squares circle fit and area-mismatch shape error.
//!
//! Purpose
//! - Score how circular a closed contour is. The fit is algebraic
//!   (`x² + y² = 2·cx·x + 2·cy·y + c`) on centered, scaled coordinates, solved
//!   by SVD least squares; the shape error compares the polygon with its
//!   fitted circle by area.
//!
//! Model
//! - Coordinates are centered on the vertex mean and scaled by the largest
//!   vertex distance so the 3-column system stays well conditioned for
//!   projected coordinates far from the origin.
//! - Vertices outside the circle are pulled radially onto it; the clipped
//!   ring's area approximates `area(polygon ∩ disk)`. Then
//!   `shape_error = (A_circle − 2·A_clipped + A_polygon) · 100 / A_circle`,
//!   i.e. the symmetric difference relative to the disk, in percent.
//!
//! Notes
//! - A trailing vertex equal to the first one (explicitly closed ring) is
//!   ignored so it does not weigh twice in the centroid or the fit.
//! - Scratch buffers are plain `Vec`s owned by the call.

use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector, Vector2, Vector3, SVD};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::cfg::lstsq_cutoff;
use crate::error::{check_finite, check_same_len, GeomError};
use crate::poly::polygon_area;

/// Result of [`fit_circle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleFit {
    pub center: Vector2<f64>,
    pub radius: f64,
    /// Area mismatch in percent; 0 for a perfect disk.
    pub shape_error: f64,
    pub circle_area: f64,
    pub polygon_area: f64,
    /// Area of the ring after projecting outside vertices onto the circle.
    pub clipped_area: f64,
}

/// Fit a circle to the ring `(x[i], y[i])`.
///
/// Errors
/// - `LengthMismatch`, `NonFinite`, `TooFewPoints` (< 3 distinct-closure vertices).
/// - `Numeric` when all vertices coincide, when they are collinear (rank
///   deficient system), or when the radius comes out non-finite or zero.
pub fn fit_circle(x: &[f64], y: &[f64]) -> Result<CircleFit, GeomError> {
    check_same_len("ring x/y", x.len(), y.len())?;
    check_finite(x, y, 0)?;
    let n = open_len(x, y);
    if n < 3 {
        return Err(GeomError::TooFewPoints { needed: 3, got: n });
    }
    let (xs, ys) = (&x[..n], &y[..n]);

    let inv_n = 1.0 / n as f64;
    let mean_x = xs.iter().sum::<f64>() * inv_n;
    let mean_y = ys.iter().sum::<f64>() * inv_n;
    let norme: Vec<f64> = xs
        .iter()
        .zip(ys)
        .map(|(&a, &b)| (a - mean_x).powi(2) + (b - mean_y).powi(2))
        .collect();
    let norme_max = norme.iter().copied().fold(0.0, f64::max);
    if norme_max <= 0.0 {
        tracing::debug!(n, "all vertices coincide");
        return Err(GeomError::numeric("all vertices coincide"));
    }
    let scale = norme_max.sqrt();

    let a = DMatrix::from_fn(n, 3, |i, j| match j {
        0 => 2.0 * (xs[i] - mean_x) / scale,
        1 => 2.0 * (ys[i] - mean_y) / scale,
        _ => 1.0,
    });
    let b = DVector::from_iterator(n, norme.iter().map(|v| v / norme_max));
    let (sol, rank) = lstsq(a, &b)?;
    if rank < 3 {
        tracing::debug!(n, rank, "collinear vertices");
        return Err(GeomError::numeric("collinear vertices (rank-deficient fit)"));
    }
    let (cx, cy, r) = (sol.x, sol.y, sol.z);

    let radius = scale * (r + cx * cx + cy * cy).sqrt();
    if !radius.is_finite() || radius <= 0.0 {
        tracing::debug!(radius, "degenerate radius");
        return Err(GeomError::numeric(format!("fitted radius {radius}")));
    }
    let center = Vector2::new(scale * cx + mean_x, scale * cy + mean_y);

    let circle_area = PI * radius * radius;
    let (px, py) = clip_to_circle(xs, ys, center, radius);
    let clipped_area = polygon_area(&px, &py);
    let poly_area = polygon_area(xs, ys);
    let shape_error = (circle_area - 2.0 * clipped_area + poly_area) * 100.0 / circle_area;

    Ok(CircleFit {
        center,
        radius,
        shape_error,
        circle_area,
        polygon_area: poly_area,
        clipped_area,
    })
}

/// Fit many rings; results are independent and keep the input order.
pub fn fit_circles(rings: &[(Vec<f64>, Vec<f64>)]) -> Vec<Result<CircleFit, GeomError>> {
    #[cfg(feature = "rayon")]
    let fits = rings.par_iter().map(|(x, y)| fit_circle(x, y)).collect();
    #[cfg(not(feature = "rayon"))]
    let fits = rings.iter().map(|(x, y)| fit_circle(x, y)).collect();
    fits
}

/// Vertex count without an explicit closing duplicate.
#[inline]
fn open_len(x: &[f64], y: &[f64]) -> usize {
    let n = x.len();
    if n >= 2 && x[n - 1] == x[0] && y[n - 1] == y[0] {
        n - 1
    } else {
        n
    }
}

/// Minimum-norm least squares for a 3-column system. Returns the solution and
/// the numerical rank (singular values above the cutoff).
fn lstsq(a: DMatrix<f64>, b: &DVector<f64>) -> Result<(Vector3<f64>, usize), GeomError> {
    let (rows, cols) = a.shape();
    let svd = SVD::new(a, true, true);
    let cutoff = lstsq_cutoff(svd.singular_values.max(), rows, cols);
    let rank = svd.singular_values.iter().filter(|&&s| s > cutoff).count();
    let sol = svd.solve(b, cutoff).map_err(|e| GeomError::numeric(e))?;
    if sol.iter().any(|v| !v.is_finite()) {
        return Err(GeomError::numeric("non-finite least-squares solution"));
    }
    Ok((Vector3::new(sol[0], sol[1], sol[2]), rank))
}

/// Copy of the ring with every vertex strictly outside the circle projected
/// radially onto it.
fn clip_to_circle(x: &[f64], y: &[f64], center: Vector2<f64>, radius: f64) -> (Vec<f64>, Vec<f64>) {
    let mut px = Vec::with_capacity(x.len());
    let mut py = Vec::with_capacity(y.len());
    for (&a, &b) in x.iter().zip(y) {
        let d = Vector2::new(a, b) - center;
        let dist = d.norm();
        if dist > radius {
            let p = center + d * (radius / dist);
            px.push(p.x);
            py.push(p.y);
        } else {
            px.push(a);
            py.push(b);
        }
    }
    (px, py)
}
