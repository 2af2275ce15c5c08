use nalgebra::Vector2;

use crate::error::{check_finite, check_finite_target, check_same_len, GeomError};

/// True iff `p` lies strictly left of the directed edge `a → b`.
///
/// Strict `> 0`: collinear points are not left. The winding accumulation
/// relies on this for tie-breaking at exact crossings.
#[inline]
pub fn is_left(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y) > 0.0
}

/// Winding number of `ring` around `p` (0 iff `p` is outside).
///
/// Edges are half-open in y: an upward edge counts when `a.y <= p.y < b.y`
/// and `p` is left of it, a downward edge when `b.y <= p.y < a.y` and `p` is
/// not left of it. Points on a bottom edge therefore count as inside.
/// An empty ring winds zero times.
pub fn winding_number(p: Vector2<f64>, ring: &[Vector2<f64>]) -> i32 {
    accumulate(p, ring.len(), |k| ring[k])
}

/// Flat-array form of [`winding_number`] for rings stored as parallel `x`/`y`.
///
/// Unlike the vector form this one validates: empty rings and NaN/inf in the
/// point or the ring are errors.
pub fn winding_number_xy(px: f64, py: f64, x: &[f64], y: &[f64]) -> Result<i32, GeomError> {
    check_same_len("ring x/y", x.len(), y.len())?;
    if x.is_empty() {
        return Err(GeomError::TooFewPoints { needed: 1, got: 0 });
    }
    check_finite_target(px, py)?;
    check_finite(x, y, 0)?;
    Ok(accumulate(Vector2::new(px, py), x.len(), |k| {
        Vector2::new(x[k], y[k])
    }))
}

fn accumulate(p: Vector2<f64>, n: usize, vertex: impl Fn(usize) -> Vector2<f64>) -> i32 {
    let mut wn = 0i32;
    for k in 0..n {
        let a = vertex(k);
        let b = vertex((k + 1) % n);
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) {
                wn += 1;
            }
        } else if b.y <= p.y && !is_left(a, b, p) {
            wn -= 1;
        }
    }
    wn
}

/// Inside test: non-zero winding number.
#[inline]
pub fn contains(p: Vector2<f64>, ring: &[Vector2<f64>]) -> bool {
    winding_number(p, ring) != 0
}

/// Every vertex of `inner` lies inside `outer`.
///
/// Vertex-only test, sufficient for nested level-set contours which never
/// cross each other. An empty `inner` is contained vacuously.
pub fn poly_contains_poly(outer: &[Vector2<f64>], inner: &[Vector2<f64>]) -> bool {
    inner.iter().all(|&p| contains(p, outer))
}
