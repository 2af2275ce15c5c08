//! Numeric constants shared by the components.
//!
//! Policy
//! - Fixed constants, no runtime configuration. The haversine radius and the
//!   least-squares cutoff are part of the numeric contract: changing them
//!   changes results bit-for-bit.

/// Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_315.0;

/// Degrees to radians.
pub const D2R: f64 = std::f64::consts::PI / 180.0;

/// Cutoff for the least-squares solve: singular values at or below
/// `max_sv * eps * max(rows, cols)` are dropped, which yields the
/// minimum-norm solution for rank-deficient systems.
#[inline]
pub(crate) fn lstsq_cutoff(max_sv: f64, rows: usize, cols: usize) -> f64 {
    max_sv * f64::EPSILON * rows.max(cols) as f64
}
