//! Curated flat API for callers that do not want to learn the module layout.
//!
//! Mirrors the four components one-to-one; prefer the module paths inside
//! this crate.

// Circle fit
pub use crate::circle::{fit_circle, fit_circles, CircleFit};
// Containment and areas
pub use crate::poly::{
    bbox_intersection, contains, is_left, poly_contains_poly, polygon_area, ring_from_xy,
    signed_area, winding_number, winding_number_xy, BBox,
};
// Great-circle distances
pub use crate::geodesic::{distance, distance_matrix, distance_vector};
// Contour lookup
pub use crate::contour::{locate_nearest_contour, nearest_point_offset, ContourCollection};
// Synthetic inputs
pub use crate::rand::{
    draw_collection, draw_ring, CollectionCfg, ReplayToken, RingCfg, VertexCount,
};

pub use crate::cfg::EARTH_RADIUS_M;
pub use crate::GeomError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_round_trip() {
        let x = [0.0, 0.0, 10.0, 10.0];
        let y = [0.0, 10.0, 10.0, 0.0];
        let ring = ring_from_xy(&x, &y).unwrap();
        assert_ne!(winding_number(nalgebra::vector![5.0, 5.0], &ring), 0);
        assert_eq!(winding_number(nalgebra::vector![15.0, 15.0], &ring), 0);
        let fit = fit_circle(&x, &y).unwrap();
        assert!(contains(fit.center, &ring));
    }

    #[test]
    fn sampled_ring_fits_through_flat_api() {
        let tok = ReplayToken { seed: 7, index: 0 };
        let (x, y) = draw_ring(RingCfg::default(), tok);
        assert_eq!(draw_ring(RingCfg::default(), tok), (x.clone(), y.clone()));
        let fit = fit_circle(&x, &y).unwrap();
        assert!(fit.radius > 0.0);
    }
}
