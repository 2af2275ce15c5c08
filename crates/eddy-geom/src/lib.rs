//! Geometric primitives for classifying closed contours as eddy candidates.
//!
//! Components
//! - `circle`: least-squares circle fit with an area-mismatch shape error.
//! - `poly`: winding-number containment, polygon areas, bounding boxes.
//! - `geodesic`: haversine distances (scalar, element-wise, all pairs).
//! - `contour`: nearest point and owning contour in a CSR contour collection.
//!
//! Every operation is a pure function over caller-owned flat arrays; there is
//! no shared state, so callers may parallelize across polygons freely.

pub mod api;
pub mod cfg;
pub mod circle;
pub mod contour;
mod error;
pub mod geodesic;
pub mod poly;
pub mod rand;

pub use error::GeomError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circle::{fit_circle, fit_circles, CircleFit};
    pub use crate::contour::{locate_nearest_contour, nearest_point_offset, ContourCollection};
    pub use crate::geodesic::{distance, distance_matrix, distance_vector};
    pub use crate::poly::{contains, is_left, polygon_area, winding_number, BBox};
    pub use crate::GeomError;
    pub use nalgebra::Vector2 as Vec2;
}
