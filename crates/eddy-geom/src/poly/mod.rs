//! Planar polygon predicates: winding numbers, areas, bounding boxes.
//!
//! Purpose
//! - Decide whether a point lies inside a closed contour (winding number),
//!   measure ring areas for the circle-fit shape error, and pre-filter ring
//!   pairs by bounding box before any exact overlap test.
//!
//! Conventions
//! - Rings are closed implicitly: the last vertex connects back to the first.
//!   A stored closing duplicate is harmless (zero-length edge).
//! - Coordinates are planar, in whatever units the caller chose.

mod area;
mod bbox;
mod winding;

pub use area::{polygon_area, ring_from_xy, signed_area};
pub use bbox::{bbox_intersection, BBox};
pub use winding::{contains, is_left, poly_contains_poly, winding_number, winding_number_xy};

#[cfg(test)]
mod tests;
