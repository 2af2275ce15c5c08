//! Nearest-point lookup in a multi-level contour collection.
//!
//! Purpose
//! - Contour extraction yields many polylines per iso-level. They are stored
//!   flat (CSR-style): one coordinate buffer, per-contour offsets/counts, and
//!   per-level contour offsets/counts. Given a level and a target point, find
//!   the contour of that level passing closest to the target.
//!
//! Design
//! - `ContourCollection` validates the layout once at construction; lookups
//!   then use O(1) range accessors instead of raw offset arithmetic.
//! - `nearest_point_offset` is the linear-scan kernel; it works on any flat
//!   coordinate arrays, not only collections.

mod nearest;
mod types;

pub use nearest::{locate_nearest_contour, nearest_point_offset};
pub use types::ContourCollection;
