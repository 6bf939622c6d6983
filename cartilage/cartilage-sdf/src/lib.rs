//! Point-to-surface signed distance and nearest-vertex queries.
//!
//! Region seeding measures the joint space between two bone surfaces, the
//! thickness field scales with penetration depth into a gap band, and quality
//! control re-snaps smoothed boundary vertices back onto the bone. All three
//! go through [`SurfaceDistance`], which owns a flattened copy of the target
//! mesh and answers exact point-to-triangle queries in parallel.
//!
//! Nearest-vertex (as opposed to nearest-point-on-surface) lookups go through
//! [`VertexIndex`], a KD-tree over vertex positions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod closest;
mod error;
mod nearest;
mod surface;

pub use closest::closest_point_on_triangle;
pub use error::{SdfError, SdfResult};
pub use nearest::VertexIndex;
pub use surface::{ClosestHit, SurfaceDistance};
