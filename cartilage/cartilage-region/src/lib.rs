//! Contact-region selection and refinement between bone surfaces.
//!
//! A cartilage layer starts as the set of faces on one bone that lie within
//! the joint space of the opposing bone. That raw selection is then refined:
//! the frayed rim is trimmed, stray islands are dropped, single-triangle ears
//! are shaved off, the femoral-head region is grown under a curvature gate,
//! and enclosed holes are filled back in.
//!
//! Regions are always [`FaceSet`]s of indices into the *parent* mesh, so a
//! refined region can still be gathered, extruded or measured against the
//! original surface.
//!
//! [`FaceSet`]: cartilage_types::FaceSet

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod gap_fill;
mod grow;
mod refine;
mod seed;

pub use error::{RegionError, RegionResult};
pub use gap_fill::fill_gaps;
pub use grow::{grow_region, GrowConfig};
pub use refine::{keep_largest, remove_ears, trim_boundary};
pub use seed::{expand_vertices, select_interface, select_interface_with_opposite};
