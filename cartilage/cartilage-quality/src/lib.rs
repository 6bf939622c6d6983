//! Boundary quality control for cartilage base layers.
//!
//! Trimming and growth leave the patch rim jagged, and a jagged rim folds
//! when it is extruded and walled. Quality control runs a loop over each base
//! layer before extrusion:
//!
//! 1. [`smooth_boundary`] relaxes the rim along its boundary loops and snaps
//!    every moved vertex back onto the bone surface, so smoothing never
//!    pulls the layer off the anatomy.
//! 2. [`fold_vertices`] finds rim vertices whose incident face normals
//!    disagree by more than a threshold angle, the signature of a fold.
//! 3. [`repair_folds`] deletes faces carrying folded vertices and rechecks,
//!    until the rim is clean or the retry cap is hit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod dihedral;
mod error;
mod repair;
mod smooth;

pub use dihedral::{fold_vertices, normal_spread, DEFAULT_FOLD_THRESHOLD};
pub use error::{QualityError, QualityResult};
pub use repair::{remove_folded_faces, repair_folds};
pub use smooth::{smooth_boundary, SmoothConfig};
