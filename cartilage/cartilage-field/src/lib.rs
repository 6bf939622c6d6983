//! Thickness fields and boundary-value blending over mesh patches.
//!
//! The extrusion height of a cartilage layer is a per-vertex scalar field
//! built in three steps:
//!
//! 1. [`assign_thickness`] samples the joint space: each patch vertex gets a
//!    share of its distance to the opposing bone.
//! 2. [`taper_ramp`] fades the field to zero over a geodesic band at the
//!    patch rim, so the layer feathers out instead of ending in a cliff.
//! 3. [`blend_field`] solves a harmonic or biharmonic boundary-value problem
//!    (cotangent Laplacian, conjugate gradient) that interpolates smoothly
//!    between the interior thickness and the rim taper.
//!
//! [`clamp_field`] caps the blended result so the smooth interpolant can
//! never overshoot the measured joint space.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod blend;
mod error;
mod taper;
mod thickness;

pub use blend::{blend_field, BlendOrder};
pub use error::{FieldError, FieldResult};
pub use taper::taper_ramp;
pub use thickness::{assign_thickness, clamp_field, ThicknessProfile};
