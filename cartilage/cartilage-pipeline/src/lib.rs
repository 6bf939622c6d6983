//! Per-joint cartilage shell synthesis pipelines.
//!
//! Each pipeline takes two bone surfaces and produces closed cartilage
//! shells plus a set of named measurements:
//!
//! - [`hip`]: acetabular and femoral layers, each extruded off its bone and
//!   closed with a uniform wall; the femoral base grows under a curvature
//!   gate and can cap the fovea with a cylinder.
//! - [`sacroiliac`]: both bone patches become the shell's two sheets
//!   directly, joined by a sweep wall between their rims.
//! - [`pubic`]: like the sacroiliac joint, with both sides seeded
//!   independently and no gap filling.
//!
//! The shared stage functions in [`stages`] are what the joint pipelines
//! compose; they are public so a study can rearrange them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod fovea;
pub mod hip;
mod params;
pub mod pubic;
pub mod sacroiliac;
mod seam;
pub mod stages;

pub use error::{PipelineError, PipelineResult};
pub use fovea::cap_fovea;
pub use params::{HipParams, LayerParams, SeamJointParams};
pub use seam::SeamOutput;
