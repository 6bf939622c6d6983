//! Side-wall closure between cartilage layer boundaries.
//!
//! An extruded layer is two parallel sheets with a gap around the rim. The
//! wall closes that gap:
//!
//! - [`uniform_wall`] bridges a boundary loop to its displaced twin, where
//!   both copies share the same loop indices (offset by the merge).
//! - [`sweep_wall`] bridges two *different* loops of unequal length and
//!   vertex count by sweeping both in lockstep over a normalized arc-length
//!   parameter, the way the sacroiliac and pubic shells join their two
//!   independently refined base layers.
//! - [`upsample`] densifies a merged shell by midpoint 1-to-4 subdivision,
//!   which turns the single-row sweep wall into a workable strip.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod sweep;
mod uniform;
mod upsample;

pub use error::{WallError, WallResult};
pub use sweep::sweep_wall;
pub use uniform::uniform_wall;
pub use upsample::upsample;
