//! Normal-offset extrusion of mesh patches.
//!
//! A cartilage layer's outer surface is the bone patch pushed outward along
//! area-weighted vertex normals, either by a per-vertex thickness field or by
//! a uniform offset. Extrusion is pure: the input mesh is untouched and a new
//! mesh with fresh vertex storage comes back, so the base patch survives for
//! wall closure.
//!
//! # Example
//!
//! ```
//! use cartilage_extrude::extrude_uniform;
//! use cartilage_types::{Point3, SurfaceMesh};
//!
//! let patch = SurfaceMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! let raised = extrude_uniform(&patch, 2.0).unwrap();
//! assert!((raised.vertices[0].z - 2.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod extrude;

pub use error::{ExtrudeError, ExtrudeResult};
pub use extrude::{extrude_along_normals, extrude_uniform};
