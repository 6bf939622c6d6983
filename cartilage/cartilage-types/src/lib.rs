//! Core mesh types for the cartilage synthesis toolkit.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace:
//!
//! - [`SurfaceMesh`] - An indexed triangle mesh
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`FaceSet`] - An ordered set of face indices denoting a sub-region
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Convergence`] - Fixed-point-vs-cap status for iterative algorithms
//!
//! # Units
//!
//! All coordinates are `f64` millimeters. Unit conversion happens at the I/O
//! boundary, never here.
//!
//! # Winding
//!
//! Faces use counter-clockwise winding when viewed from outside, so normals
//! point outward by the right-hand rule. Bone surfaces read from segmentation
//! pipelines follow this convention; the synthesis pipeline preserves it.
//!
//! # Example
//!
//! ```
//! use cartilage_types::{SurfaceMesh, Point3};
//!
//! let mut mesh = SurfaceMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod convergence;
mod face_set;
mod mesh;
mod triangle;

pub use bounds::Aabb;
pub use convergence::Convergence;
pub use face_set::FaceSet;
pub use mesh::SurfaceMesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
