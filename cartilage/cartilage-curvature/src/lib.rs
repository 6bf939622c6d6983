//! Discrete curvature measures for triangle meshes.
//!
//! Region growth on the femoral head admits candidate faces by curvature, so
//! concave acetabular cups and convex femoral caps can be told apart without
//! any registration. Curvature is computed per vertex with the standard
//! discrete operators (cotangent Laplacian for mean curvature, angle defect
//! for Gaussian) and averaged onto faces.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod curvature;
mod error;
mod measure;

pub use curvature::{face_curvature, vertex_curvatures, VertexCurvatures};
pub use error::{CurvatureError, CurvatureResult};
pub use measure::CurvatureMeasure;
