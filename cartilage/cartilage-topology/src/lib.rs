//! Adjacency, boundary and component analysis for triangle meshes.
//!
//! Every function here operates on a bare face slice (`&[[u32; 3]]`) rather
//! than a full mesh, because region refinement repeatedly re-analyzes
//! gathered sub-regions whose indices still point into the parent mesh's
//! vertex array.
//!
//! # Example
//!
//! ```
//! use cartilage_topology::boundary_edges;
//!
//! // Two triangles sharing the diagonal 1-2: four boundary edges.
//! let faces = [[0, 1, 2], [1, 3, 2]];
//! let edges = boundary_edges(&faces);
//! assert_eq!(edges.len(), 4);
//! assert!(!edges.contains(&[1, 2]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod adjacency;
mod boundary;
mod components;
mod ears;
mod error;

pub use adjacency::VertexFaceAdjacency;
pub use boundary::{
    boundary_edges, boundary_faces, boundary_loops, boundary_vertices, longest_boundary_loop,
};
pub use components::{connected_components, largest_component, FaceComponents};
pub use ears::find_ears;
pub use error::{TopologyError, TopologyResult};
