//! Triangular meshes of planar domains

mod generators;
mod types;

pub use generators::{rectangular_mesh_triangles, unit_square_triangles};
pub use types::{BoundaryEdge, Element, Mesh, Point};
