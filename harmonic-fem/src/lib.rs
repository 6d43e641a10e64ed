//! P1 finite elements for the Laplace Dirichlet problem
//!
//! This crate provides the finite-element machinery behind the stable
//! point-evaluation core: triangular meshes of the unit square, linear
//! Lagrange elements, Galerkin stiffness/load assembly, essential
//! boundary conditions, and the boundary value problem solve.
//!
//! # Example
//!
//! ```ignore
//! use harmonic_fem::{mesh, LagrangeSpace, solve_bvp};
//!
//! let mesh = mesh::unit_square_triangles(8);
//! let space = LagrangeSpace::new(&mesh);
//!
//! // Solve -Δu = 0 with Dirichlet data g
//! let u_fe = solve_bvp(&space, |p| p.x + p.y)?;
//! ```

pub mod assembly;
pub mod basis;
pub mod boundary;
pub mod mesh;
pub mod quadrature;
pub mod solver;
pub mod space;

pub use mesh::{Mesh, Point, unit_square_triangles};
pub use solver::{BvpError, solve_bvp, solve_bvp_cg};
pub use space::LagrangeSpace;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
