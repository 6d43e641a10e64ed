//! Stable point evaluation of harmonic finite-element solutions
//!
//! Evaluating a Galerkin solution of `-Δu = 0` at an interior point by
//! direct nodal interpolation loses accuracy when the point is not
//! aligned with the mesh. This crate instead evaluates through Green's
//! representation formula, regularized by a compactly supported radial
//! cutoff so the singular fundamental solution is never sampled at its
//! pole:
//!
//! - [`FundamentalSolution`]: the 2D Laplace kernel `G_x(y)` and its gradient
//! - [`CutoffFunction`]: the radial mollifier `ψ` with value, gradient, Laplacian
//! - [`single_layer`] / [`double_layer`]: midpoint-rule boundary potentials
//!   on the unit square
//! - [`jstar`]: the regularized volume correction
//! - [`stable_point_evaluation`]: the assembled stable value `u(x)`
//! - [`point_eval`]: reference diagnostic against a known harmonic solution
//!
//! # Example
//!
//! ```ignore
//! use harmonic_fem::{LagrangeSpace, Point, solve_bvp, unit_square_triangles};
//! use harmonic_green::stable_point_evaluation;
//!
//! let mesh = unit_square_triangles(8);
//! let space = LagrangeSpace::new(&mesh);
//! let u_fe = solve_bvp(&space, |p| ((p.x + 1.0).powi(2) + p.y * p.y).sqrt().ln())?;
//!
//! let value = stable_point_evaluation(&space, &u_fe, Point::new(0.3, 0.4));
//! ```

pub mod correction;
pub mod cutoff;
pub mod eval;
pub mod kernel;
pub mod layer;

pub use correction::jstar;
pub use cutoff::CutoffFunction;
pub use eval::{point_eval, stable_point_evaluation};
pub use kernel::FundamentalSolution;
pub use layer::{double_layer, double_layer_trace, outer_normal_unit_square, single_layer};
