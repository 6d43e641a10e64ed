//! Linear solvers for harmonic boundary value problems
//!
//! This crate provides the linear-algebra layer consumed by the FEM crate:
//! a CSR sparse matrix with triplet construction, a dense LU factorization
//! for direct solves, and a Conjugate Gradient solver for the symmetric
//! positive definite Galerkin systems produced by the Laplace operator.
//!
//! All scalars are `f64`: the Dirichlet problem for `-Δu = 0` is
//! real-valued, so no complex arithmetic is carried.

pub mod direct;
pub mod iterative;
pub mod sparse;
pub mod traits;

pub use direct::{LuError, LuFactorization, lu_factorize, lu_solve};
pub use iterative::{CgConfig, CgSolution, cg};
pub use sparse::CsrMatrix;
pub use traits::LinearOperator;
