//! Boundary value problem solver
//!
//! Solves the Dirichlet problem `-Δu = 0` with given boundary data:
//! assemble the Galerkin system, eliminate the essential conditions, and
//! run a direct sparse-to-dense LU factorization (the default) or CG.

use crate::assembly::{assemble_load, assemble_stiffness};
use crate::boundary::apply_dirichlet;
use crate::mesh::Point;
use crate::space::LagrangeSpace;
use harmonic_solvers::{CgConfig, LuError, cg, lu_solve};
use ndarray::Array1;
use thiserror::Error;

/// Errors from the BVP solve
#[derive(Debug, Error)]
pub enum BvpError {
    #[error("Direct solve failed: {0}")]
    Factorization(#[from] LuError),
    #[error("CG failed to converge after {iterations} iterations (residual {residual:.3e})")]
    NotConverged { iterations: usize, residual: f64 },
}

/// Solve `-Δu = 0` with Dirichlet data `u_bd` using a direct factorization
///
/// Returns the nodal coefficient vector of the discrete solution.
pub fn solve_bvp<F>(space: &LagrangeSpace<'_>, u_bd: F) -> Result<Array1<f64>, BvpError>
where
    F: Fn(Point) -> f64,
{
    let mesh = space.mesh();
    let n_dofs = space.num_dofs();

    // Galerkin matrix for -Δ and homogeneous right-hand side
    let mut matrix = assemble_stiffness(mesh);
    let mut rhs = assemble_load(mesh, |_| 0.0);

    // Essential boundary conditions
    apply_dirichlet(&mut matrix, &mut rhs, mesh, u_bd);

    let csr = matrix.to_csr();
    log::debug!(
        "BVP system: {} DoFs, {} nnz, sparsity {:.4}%",
        n_dofs,
        csr.nnz(),
        csr.sparsity() * 100.0
    );

    let solution = lu_solve(&csr.to_dense(), &rhs)?;
    Ok(solution)
}

/// Solve `-Δu = 0` with Dirichlet data using Conjugate Gradient
///
/// The eliminated system is symmetric positive definite; CG avoids the
/// dense factorization on finer meshes.
pub fn solve_bvp_cg<F>(space: &LagrangeSpace<'_>, u_bd: F) -> Result<Array1<f64>, BvpError>
where
    F: Fn(Point) -> f64,
{
    let mesh = space.mesh();

    let mut matrix = assemble_stiffness(mesh);
    let mut rhs = assemble_load(mesh, |_| 0.0);
    apply_dirichlet(&mut matrix, &mut rhs, mesh, u_bd);

    let csr = matrix.to_csr();
    let config = CgConfig {
        max_iterations: 10 * space.num_dofs().max(100),
        tolerance: 1e-12,
        print_interval: 0,
    };
    let result = cg(&csr, &rhs, &config);

    log::debug!(
        "BVP CG solve: {} iterations, residual {:.3e}",
        result.iterations,
        result.residual
    );

    if !result.converged {
        return Err(BvpError::NotConverged {
            iterations: result.iterations,
            residual: result.residual,
        });
    }
    Ok(result.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::unit_square_triangles;

    #[test]
    fn test_linear_solution_is_exact() {
        // u(x, y) = x + 2y is harmonic and lies in the P1 space, so the
        // Galerkin solution reproduces it to roundoff
        let mesh = unit_square_triangles(4);
        let space = LagrangeSpace::new(&mesh);

        let u = solve_bvp(&space, |p| p.x + 2.0 * p.y).expect("BVP solve should succeed");

        for (i, node) in mesh.nodes.iter().enumerate() {
            let exact = node.x + 2.0 * node.y;
            assert!(
                (u[i] - exact).abs() < 1e-10,
                "Node {}: {} vs {}",
                i,
                u[i],
                exact
            );
        }
    }

    #[test]
    fn test_constant_boundary_data() {
        // Constant boundary data propagates exactly: u ≡ c
        let mesh = unit_square_triangles(4);
        let space = LagrangeSpace::new(&mesh);

        let u = solve_bvp(&space, |_| 3.5).expect("BVP solve should succeed");
        for &v in u.iter() {
            assert!((v - 3.5).abs() < 1e-10);
        }
    }

    #[test]
    fn test_direct_and_cg_agree() {
        let mesh = unit_square_triangles(6);
        let space = LagrangeSpace::new(&mesh);
        let g = |p: Point| (p.x * p.x - p.y * p.y) + 0.5 * p.x;

        let direct = solve_bvp(&space, g).expect("direct solve");
        let iterative = solve_bvp_cg(&space, g).expect("cg solve");

        for i in 0..space.num_dofs() {
            assert!(
                (direct[i] - iterative[i]).abs() < 1e-8,
                "DoF {}: {} vs {}",
                i,
                direct[i],
                iterative[i]
            );
        }
    }
}
