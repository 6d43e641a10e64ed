//! CG (Conjugate Gradient) solver
//!
//! The Conjugate Gradient method for symmetric positive definite systems.
//! The eliminated Laplace stiffness matrix is SPD, making CG the method of
//! choice when the mesh is too large for a dense factorization.

use crate::traits::LinearOperator;
use ndarray::Array1;

/// CG solver configuration
#[derive(Debug, Clone)]
pub struct CgConfig {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Relative tolerance for convergence
    pub tolerance: f64,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for CgConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-10,
            print_interval: 0,
        }
    }
}

/// CG solver result
#[derive(Debug)]
pub struct CgSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Number of iterations
    pub iterations: usize,
    /// Final relative residual
    pub residual: f64,
    /// Whether convergence was achieved
    pub converged: bool,
}

/// Solve Ax = b using the Conjugate Gradient method
///
/// Only correct for symmetric positive definite operators.
pub fn cg<A: LinearOperator>(operator: &A, b: &Array1<f64>, config: &CgConfig) -> CgSolution {
    let n = b.len();
    let mut x = Array1::zeros(n);

    let b_norm = norm(b);
    if b_norm < 1e-15 {
        return CgSolution {
            x,
            iterations: 0,
            residual: 0.0,
            converged: true,
        };
    }

    // Initial residual r = b - Ax = b (since x = 0)
    let mut r = b.clone();
    let mut p = r.clone();
    let mut rho = r.dot(&r);

    for iter in 0..config.max_iterations {
        let q = operator.apply(&p);

        let pq = p.dot(&q);
        if pq.abs() < 1e-30 {
            return CgSolution {
                x,
                iterations: iter,
                residual: norm(&r) / b_norm,
                converged: false,
            };
        }

        let alpha = rho / pq;
        x = &x + &(&p * alpha);
        r = &r - &(&q * alpha);

        let rel_residual = norm(&r) / b_norm;

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "CG iteration {}: relative residual = {:.6e}",
                iter + 1,
                rel_residual
            );
        }

        if rel_residual < config.tolerance {
            return CgSolution {
                x,
                iterations: iter + 1,
                residual: rel_residual,
                converged: true,
            };
        }

        let rho_new = r.dot(&r);
        let beta = rho_new / rho;
        rho = rho_new;

        // p = r + beta * p
        p = &r + &(&p * beta);
    }

    let rel_residual = norm(&r) / b_norm;
    CgSolution {
        x,
        iterations: config.max_iterations,
        residual: rel_residual,
        converged: false,
    }
}

#[inline]
fn norm(x: &Array1<f64>) -> f64 {
    x.dot(x).sqrt()
}
