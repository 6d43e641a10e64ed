//! LU decomposition solver
//!
//! LU factorization with partial pivoting for dense linear systems. The
//! eliminated Galerkin systems on the meshes used here are small enough
//! that a dense factorization is the intended direct solve.

use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during LU factorization
#[derive(Error, Debug)]
pub enum LuError {
    #[error("Matrix is singular or nearly singular")]
    SingularMatrix,
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// LU factorization result
///
/// Stores the combined L and U factors along with pivot information, so
/// a single factorization can serve multiple right-hand sides.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Combined L and U matrices (L is unit lower triangular, stored below the diagonal)
    pub lu: Array2<f64>,
    /// Pivot indices
    pub pivots: Vec<usize>,
    /// Matrix dimension
    pub n: usize,
}

impl LuFactorization {
    /// Solve Ax = b using the pre-computed factorization
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, LuError> {
        if b.len() != self.n {
            return Err(LuError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        let mut x = b.clone();

        // Apply row permutations
        for i in 0..self.n {
            let pivot = self.pivots[i];
            if pivot != i {
                x.swap(i, pivot);
            }
        }

        // Forward substitution: Ly = Pb
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu[[i, j]];
                x[i] -= l_ij * x[j];
            }
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu[[i, j]];
                x[i] -= u_ij * x[j];
            }
            let u_ii = self.lu[[i, i]];
            if u_ii.abs() < 1e-30 {
                return Err(LuError::SingularMatrix);
            }
            x[i] /= u_ii;
        }

        Ok(x)
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize(a: &Array2<f64>) -> Result<LuFactorization, LuError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }

    let mut lu = a.clone();
    let mut pivots: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < 1e-30 {
            return Err(LuError::SingularMatrix);
        }

        // Swap rows if needed
        if max_row != k {
            for j in 0..n {
                lu.swap([k, j], [max_row, j]);
            }
            pivots.swap(k, max_row);
        }

        // Compute multipliers and eliminate
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult; // Store multiplier in the L part
            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(LuFactorization { lu, pivots, n })
}

/// Solve Ax = b, combining factorization and solve
pub fn lu_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, LuError> {
    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}
