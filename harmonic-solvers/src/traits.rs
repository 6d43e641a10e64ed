//! Operator abstraction shared by the iterative solvers

use ndarray::Array1;

/// A linear operator that can perform matrix-vector products.
///
/// Lets the iterative solvers work with sparse matrices and matrix-free
/// operators interchangeably.
pub trait LinearOperator: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    fn apply(&self, x: &Array1<f64>) -> Array1<f64>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}
