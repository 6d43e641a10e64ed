//! Compressed Sparse Row (CSR) matrix format
//!
//! CSR format stores:
//! - `values`: non-zero entries in row-major order
//! - `col_indices`: column index for each value
//! - `row_ptrs`: index into values/col_indices where each row starts

use crate::traits::LinearOperator;
use ndarray::{Array1, Array2};
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compressed Sparse Row (CSR) matrix over `f64`
///
/// O(nnz) storage; matrix-vector products are O(nnz) instead of O(n²).
#[derive(Debug, Clone)]
pub struct CsrMatrix {
    /// Number of rows
    pub num_rows: usize,
    /// Number of columns
    pub num_cols: usize,
    /// Non-zero values in row-major order
    pub values: Vec<f64>,
    /// Column indices for each value
    pub col_indices: Vec<usize>,
    /// Row pointers: row_ptrs[i] is the start index for row i,
    /// row_ptrs[num_rows] = nnz
    pub row_ptrs: Vec<usize>,
}

impl CsrMatrix {
    /// Create a new empty CSR matrix
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            values: Vec::new(),
            col_indices: Vec::new(),
            row_ptrs: vec![0; num_rows + 1],
        }
    }

    /// Create a CSR matrix from COO (coordinate) format triplets
    ///
    /// Triplets are (row, col, value). Duplicate entries are summed, which
    /// is exactly what local-to-global FEM assembly needs.
    pub fn from_triplets(
        num_rows: usize,
        num_cols: usize,
        mut triplets: Vec<(usize, usize, f64)>,
    ) -> Self {
        triplets.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut values = Vec::with_capacity(triplets.len());
        let mut col_indices = Vec::with_capacity(triplets.len());
        let mut row_counts = vec![0usize; num_rows + 1];

        let mut prev: Option<(usize, usize)> = None;
        for (row, col, val) in triplets {
            assert!(row < num_rows && col < num_cols, "Triplet out of bounds");
            if prev == Some((row, col)) {
                if let Some(last) = values.last_mut() {
                    *last += val;
                }
            } else {
                values.push(val);
                col_indices.push(col);
                row_counts[row + 1] += 1;
                prev = Some((row, col));
            }
        }

        // Prefix sum turns per-row counts into row pointers
        let mut row_ptrs = row_counts;
        for i in 0..num_rows {
            row_ptrs[i + 1] += row_ptrs[i];
        }

        Self {
            num_rows,
            num_cols,
            values,
            col_indices,
            row_ptrs,
        }
    }

    /// Create a CSR matrix from a dense matrix
    ///
    /// Only stores entries with magnitude > threshold
    pub fn from_dense(dense: &Array2<f64>, threshold: f64) -> Self {
        let num_rows = dense.nrows();
        let num_cols = dense.ncols();

        let mut values = Vec::new();
        let mut col_indices = Vec::new();
        let mut row_ptrs = vec![0usize; num_rows + 1];

        for i in 0..num_rows {
            for j in 0..num_cols {
                let val = dense[[i, j]];
                if val.abs() > threshold {
                    values.push(val);
                    col_indices.push(j);
                }
            }
            row_ptrs[i + 1] = values.len();
        }

        Self {
            num_rows,
            num_cols,
            values,
            col_indices,
            row_ptrs,
        }
    }

    /// Identity matrix of dimension n
    pub fn identity(n: usize) -> Self {
        Self {
            num_rows: n,
            num_cols: n,
            values: vec![1.0; n],
            col_indices: (0..n).collect(),
            row_ptrs: (0..=n).collect(),
        }
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Sparsity ratio (fraction of non-zero entries)
    pub fn sparsity(&self) -> f64 {
        let total = self.num_rows * self.num_cols;
        if total == 0 {
            0.0
        } else {
            self.nnz() as f64 / total as f64
        }
    }

    /// Get the range of indices in values/col_indices for a given row
    pub fn row_range(&self, row: usize) -> Range<usize> {
        self.row_ptrs[row]..self.row_ptrs[row + 1]
    }

    /// Get the (col, value) pairs for a row
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_range(row);
        self.col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Matrix-vector product: y = A * x
    pub fn matvec(&self, x: &Array1<f64>) -> Array1<f64> {
        assert_eq!(x.len(), self.num_cols, "Input vector size mismatch");

        #[cfg(feature = "parallel")]
        {
            // Small systems lose more to thread dispatch than they gain
            if self.num_rows >= 256 {
                return self.matvec_parallel(x);
            }
        }

        self.matvec_sequential(x)
    }

    fn matvec_sequential(&self, x: &Array1<f64>) -> Array1<f64> {
        let mut y = Array1::zeros(self.num_rows);
        for i in 0..self.num_rows {
            let mut sum = 0.0;
            for (col, val) in self.row_entries(i) {
                sum += val * x[col];
            }
            y[i] = sum;
        }
        y
    }

    #[cfg(feature = "parallel")]
    fn matvec_parallel(&self, x: &Array1<f64>) -> Array1<f64> {
        let y: Vec<f64> = (0..self.num_rows)
            .into_par_iter()
            .map(|i| self.row_entries(i).map(|(col, val)| val * x[col]).sum())
            .collect();
        Array1::from(y)
    }

    /// Convert to a dense matrix (for the direct solver)
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.num_rows, self.num_cols));
        for i in 0..self.num_rows {
            for (col, val) in self.row_entries(i) {
                dense[[i, col]] += val;
            }
        }
        dense
    }
}

impl LinearOperator for CsrMatrix {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn apply(&self, x: &Array1<f64>) -> Array1<f64> {
        self.matvec(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_triplets_sums_duplicates() {
        let triplets = vec![(0, 0, 1.0), (0, 1, 2.0), (0, 0, 3.0), (1, 1, 5.0)];
        let m = CsrMatrix::from_triplets(2, 2, triplets);

        assert_eq!(m.nnz(), 3);
        let dense = m.to_dense();
        assert_eq!(dense[[0, 0]], 4.0);
        assert_eq!(dense[[0, 1]], 2.0);
        assert_eq!(dense[[1, 0]], 0.0);
        assert_eq!(dense[[1, 1]], 5.0);
    }

    #[test]
    fn test_from_triplets_empty_rows() {
        // Row 1 has no entries; its pointer range must be empty
        let triplets = vec![(0, 0, 1.0), (2, 2, 2.0)];
        let m = CsrMatrix::from_triplets(3, 3, triplets);

        assert_eq!(m.row_range(0), 0..1);
        assert_eq!(m.row_range(1), 1..1);
        assert_eq!(m.row_range(2), 1..2);
    }

    #[test]
    fn test_matvec() {
        let dense = array![[2.0, 0.0, 1.0], [0.0, 3.0, 0.0], [1.0, 0.0, 4.0]];
        let m = CsrMatrix::from_dense(&dense, 1e-15);
        let x = array![1.0, 2.0, 3.0];

        let y = m.matvec(&x);
        assert_eq!(y, array![5.0, 6.0, 13.0]);
    }

    #[test]
    fn test_identity() {
        let id = CsrMatrix::identity(4);
        let x = array![1.0, -2.0, 3.0, 0.5];
        assert_eq!(id.matvec(&x), x);
    }

    #[test]
    fn test_dense_roundtrip() {
        let dense = array![[1.0, 0.0], [0.0, -2.5]];
        let m = CsrMatrix::from_dense(&dense, 1e-15);
        assert_eq!(m.to_dense(), dense);
    }
}
