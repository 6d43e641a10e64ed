//! Dirichlet (essential) boundary conditions
//!
//! Imposes u = g on the boundary by eliminating the fixed degrees of
//! freedom from the assembled system.

use crate::assembly::StiffnessMatrix;
use crate::mesh::{Mesh, Point};
use ndarray::Array1;
use std::collections::HashMap;

/// Eliminate Dirichlet degrees of freedom from the linear system
///
/// For each boundary node i with value g_i:
/// - b[j] -= A[j, i] * g_i for all free rows j (keeps the reduced system symmetric)
/// - row i is replaced by the identity row, b[i] = g_i
pub fn apply_dirichlet<F>(matrix: &mut StiffnessMatrix, rhs: &mut Array1<f64>, mesh: &Mesh, g: F)
where
    F: Fn(Point) -> f64,
{
    // Fixed DoFs and their boundary values
    let mut fixed: HashMap<usize, f64> = HashMap::new();
    for node in mesh.boundary_nodes() {
        fixed.insert(node, g(*mesh.node(node)));
    }

    // RHS correction from the eliminated columns
    for k in 0..matrix.nnz() {
        let row = matrix.rows[k];
        let col = matrix.cols[k];
        if !fixed.contains_key(&row) {
            if let Some(&g_col) = fixed.get(&col) {
                rhs[row] -= matrix.values[k] * g_col;
            }
        }
    }

    // Fixed values on the RHS
    for (&node, &value) in &fixed {
        rhs[node] = value;
    }

    // Rebuild triplets: drop fixed rows and columns, unit diagonal on fixed rows
    let mut rows = Vec::with_capacity(matrix.nnz());
    let mut cols = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    for k in 0..matrix.nnz() {
        let row = matrix.rows[k];
        let col = matrix.cols[k];
        if fixed.contains_key(&row) || fixed.contains_key(&col) {
            continue;
        }
        rows.push(row);
        cols.push(col);
        values.push(matrix.values[k]);
    }
    for &node in fixed.keys() {
        rows.push(node);
        cols.push(node);
        values.push(1.0);
    }

    matrix.rows = rows;
    matrix.cols = cols;
    matrix.values = values;
}
