//! Stiffness matrix assembly
//!
//! Assembles the Galerkin matrix for `-Δ`: K_ij = ∫ ∇φ_i · ∇φ_j dΩ.

use crate::basis::{Jacobian, p1_triangle_grad};
use crate::mesh::Mesh;
use crate::quadrature::QuadratureRule;
use harmonic_solvers::CsrMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Assembled stiffness matrix in triplet format
#[derive(Debug, Clone)]
pub struct StiffnessMatrix {
    /// Row indices
    pub rows: Vec<usize>,
    /// Column indices
    pub cols: Vec<usize>,
    /// Values
    pub values: Vec<f64>,
    /// Matrix dimension
    pub dim: usize,
}

impl StiffnessMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            rows: Vec::new(),
            cols: Vec::new(),
            values: Vec::new(),
            dim,
        }
    }

    /// Add a triplet (i, j, value)
    pub fn add(&mut self, i: usize, j: usize, value: f64) {
        self.rows.push(i);
        self.cols.push(j);
        self.values.push(value);
    }

    /// Number of non-zeros (may include duplicates before compression)
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Convert to CSR format, summing duplicate entries
    pub fn to_csr(&self) -> CsrMatrix {
        let triplets: Vec<(usize, usize, f64)> = self
            .rows
            .iter()
            .zip(self.cols.iter())
            .zip(self.values.iter())
            .map(|((&r, &c), &v)| (r, c, v))
            .collect();
        CsrMatrix::from_triplets(self.dim, self.dim, triplets)
    }
}

/// Compute element stiffness contributions (triplets for one triangle)
fn compute_element_stiffness(mesh: &Mesh, elem_idx: usize) -> Vec<(usize, usize, f64)> {
    let nodes = mesh.element(elem_idx).nodes;
    let coords: [[f64; 2]; 3] = {
        let [p0, p1, p2] = mesh.element_corners(elem_idx);
        [[p0.x, p0.y], [p1.x, p1.y], [p2.x, p2.y]]
    };

    let grads_ref = p1_triangle_grad();
    let quad = QuadratureRule::new(1);

    let mut k_local = [[0.0; 3]; 3];
    for qp in quad.iter() {
        // P1 gradients are constant; the Jacobian is affine per element
        let jac = Jacobian::from_triangle(&coords);
        let det_j = jac.det.abs();

        let grads_phys: Vec<[f64; 2]> = grads_ref
            .iter()
            .map(|g| jac.transform_gradient(g))
            .collect();

        for i in 0..3 {
            for j in 0..3 {
                let dot = grads_phys[i][0] * grads_phys[j][0] + grads_phys[i][1] * grads_phys[j][1];
                k_local[i][j] += dot * det_j * qp.weight;
            }
        }
    }

    let mut triplets = Vec::with_capacity(9);
    for (i, &gi) in nodes.iter().enumerate() {
        for (j, &gj) in nodes.iter().enumerate() {
            triplets.push((gi, gj, k_local[i][j]));
        }
    }
    triplets
}

/// Assemble the global stiffness matrix for `-Δ`
pub fn assemble_stiffness(mesh: &Mesh) -> StiffnessMatrix {
    #[cfg(feature = "parallel")]
    {
        assemble_stiffness_parallel(mesh)
    }
    #[cfg(not(feature = "parallel"))]
    {
        assemble_stiffness_sequential(mesh)
    }
}

#[cfg(not(feature = "parallel"))]
fn assemble_stiffness_sequential(mesh: &Mesh) -> StiffnessMatrix {
    let mut matrix = StiffnessMatrix::new(mesh.num_nodes());
    for elem_idx in 0..mesh.num_elements() {
        for (gi, gj, val) in compute_element_stiffness(mesh, elem_idx) {
            matrix.add(gi, gj, val);
        }
    }
    matrix
}

#[cfg(feature = "parallel")]
fn assemble_stiffness_parallel(mesh: &Mesh) -> StiffnessMatrix {
    let all_triplets: Vec<Vec<(usize, usize, f64)>> = (0..mesh.num_elements())
        .into_par_iter()
        .map(|elem_idx| compute_element_stiffness(mesh, elem_idx))
        .collect();

    let total: usize = all_triplets.iter().map(|t| t.len()).sum();
    let mut matrix = StiffnessMatrix::new(mesh.num_nodes());
    matrix.rows.reserve(total);
    matrix.cols.reserve(total);
    matrix.values.reserve(total);

    for triplets in all_triplets {
        for (i, j, v) in triplets {
            matrix.add(i, j, v);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::unit_square_triangles;

    #[test]
    fn test_stiffness_assembly() {
        let mesh = unit_square_triangles(2);
        let stiffness = assemble_stiffness(&mesh);

        assert_eq!(stiffness.dim, mesh.num_nodes());
        assert!(stiffness.nnz() > 0);
    }

    #[test]
    fn test_stiffness_symmetry() {
        let mesh = unit_square_triangles(2);
        let dense = assemble_stiffness(&mesh).to_csr().to_dense();

        let n = dense.nrows();
        for i in 0..n {
            for j in 0..n {
                assert!(
                    (dense[[i, j]] - dense[[j, i]]).abs() < 1e-12,
                    "Asymmetric at ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_stiffness_rows_sum_to_zero() {
        // Constants are in the kernel of the Laplace stiffness matrix
        let mesh = unit_square_triangles(3);
        let dense = assemble_stiffness(&mesh).to_csr().to_dense();

        for i in 0..dense.nrows() {
            let row_sum: f64 = dense.row(i).sum();
            assert!(row_sum.abs() < 1e-12, "Row {} sums to {}", i, row_sum);
        }
    }
}
