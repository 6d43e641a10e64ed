//! Load vector assembly
//!
//! Assembles b_i = ∫ f φ_i dΩ. The Dirichlet problem solved here has a
//! homogeneous right-hand side, but the assembly contract is general.

use crate::basis::{Jacobian, p1_triangle};
use crate::mesh::{Mesh, Point};
use crate::quadrature::{QuadratureRule, map_to_physical};
use ndarray::Array1;

/// Assemble the load vector for a scalar source function
pub fn assemble_load<F>(mesh: &Mesh, source: F) -> Array1<f64>
where
    F: Fn(Point) -> f64,
{
    let mut rhs = Array1::zeros(mesh.num_nodes());
    let quad = QuadratureRule::new(2);

    for elem_idx in 0..mesh.num_elements() {
        let nodes = mesh.element(elem_idx).nodes;
        let corners = mesh.element_corners(elem_idx);
        let coords = [
            [corners[0].x, corners[0].y],
            [corners[1].x, corners[1].y],
            [corners[2].x, corners[2].y],
        ];
        let det_j = Jacobian::from_triangle(&coords).det.abs();

        for qp in quad.iter() {
            let shape = p1_triangle(qp.xi(), qp.eta());
            let y = map_to_physical(&corners, qp.xi(), qp.eta());
            let f_val = source(y);

            for (i, &gi) in nodes.iter().enumerate() {
                rhs[gi] += f_val * shape[i] * det_j * qp.weight;
            }
        }
    }

    rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::unit_square_triangles;

    #[test]
    fn test_zero_source() {
        let mesh = unit_square_triangles(4);
        let rhs = assemble_load(&mesh, |_| 0.0);
        assert!(rhs.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_constant_source_sums_to_area() {
        // Σ_i ∫ φ_i dΩ = |Ω| = 1 for f ≡ 1
        let mesh = unit_square_triangles(4);
        let rhs = assemble_load(&mesh, |_| 1.0);
        let sum: f64 = rhs.sum();
        assert!((sum - 1.0).abs() < 1e-12, "RHS sum {} should be 1", sum);
    }
}
