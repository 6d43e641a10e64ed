//! Lagrange finite element space
//!
//! Pairs a mesh with degree-1 shape functions and the nodal degree-of-freedom
//! numbering. One scalar unknown per mesh node.

use crate::basis::p1_triangle;
use crate::mesh::{Mesh, Point};
use ndarray::Array1;

/// Piecewise-linear Lagrange space on a triangulation
#[derive(Debug, Clone, Copy)]
pub struct LagrangeSpace<'a> {
    mesh: &'a Mesh,
}

impl<'a> LagrangeSpace<'a> {
    /// Create the space over a mesh
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// The underlying mesh
    pub fn mesh(&self) -> &'a Mesh {
        self.mesh
    }

    /// Dimension of the discrete space (one DoF per node)
    pub fn num_dofs(&self) -> usize {
        self.mesh.num_nodes()
    }

    /// Nodal interpolant of a scalar function
    pub fn nodal_interpolant<F>(&self, f: F) -> Array1<f64>
    where
        F: Fn(Point) -> f64,
    {
        Array1::from_iter(self.mesh.nodes.iter().map(|&p| f(p)))
    }

    /// Evaluate a coefficient vector at a reference point of one cell
    pub fn eval_on_cell(&self, coeffs: &Array1<f64>, cell: usize, xi: f64, eta: f64) -> f64 {
        assert_eq!(
            coeffs.len(),
            self.num_dofs(),
            "Coefficient vector length must match the DoF count"
        );
        let nodes = self.mesh.element(cell).nodes;
        let shape = p1_triangle(xi, eta);
        nodes
            .iter()
            .zip(shape.iter())
            .map(|(&n, &s)| coeffs[n] * s)
            .sum()
    }
}
