//! Single- and double-layer boundary potentials on the unit square
//!
//! Midpoint-rule quadrature of the boundary integral operators over the
//! partition of the square's boundary induced by the mesh. The supplied
//! mesh must be a triangulation of the unit square; the outward normal is
//! resolved per side.

use crate::kernel::FundamentalSolution;
use harmonic_fem::{Mesh, Point};

const BOUNDARY_TOL: f64 = 1e-10;

/// Outward unit normal of the unit square at a boundary point
///
/// Panics if the point does not lie on the boundary of the unit square —
/// that is a caller contract breach, not a recoverable condition.
pub fn outer_normal_unit_square(p: Point) -> [f64; 2] {
    if (p.x - 1.0).abs() < BOUNDARY_TOL {
        [1.0, 0.0]
    } else if p.x.abs() < BOUNDARY_TOL {
        [-1.0, 0.0]
    } else if (p.y - 1.0).abs() < BOUNDARY_TOL {
        [0.0, 1.0]
    } else if p.y.abs() < BOUNDARY_TOL {
        [0.0, -1.0]
    } else {
        panic!(
            "Point ({}, {}) is not on the unit square boundary",
            p.x, p.y
        );
    }
}

/// Single-layer potential `PSL(v)(x) = ∫_∂Ω v(y) G_x(y) ds(y)`
///
/// Composite midpoint rule over the boundary edges of the mesh: one kernel
/// sample per edge midpoint, weighted by the edge length. Exact zero for
/// `v ≡ 0`.
pub fn single_layer<F>(mesh: &Mesh, v: F, x: Point) -> f64
where
    F: Fn(Point) -> f64,
{
    let g = FundamentalSolution::new(x);
    let mut acc = 0.0;

    for edge in &mesh.boundary {
        let [a, b] = mesh.edge_corners(edge);
        let midpoint = a.midpoint(&b);
        acc += v(midpoint) * g.value(midpoint) * mesh.edge_length(edge);
    }

    acc
}

/// Double-layer potential `PDL(v)(x) = ∫_∂Ω v(y) ∇G_x(y)·n(y) ds(y)`
///
/// Same midpoint quadrature as [`single_layer`], with the kernel replaced
/// by the normal derivative of the fundamental solution.
pub fn double_layer<F>(mesh: &Mesh, v: F, x: Point) -> f64
where
    F: Fn(Point) -> f64,
{
    let g = FundamentalSolution::new(x);
    let mut acc = 0.0;

    for edge in &mesh.boundary {
        let [a, b] = mesh.edge_corners(edge);
        let midpoint = a.midpoint(&b);
        let n = outer_normal_unit_square(midpoint);
        let grad = g.grad(midpoint);
        acc += v(midpoint) * (grad[0] * n[0] + grad[1] * n[1]) * mesh.edge_length(edge);
    }

    acc
}

/// Double-layer potential of the boundary trace of a P1 coefficient vector
///
/// The trace of a piecewise-linear function at an edge midpoint is the
/// mean of its endpoint coefficients, which keeps the midpoint quadrature
/// exact for the discrete trace.
pub fn double_layer_trace(mesh: &Mesh, coeffs: &ndarray::Array1<f64>, x: Point) -> f64 {
    assert_eq!(
        coeffs.len(),
        mesh.num_nodes(),
        "Coefficient vector length must match the node count"
    );

    let g = FundamentalSolution::new(x);
    let mut acc = 0.0;

    for edge in &mesh.boundary {
        let [a, b] = mesh.edge_corners(edge);
        let midpoint = a.midpoint(&b);
        let trace = 0.5 * (coeffs[edge.nodes[0]] + coeffs[edge.nodes[1]]);
        let n = outer_normal_unit_square(midpoint);
        let grad = g.grad(midpoint);
        acc += trace * (grad[0] * n[0] + grad[1] * n[1]) * mesh.edge_length(edge);
    }

    acc
}
