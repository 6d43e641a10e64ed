//! Linear Lagrange basis functions on the reference triangle
//!
//! Reference triangle: (0,0), (1,0), (0,1).

/// Evaluate P1 triangle basis functions at (xi, eta)
///
/// Returns [N0, N1, N2], the barycentric coordinates.
pub fn p1_triangle(xi: f64, eta: f64) -> [f64; 3] {
    [1.0 - xi - eta, xi, eta]
}

/// P1 triangle basis function gradients (constant over the element)
///
/// Returns [[dN0/dxi, dN0/deta], [dN1/dxi, dN1/deta], [dN2/dxi, dN2/deta]]
pub fn p1_triangle_grad() -> [[f64; 2]; 3] {
    [[-1.0, -1.0], [1.0, 0.0], [0.0, 1.0]]
}
