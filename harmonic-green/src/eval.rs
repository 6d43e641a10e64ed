//! Stable point evaluation
//!
//! Assembles the pieces into the final evaluator, plus a reference
//! diagnostic driven by a known harmonic solution.

use crate::correction::jstar;
use crate::cutoff::R_IN;
use crate::layer::{double_layer, double_layer_trace, outer_normal_unit_square, single_layer};
use harmonic_fem::{LagrangeSpace, Mesh, Point};
use ndarray::Array1;

/// The reference harmonic function `u(y) = ln‖y + (1, 0)‖`
///
/// Harmonic on the unit square (its pole lies at (-1, 0), outside the
/// closure), used by [`point_eval`] and the validation suite.
pub fn reference_harmonic(y: Point) -> f64 {
    ((y.x + 1.0).powi(2) + y.y * y.y).sqrt().ln()
}

/// Normal component of the reference harmonic's gradient on the square boundary
pub fn reference_harmonic_flux(y: Point) -> f64 {
    let dx = y.x + 1.0;
    let dy = y.y;
    let r2 = dx * dx + dy * dy;
    let n = outer_normal_unit_square(y);
    (dx * n[0] + dy * n[1]) / r2
}

/// Stable evaluation of a harmonic finite-element solution at `x`
///
/// Implements the regularized Green's representation
/// `u(x) = J*(u_fe) - PDL(u_fe)`: the volume correction [`jstar`] carries
/// the single-layer flux term in mollified weak form, and the double layer
/// consumes the boundary trace of the coefficient vector. The result is
/// insensitive to where `x` falls relative to mesh nodes, unlike direct
/// nodal interpolation, whose error degrades as `x` approaches a node or
/// an edge.
///
/// `x` must lie strictly inside the unit square, within the region where
/// the cutoff vanishes.
pub fn stable_point_evaluation(space: &LagrangeSpace<'_>, u_fe: &Array1<f64>, x: Point) -> f64 {
    assert!(
        x.x > 0.0 && x.x < 1.0 && x.y > 0.0 && x.y < 1.0,
        "Evaluation point must lie strictly inside the unit square"
    );
    assert!(
        Point::new(0.5, 0.5).distance(&x) < R_IN,
        "Evaluation point must lie inside the cutoff hole"
    );

    jstar(space, u_fe, x) - double_layer_trace(space.mesh(), u_fe, x)
}

/// Reference diagnostic for the boundary potentials
///
/// Evaluates the representation formula `PSL(∂u/∂n) - PDL(u)` at
/// `x = (0.3, 0.4)` using the analytic Cauchy data of
/// [`reference_harmonic`], and returns the absolute discrepancy against
/// the analytic value. Converges at the rate of the midpoint quadrature
/// as the boundary partition is refined.
pub fn point_eval(mesh: &Mesh) -> f64 {
    let x = Point::new(0.3, 0.4);

    let psl = single_layer(mesh, reference_harmonic_flux, x);
    let pdl = double_layer(mesh, reference_harmonic, x);

    (psl - pdl - reference_harmonic(x)).abs()
}
