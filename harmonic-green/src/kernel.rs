//! Fundamental solution of the 2D Laplace operator

use harmonic_fem::Point;
use std::f64::consts::PI;

/// The fundamental solution `G_x(y) = -ln‖x - y‖ / (2π)` for a fixed pole `x`
///
/// A stateless evaluator: the pole is an immutable parameter, so independent
/// evaluation points can each carry their own instance. Both `value` and
/// `grad` are undefined at `y == x`; callers must keep quadrature points
/// away from the pole.
#[derive(Debug, Clone, Copy)]
pub struct FundamentalSolution {
    x: Point,
}

impl FundamentalSolution {
    /// Create the kernel with pole `x`
    pub fn new(x: Point) -> Self {
        Self { x }
    }

    /// The pole of the kernel
    pub fn pole(&self) -> Point {
        self.x
    }

    /// Evaluate `G_x(y)`
    pub fn value(&self, y: Point) -> f64 {
        let r = self.x.distance(&y);
        assert!(r > 0.0, "Fundamental solution evaluated at its pole");
        -r.ln() / (2.0 * PI)
    }

    /// Evaluate `∇_y G_x(y) = (x - y) / (2π‖x - y‖²)`
    pub fn grad(&self, y: Point) -> [f64; 2] {
        let dx = self.x.x - y.x;
        let dy = self.x.y - y.y;
        let r2 = dx * dx + dy * dy;
        assert!(r2 > 0.0, "Fundamental solution gradient evaluated at its pole");
        [dx / (2.0 * PI * r2), dy / (2.0 * PI * r2)]
    }
}
