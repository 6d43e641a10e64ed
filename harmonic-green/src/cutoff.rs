//! Compactly supported radial cutoff (mollifier) function
//!
//! `ψ` vanishes on an inner disk containing the evaluation region, equals
//! one beyond the outer radius, and transitions with a cosine-squared
//! profile in between. Multiplying the fundamental solution by `ψ` keeps
//! its singularity out of every integral the evaluator computes.

use harmonic_fem::Point;
use std::f64::consts::{PI, SQRT_2};

/// Inner radius: `ψ ≡ 0` for `r ≤ R_IN`
pub const R_IN: f64 = 0.25 * SQRT_2;

/// Outer radius: `ψ ≡ 1` for `r ≥ R_OUT`
pub const R_OUT: f64 = 0.5;

/// Transition constant, derived from the continuity conditions
/// `cos²(c·(r_out - r_out)) = 1` and `cos²(c·(r_in - r_out)) = 0`
const C: f64 = PI / (2.0 * (R_IN - R_OUT));

/// Radial cutoff function centered at a fixed point
///
/// Piecewise profile over `r = ‖y - center‖`:
/// zero inside `R_IN`, one outside `R_OUT`, `cos²(c·(r - R_OUT))` between.
/// Value and gradient are continuous at both radii (the sine factor in the
/// radial derivative vanishes there); the second radial derivative jumps,
/// so the profile is C¹ but not C².
#[derive(Debug, Clone, Copy)]
pub struct CutoffFunction {
    center: Point,
}

impl CutoffFunction {
    /// Create a cutoff centered at `center`
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// The cutoff used on the unit square, centered at (0.5, 0.5)
    pub fn unit_square_center() -> Self {
        Self::new(Point::new(0.5, 0.5))
    }

    /// The fixed center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Evaluate `ψ(y)`
    pub fn value(&self, y: Point) -> f64 {
        let r = self.center.distance(&y);
        if r <= R_IN {
            0.0
        } else if r >= R_OUT {
            1.0
        } else {
            (C * (r - R_OUT)).cos().powi(2)
        }
    }

    /// Evaluate `∇ψ(y)`
    pub fn grad(&self, y: Point) -> [f64; 2] {
        let r = self.center.distance(&y);
        if r <= R_IN || r >= R_OUT {
            return [0.0, 0.0];
        }
        // d/dr cos²(θ) = -c·sin(2θ), pulled back by the radial direction
        let dpsi_dr = -C * (2.0 * C * (r - R_OUT)).sin();
        [
            dpsi_dr * (y.x - self.center.x) / r,
            dpsi_dr * (y.y - self.center.y) / r,
        ]
    }

    /// Evaluate `Δψ(y)`
    ///
    /// For a radial profile, `Δψ = ψ''(r) + ψ'(r)/r`.
    pub fn lapl(&self, y: Point) -> f64 {
        let r = self.center.distance(&y);
        if r <= R_IN || r >= R_OUT {
            return 0.0;
        }
        let theta = 2.0 * C * (r - R_OUT);
        let dpsi_dr = -C * theta.sin();
        let d2psi_dr2 = -2.0 * C * C * theta.cos();
        d2psi_dr2 + dpsi_dr / r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn psi() -> CutoffFunction {
        CutoffFunction::unit_square_center()
    }

    fn at_radius(r: f64) -> Point {
        // Probe along a fixed non-axis direction
        let (dx, dy) = (0.6, 0.8);
        Point::new(0.5 + r * dx, 0.5 + r * dy)
    }

    #[test]
    fn test_value_at_center_and_hole() {
        let psi = psi();
        assert_eq!(psi.value(Point::new(0.5, 0.5)), 0.0);
        assert_eq!(psi.value(at_radius(0.5 * R_IN)), 0.0);
    }

    #[test]
    fn test_value_far_field() {
        let psi = psi();
        assert_eq!(psi.value(at_radius(R_OUT)), 1.0);
        assert_eq!(psi.value(Point::new(0.0, 0.0)), 1.0);
        assert_eq!(psi.value(Point::new(1.0, 1.0)), 1.0);
    }

    #[test]
    fn test_value_continuous_across_radii() {
        let psi = psi();
        // Dense sampling across both transition radii: adjacent samples
        // separated by 1e-6 must not jump
        for &r0 in &[R_IN, R_OUT] {
            let mut prev = psi.value(at_radius(r0 - 5e-4));
            let mut r = r0 - 5e-4;
            while r < r0 + 5e-4 {
                r += 1e-6;
                let next = psi.value(at_radius(r));
                assert!(
                    (next - prev).abs() < 1e-4,
                    "Jump of {} near r = {}",
                    (next - prev).abs(),
                    r
                );
                prev = next;
            }
        }
    }

    #[test]
    fn test_value_monotone_in_transition() {
        let psi = psi();
        let mut prev = 0.0;
        let steps = 200;
        for i in 0..=steps {
            let r = R_IN + (R_OUT - R_IN) * i as f64 / steps as f64;
            let v = psi.value(at_radius(r));
            assert!(v >= prev - 1e-12, "ψ should grow from 0 to 1 over the annulus");
            prev = v;
        }
        assert_relative_eq!(prev, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grad_matches_finite_differences() {
        let psi = psi();
        let h = 1e-6;

        // Inside the hole, in the annulus, and in the far field
        for &(px, py) in &[
            (0.55, 0.6),
            (0.5 + 0.4, 0.5 + 0.05),
            (0.5 - 0.3, 0.5 + 0.25),
            (0.9, 0.9),
            (0.05, 0.1),
        ] {
            let y = Point::new(px, py);
            let grad = psi.grad(y);

            let fd_x =
                (psi.value(Point::new(px + h, py)) - psi.value(Point::new(px - h, py))) / (2.0 * h);
            let fd_y =
                (psi.value(Point::new(px, py + h)) - psi.value(Point::new(px, py - h))) / (2.0 * h);

            assert_relative_eq!(grad[0], fd_x, max_relative = 1e-4, epsilon = 1e-4);
            assert_relative_eq!(grad[1], fd_y, max_relative = 1e-4, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_lapl_matches_finite_differences() {
        let psi = psi();
        let h = 1e-4;

        // Sample points away from the two kink circles
        for &(px, py) in &[
            (0.5 + 0.42, 0.5 + 0.05),
            (0.5 - 0.28, 0.5 + 0.28),
            (0.5 + 0.1, 0.5 - 0.42),
        ] {
            let y = Point::new(px, py);
            let lapl = psi.lapl(y);

            let center = psi.value(y);
            let fd = (psi.value(Point::new(px + h, py))
                + psi.value(Point::new(px - h, py))
                + psi.value(Point::new(px, py + h))
                + psi.value(Point::new(px, py - h))
                - 4.0 * center)
                / (h * h);

            assert_relative_eq!(lapl, fd, max_relative = 1e-3, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_lapl_zero_outside_annulus() {
        let psi = psi();
        assert_eq!(psi.lapl(Point::new(0.52, 0.48)), 0.0);
        assert_eq!(psi.lapl(Point::new(0.02, 0.98)), 0.0);
    }
}
