//! Gauss quadrature points and weights for the reference triangle
//!
//! Pre-computed symmetric rules on the triangle (0,0), (1,0), (0,1).

/// A single quadrature point with weight
#[derive(Debug, Clone, Copy)]
pub struct QuadraturePoint {
    /// Reference coordinates (xi, eta)
    pub coords: [f64; 2],
    /// Integration weight
    pub weight: f64,
}

impl QuadraturePoint {
    pub fn new(xi: f64, eta: f64, weight: f64) -> Self {
        Self {
            coords: [xi, eta],
            weight,
        }
    }

    #[inline]
    pub fn xi(&self) -> f64 {
        self.coords[0]
    }

    #[inline]
    pub fn eta(&self) -> f64 {
        self.coords[1]
    }
}

/// Gauss quadrature for triangles
///
/// `order` is the polynomial degree integrated exactly.
pub fn gauss_triangle(order: usize) -> Vec<QuadraturePoint> {
    match order {
        0 | 1 => {
            // 1-point rule (degree 1)
            vec![QuadraturePoint::new(1.0 / 3.0, 1.0 / 3.0, 0.5)]
        }
        2 | 3 => {
            // 3-point rule (degree 2)
            let a = 1.0 / 6.0;
            let b = 2.0 / 3.0;
            let w = 1.0 / 6.0;
            vec![
                QuadraturePoint::new(a, a, w),
                QuadraturePoint::new(b, a, w),
                QuadraturePoint::new(a, b, w),
            ]
        }
        _ => {
            // 7-point rule (degree 5)
            let a1 = 1.0 / 3.0;
            let w1 = 9.0 / 80.0;

            let a2 = (6.0 - 15.0_f64.sqrt()) / 21.0;
            let b2 = (9.0 + 2.0 * 15.0_f64.sqrt()) / 21.0;
            let w2 = (155.0 - 15.0_f64.sqrt()) / 2400.0;

            let a3 = (6.0 + 15.0_f64.sqrt()) / 21.0;
            let b3 = (9.0 - 2.0 * 15.0_f64.sqrt()) / 21.0;
            let w3 = (155.0 + 15.0_f64.sqrt()) / 2400.0;

            vec![
                QuadraturePoint::new(a1, a1, w1),
                QuadraturePoint::new(a2, a2, w2),
                QuadraturePoint::new(b2, a2, w2),
                QuadraturePoint::new(a2, b2, w2),
                QuadraturePoint::new(a3, a3, w3),
                QuadraturePoint::new(b3, a3, w3),
                QuadraturePoint::new(a3, b3, w3),
            ]
        }
    }
}
