//! Gauss quadrature on triangles

mod gauss;
mod rules;

pub use gauss::{QuadraturePoint, gauss_triangle};
pub use rules::{QuadratureRule, map_to_physical};
