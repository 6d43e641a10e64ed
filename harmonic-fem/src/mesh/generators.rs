//! Structured mesh generators
//!
//! Produces the uniform unit-square triangulations the boundary-integral
//! quadrature is specialized to.

use super::types::{Mesh, Point};

/// Generate a rectangular mesh with triangular elements
///
/// Each grid cell is split into two triangles along its diagonal.
pub fn rectangular_mesh_triangles(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    nx: usize,
    ny: usize,
) -> Mesh {
    assert!(nx > 0 && ny > 0, "Mesh must have at least one cell per axis");
    let mut mesh = Mesh::new();

    let dx = (x_max - x_min) / nx as f64;
    let dy = (y_max - y_min) / ny as f64;

    // Create nodes
    for j in 0..=ny {
        for i in 0..=nx {
            let x = x_min + i as f64 * dx;
            let y = y_min + j as f64 * dy;
            mesh.add_node(Point::new(x, y));
        }
    }

    // Create triangular elements (2 triangles per cell)
    for j in 0..ny {
        for i in 0..nx {
            let n00 = j * (nx + 1) + i;
            let n10 = n00 + 1;
            let n01 = n00 + (nx + 1);
            let n11 = n01 + 1;

            mesh.add_element([n00, n10, n11]);
            mesh.add_element([n00, n11, n01]);
        }
    }

    mesh.detect_boundary();
    mesh
}

/// Generate a uniform triangulation of the unit square with n cells per side
pub fn unit_square_triangles(n: usize) -> Mesh {
    rectangular_mesh_triangles(0.0, 1.0, 0.0, 1.0, n, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_mesh_triangles() {
        let mesh = rectangular_mesh_triangles(0.0, 1.0, 0.0, 1.0, 2, 2);

        // 3x3 = 9 nodes, 2x2 cells x 2 triangles = 8 triangles
        assert_eq!(mesh.num_nodes(), 9);
        assert_eq!(mesh.num_elements(), 8);
    }

    #[test]
    fn test_unit_square() {
        let mesh = unit_square_triangles(4);
        assert_eq!(mesh.num_nodes(), 25);
        assert_eq!(mesh.num_elements(), 32);
    }

    #[test]
    fn test_boundary_edges() {
        let mesh = unit_square_triangles(2);
        // 2 edges per side of the square
        assert_eq!(mesh.boundary.len(), 8);
    }

    #[test]
    fn test_total_area() {
        let mesh = unit_square_triangles(3);
        let area: f64 = (0..mesh.num_elements())
            .map(|i| mesh.element_measure(i))
            .sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mesh_size_uniform() {
        let mesh = unit_square_triangles(8);
        // Longest edge is the cell diagonal
        assert!((mesh.mesh_size() - 2.0_f64.sqrt() / 8.0).abs() < 1e-12);
    }
}
