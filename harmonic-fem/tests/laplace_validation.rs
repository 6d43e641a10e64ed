//! Validation of the Laplace Dirichlet solve against harmonic solutions

use harmonic_fem::{LagrangeSpace, Mesh, Point, solve_bvp, solve_bvp_cg, unit_square_triangles};
use ndarray::Array1;

/// Maximum nodal error against an analytic solution
fn max_nodal_error<F>(mesh: &Mesh, u_fe: &Array1<f64>, exact: F) -> f64
where
    F: Fn(Point) -> f64,
{
    mesh.nodes
        .iter()
        .enumerate()
        .map(|(i, &p)| (u_fe[i] - exact(p)).abs())
        .fold(0.0, f64::max)
}

#[test]
fn test_quadratic_harmonic_exact_at_nodes() {
    // u(x, y) = x² - y² is harmonic, and on the uniform right-triangle mesh
    // the P1 stiffness matrix reduces to the five-point stencil, for which
    // the second differences of a quadratic are exact. The discrete solution
    // therefore matches the analytic one at every node up to roundoff.
    let mesh = unit_square_triangles(8);
    let space = LagrangeSpace::new(&mesh);

    let u_fe = solve_bvp(&space, |p| p.x * p.x - p.y * p.y).expect("BVP solve should succeed");
    let err = max_nodal_error(&mesh, &u_fe, |p| p.x * p.x - p.y * p.y);

    assert!(err < 1e-9, "Nodal error {} should be at roundoff level", err);
}

#[test]
fn test_log_distance_solution_converges() {
    // u(y) = ln‖y + (1,0)‖ is harmonic on the square; nodal errors shrink
    // at second order under uniform refinement
    let exact = |p: Point| ((p.x + 1.0).powi(2) + p.y * p.y).sqrt().ln();

    let mut errors = Vec::new();
    for n in [4, 8, 16] {
        let mesh = unit_square_triangles(n);
        let space = LagrangeSpace::new(&mesh);
        let u_fe = solve_bvp_cg(&space, exact).expect("BVP solve should succeed");
        errors.push(max_nodal_error(&mesh, &u_fe, exact));
    }

    assert!(errors[1] < errors[0], "Error should decrease: {:?}", errors);
    assert!(
        errors[2] < 0.5 * errors[1],
        "Error should keep decreasing: {:?}",
        errors
    );
    assert!(errors[2] < 1e-4, "Error {} too large at n = 16", errors[2]);
}

#[test]
fn test_boundary_values_are_imposed_exactly() {
    let mesh = unit_square_triangles(6);
    let space = LagrangeSpace::new(&mesh);
    let g = |p: Point| (3.0 * p.x).sin() + p.y;

    let u_fe = solve_bvp(&space, g).expect("BVP solve should succeed");

    for node in mesh.boundary_nodes() {
        let p = *mesh.node(node);
        assert!(
            (u_fe[node] - g(p)).abs() < 1e-10,
            "Boundary node {} should carry its Dirichlet value",
            node
        );
    }
}

#[test]
fn test_discrete_maximum_principle() {
    // On this mesh family the stiffness matrix is an M-matrix, so the
    // discrete solution attains its extrema on the boundary
    let mesh = unit_square_triangles(8);
    let space = LagrangeSpace::new(&mesh);
    let g = |p: Point| (p.x - 0.2) * (p.y + 0.3);

    let u_fe = solve_bvp(&space, g).expect("BVP solve should succeed");

    let boundary = mesh.boundary_nodes();
    let bd_min = boundary
        .iter()
        .map(|&i| u_fe[i])
        .fold(f64::INFINITY, f64::min);
    let bd_max = boundary
        .iter()
        .map(|&i| u_fe[i])
        .fold(f64::NEG_INFINITY, f64::max);

    for i in 0..space.num_dofs() {
        assert!(
            u_fe[i] >= bd_min - 1e-10 && u_fe[i] <= bd_max + 1e-10,
            "Node {} value {} escapes the boundary range [{}, {}]",
            i,
            u_fe[i],
            bd_min,
            bd_max
        );
    }
}
