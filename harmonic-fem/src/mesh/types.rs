//! Mesh types for 2D triangular finite element analysis

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: 0.5 * (self.x + other.x),
            y: 0.5 * (self.y + other.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// A linear triangle with three vertex indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Element {
    /// Vertex node indices, counter-clockwise
    pub nodes: [usize; 3],
}

impl Element {
    pub fn new(nodes: [usize; 3]) -> Self {
        Self { nodes }
    }

    /// Edges as pairs of node indices
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.nodes;
        [(a, b), (b, c), (c, a)]
    }
}

/// An edge lying on the domain boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundaryEdge {
    /// Node indices of the edge endpoints
    pub nodes: [usize; 2],
    /// Owning element index
    pub element: usize,
}

/// A triangulation with flagged boundary edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    /// Node coordinates
    pub nodes: Vec<Point>,
    /// Triangles
    pub elements: Vec<Element>,
    /// Edges on the domain boundary
    pub boundary: Vec<BoundaryEdge>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            elements: Vec::new(),
            boundary: Vec::new(),
        }
    }

    /// Add a node and return its index
    pub fn add_node(&mut self, point: Point) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(point);
        idx
    }

    /// Add a triangle and return its index
    pub fn add_element(&mut self, nodes: [usize; 3]) -> usize {
        let idx = self.elements.len();
        self.elements.push(Element::new(nodes));
        idx
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Get node coordinates
    pub fn node(&self, idx: usize) -> &Point {
        &self.nodes[idx]
    }

    /// Get element
    pub fn element(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }

    /// Vertex coordinates of a triangle
    pub fn element_corners(&self, idx: usize) -> [Point; 3] {
        let [a, b, c] = self.elements[idx].nodes;
        [self.nodes[a], self.nodes[b], self.nodes[c]]
    }

    /// Triangle area
    pub fn element_measure(&self, idx: usize) -> f64 {
        let [p0, p1, p2] = self.element_corners(idx);
        let v1 = (p1.x - p0.x, p1.y - p0.y);
        let v2 = (p2.x - p0.x, p2.y - p0.y);
        0.5 * (v1.0 * v2.1 - v1.1 * v2.0).abs()
    }

    /// Endpoint coordinates of a boundary edge
    pub fn edge_corners(&self, edge: &BoundaryEdge) -> [Point; 2] {
        [self.nodes[edge.nodes[0]], self.nodes[edge.nodes[1]]]
    }

    /// Length of a boundary edge
    pub fn edge_length(&self, edge: &BoundaryEdge) -> f64 {
        let [a, b] = self.edge_corners(edge);
        a.distance(&b)
    }

    /// Find boundary edges: edges that belong to exactly one triangle
    pub fn detect_boundary(&mut self) {
        self.boundary.clear();

        let mut edge_count: HashMap<(usize, usize), (usize, (usize, usize), usize)> =
            HashMap::new();
        for (elem_idx, elem) in self.elements.iter().enumerate() {
            for (a, b) in elem.edges() {
                let key = if a < b { (a, b) } else { (b, a) };
                edge_count
                    .entry(key)
                    .and_modify(|e| e.2 += 1)
                    .or_insert((elem_idx, (a, b), 1));
            }
        }

        for (_, (elem_idx, (a, b), count)) in edge_count {
            if count == 1 {
                self.boundary.push(BoundaryEdge {
                    nodes: [a, b],
                    element: elem_idx,
                });
            }
        }

        // Deterministic ordering regardless of hash iteration
        self.boundary.sort_by_key(|e| e.nodes);
    }

    /// Indices of all nodes lying on the boundary
    pub fn boundary_nodes(&self) -> BTreeSet<usize> {
        let mut nodes = BTreeSet::new();
        for edge in &self.boundary {
            nodes.insert(edge.nodes[0]);
            nodes.insert(edge.nodes[1]);
        }
        nodes
    }

    /// Mesh width: the longest element edge
    pub fn mesh_size(&self) -> f64 {
        let mut h = 0.0_f64;
        for elem in &self.elements {
            for (a, b) in elem.edges() {
                h = h.max(self.nodes[a].distance(&self.nodes[b]));
            }
        }
        h
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
