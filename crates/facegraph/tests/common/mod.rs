#![allow(dead_code)]

use facegraph::{Dcel, FaceId, RawGraph};

/// `width x height` grid of unit squares with its lower-left corner at the
/// origin.  Vertex `(x, y)` has index `y * (width + 1) + x`.
pub fn grid(width: usize, height: usize) -> RawGraph {
    let index = |x: usize, y: usize| y * (width + 1) + x;
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    for y in 0..=height {
        for x in 0..=width {
            vertices.push([x as f64, y as f64]);
            if x < width { edges.push([index(x, y), index(x + 1, y)]) }
            if y < height { edges.push([index(x, y), index(x, y + 1)]) }
        }
    }
    RawGraph { vertices, edges }
}

/// Grid cell `(column, row)` covered by a unit-square face.
pub fn cell_of(dcel: &Dcel, face: FaceId) -> (usize, usize) {
    let min = dcel.face_bounds(face).min();
    (min.x as usize, min.y as usize)
}

/// Two unit squares side by side: a 2x1 rectangle split at x = 1.
pub fn two_squares() -> RawGraph {
    RawGraph {
        vertices: vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [0.0, 1.0]],
        edges: vec![[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 0], [1, 4]],
    }
}

/// Face cycle rotated so that its smallest half-edge index comes first.
pub fn canonical_cycle(edges: &[usize]) -> Vec<usize> {
    let start = edges.iter().enumerate().min_by_key(|&(_, e)| e).map_or(0, |(i, _)| i);
    edges[start..].iter().chain(&edges[..start]).copied().collect()
}
