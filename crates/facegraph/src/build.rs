//! Two-phase DCEL construction.
//!
//! Phase one ([`DcelBuilder`]) lays down vertices and twinned half-edge pairs
//! and sorts every vertex star by angle.  Phase two either discovers faces by
//! walking boundary cycles ([`DcelBuilder::discover_faces`]) or takes face
//! cycles as given ([`DcelBuilder::with_faces`]).  Face ownership of a
//! half-edge is only ever written in phase two, once.

use geo::Coord;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::dcel::{Dcel, Face, FaceId, HalfEdge, HalfEdgeId, Vertex, VertexId};
use crate::error::{DcelError, Result};
use crate::kernel;

/// Outcome of a face discovery pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Closed cycles kept as bounded faces.
    pub faces: usize,
    /// Closed cycles dropped because they do not wind clockwise (the outer
    /// boundary of each component, and zero-area trees).
    pub outer: usize,
    /// Walks abandoned because they ran into an already visited half-edge.
    pub open: usize,
}

/// Phase-one builder: vertices and half-edge pairs, no faces yet.
#[derive(Clone, Debug, Default)]
pub struct DcelBuilder {
    vertices:   Vec<Vertex>,
    half_edges: Vec<HalfEdge>,
}

impl DcelBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices:   Vec::with_capacity(vertices),
            half_edges: Vec::with_capacity(2 * edges),
        }
    }

    pub fn num_vertices(&self) -> usize { self.vertices.len() }
    pub fn num_half_edges(&self) -> usize { self.half_edges.len() }

    /// Add a vertex; it is named after its position (`v0`, `v1`, ...).
    pub fn add_vertex(&mut self, coords: Coord<f64>) -> Result<VertexId> {
        let id = VertexId(self.vertices.len());
        if !(coords.x.is_finite() && coords.y.is_finite()) {
            return Err(DcelError::NonFiniteCoordinate { vertex: id.0, x: coords.x, y: coords.y });
        }
        self.vertices.push(Vertex { coords, star: SmallVec::new() });
        Ok(id)
    }

    /// Add the twin pair `v1 → v2`, `v2 → v1`.
    ///
    /// Both half-edges are appended to the edge arena (at `2k`, `2k + 1`) and
    /// to their start vertex's star.  Returns `(v1 → v2, v2 → v1)`.
    pub fn add_edge_pair(&mut self, v1: VertexId, v2: VertexId) -> Result<(HalfEdgeId, HalfEdgeId)> {
        let count = self.vertices.len();
        let edge = self.half_edges.len() / 2;
        for v in [v1, v2] {
            if v.0 >= count { return Err(DcelError::InvalidVertex { edge, vertex: v.0, count }) }
        }

        let uv = HalfEdgeId(self.half_edges.len());
        let vu = HalfEdgeId(self.half_edges.len() + 1);
        let (a, b) = (self.vertices[v1.0].coords, self.vertices[v2.0].coords);

        // Star slots are placeholders until `sort_stars`.
        self.half_edges.push(HalfEdge { origin: v1, target: v2, twin: vu, angle: kernel::angle_off_axis(a, b), slot: 0 });
        self.half_edges.push(HalfEdge { origin: v2, target: v1, twin: uv, angle: kernel::angle_off_axis(b, a), slot: 0 });

        self.vertices[v1.0].star.push(uv);
        self.vertices[v2.0].star.push(vu);

        Ok((uv, vu))
    }

    /// Sort every star by angle off axis ascending (counter-clockwise from the
    /// negative x-axis) and record each half-edge's slot in its star.
    ///
    /// The sort is stable, so coincident directions keep insertion order.
    fn sort_stars(&mut self) {
        let half_edges = &mut self.half_edges;
        for vertex in &mut self.vertices {
            vertex.star.sort_by(|a, b| half_edges[a.0].angle.total_cmp(&half_edges[b.0].angle));
            for (slot, he) in vertex.star.iter().enumerate() {
                half_edges[he.0].slot = slot;
            }
        }
    }

    /// Freeze the topology into a face-less `Dcel`.
    fn into_topology(mut self) -> Dcel {
        self.sort_stars();
        let num_half_edges = self.half_edges.len();
        Dcel {
            vertices:   self.vertices,
            half_edges: self.half_edges,
            faces:      Vec::new(),
            edge_face:  vec![None; num_half_edges],
        }
    }

    /// Phase two: discover every bounded face by walking boundary cycles.
    ///
    /// Each unvisited half-edge starts a walk that repeatedly takes
    /// [`Dcel::next_boundary_edge`] until it arrives back at the starting
    /// half-edge's origin.  A walk that meets an already visited half-edge
    /// first is abandoned.  Closed walks that wind clockwise become faces;
    /// the rest bound the outer region and are dropped.  Every half-edge is
    /// visited once, so the pass is O(E).
    pub fn discover_faces(self) -> (Dcel, Discovery) {
        let mut dcel = self.into_topology();
        let mut stats = Discovery::default();
        let mut visited = vec![false; dcel.num_half_edges()];

        for start in (0..dcel.num_half_edges()).map(HalfEdgeId) {
            if visited[start.0] { continue }
            visited[start.0] = true;

            let origin = dcel.origin(start);
            let mut cycle = vec![start];
            let mut current = start;
            let mut closed = true;

            while dcel.dest(current) != origin {
                let next = dcel.next_boundary_edge(current);
                if visited[next.0] { closed = false; break }
                visited[next.0] = true;
                cycle.push(next);
                current = next;
            }

            if !closed {
                trace!(start = %start, len = cycle.len(), "abandoned open walk");
                stats.open += 1;
                continue;
            }

            if kernel::is_clockwise(cycle.iter().map(|&he| dcel.segment(he))) {
                let face = FaceId(dcel.faces.len());
                for &he in &cycle { dcel.edge_face[he.0] = Some(face) }
                dcel.faces.push(Face { edges: cycle });
                stats.faces += 1;
            } else {
                trace!(start = %start, len = cycle.len(), "dropped outer cycle");
                stats.outer += 1;
            }
        }

        debug!(
            vertices = dcel.num_vertices(),
            edges = dcel.num_edges(),
            faces = stats.faces,
            outer = stats.outer,
            open = stats.open,
            "discovered faces"
        );
        (dcel, stats)
    }

    /// Phase two: install faces from explicit half-edge index lists, trusting
    /// them to be valid clockwise boundary walks.
    ///
    /// References are still checked: every index must exist, no face may be
    /// empty, and no half-edge may belong to two faces.
    pub fn with_faces<F>(self, faces: &[F]) -> Result<Dcel>
    where
        F: AsRef<[usize]>,
    {
        let mut dcel = self.into_topology();
        let count = dcel.num_half_edges();

        for (i, edges) in faces.iter().enumerate() {
            let edges = edges.as_ref();
            if edges.is_empty() { return Err(DcelError::EmptyFace(i)) }

            let face = FaceId(i);
            for &he in edges {
                let slot = dcel.edge_face.get_mut(he)
                    .ok_or(DcelError::InvalidHalfEdge { face: i, half_edge: he, count })?;
                if let Some(first) = *slot {
                    return Err(DcelError::SharedHalfEdge { half_edge: he, first: first.0, second: i });
                }
                *slot = Some(face);
            }
            dcel.faces.push(Face { edges: edges.iter().copied().map(HalfEdgeId).collect() });
        }

        debug!(
            vertices = dcel.num_vertices(),
            edges = dcel.num_edges(),
            faces = dcel.num_faces(),
            "loaded faces"
        );
        Ok(dcel)
    }
}

fn add_vertices(builder: &mut DcelBuilder, vertices: &[[f64; 2]]) -> Result<()> {
    for &[x, y] in vertices {
        builder.add_vertex(Coord { x, y })?;
    }
    Ok(())
}

impl Dcel {
    /// Build a `Dcel` from coordinates and undirected edges, discovering its
    /// bounded faces.
    ///
    /// * `vertices`: `[[x, y], ...]`, vertex `i` is named `v{i}`
    /// * `edges`: `[[start, end], ...]`, indices into `vertices`; each entry
    ///   becomes one twin pair of half-edges
    ///
    /// O(V + E log E), dominated by the star sort.
    pub fn from_vertices_and_edges(vertices: &[[f64; 2]], edges: &[[usize; 2]]) -> Result<Self> {
        Self::discover(vertices, edges).map(|(dcel, _)| dcel)
    }

    /// Like [`from_vertices_and_edges`](Self::from_vertices_and_edges), also
    /// reporting what the discovery pass kept and dropped.
    pub fn discover(vertices: &[[f64; 2]], edges: &[[usize; 2]]) -> Result<(Self, Discovery)> {
        let mut builder = DcelBuilder::with_capacity(vertices.len(), edges.len());
        add_vertices(&mut builder, vertices)?;
        for &[a, b] in edges {
            builder.add_edge_pair(VertexId(a), VertexId(b))?;
        }
        Ok(builder.discover_faces())
    }

    /// Build a `Dcel` whose faces are already known.
    ///
    /// * `half_edges`: both directions of every edge, twins at `2k` and
    ///   `2k + 1`; only the even entries create pairs, the odd entries must be
    ///   their reverse
    /// * `faces`: per face, indices into `half_edges` in boundary-walk order
    ///
    /// No walk and no orientation test is performed.
    pub fn from_vertices_edges_and_faces<F>(
        vertices:   &[[f64; 2]],
        half_edges: &[[usize; 2]],
        faces:      &[F],
    ) -> Result<Self>
    where
        F: AsRef<[usize]>,
    {
        if half_edges.len() % 2 != 0 {
            return Err(DcelError::OddHalfEdgeCount(half_edges.len()));
        }

        let mut builder = DcelBuilder::with_capacity(vertices.len(), half_edges.len() / 2);
        add_vertices(&mut builder, vertices)?;
        for (k, pair) in half_edges.chunks_exact(2).enumerate() {
            let ([a, b], [c, d]) = (pair[0], pair[1]);
            builder.add_edge_pair(VertexId(a), VertexId(b)).map_err(|err| match err {
                // Report the serialized half-edge entry, not the pair.
                DcelError::InvalidVertex { vertex, count, .. } => DcelError::InvalidVertex { edge: 2 * k, vertex, count },
                other => other,
            })?;
            if (c, d) != (b, a) {
                return Err(DcelError::UnpairedHalfEdge { first: 2 * k, second: 2 * k + 1 });
            }
        }
        builder.with_faces(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two triangles touching at vertex 0; the edge order makes two of the
    /// outer-boundary walks run into edges an earlier walk already took.
    fn bow_tie() -> (Vec<[f64; 2]>, Vec<[usize; 2]>) {
        (
            vec![[1.0, 1.0], [0.0, 0.0], [0.0, 2.0], [2.0, 0.0], [2.0, 2.0]],
            vec![[0, 2], [1, 2], [0, 1], [3, 4], [4, 0], [0, 3]],
        )
    }

    #[test]
    fn edge_pairs_are_twinned_and_starred() {
        let mut builder = DcelBuilder::new();
        let a = builder.add_vertex(Coord { x: 0.0, y: 0.0 }).unwrap();
        let b = builder.add_vertex(Coord { x: 1.0, y: 0.0 }).unwrap();
        let (ab, ba) = builder.add_edge_pair(a, b).unwrap();
        assert_eq!((ab, ba), (HalfEdgeId(0), HalfEdgeId(1)));

        let (dcel, _) = builder.discover_faces();
        assert_eq!(dcel.twin(ab), ba);
        assert_eq!(dcel.twin(ba), ab);
        assert_eq!(dcel.vertex(a).star(), &[ab]);
        assert_eq!(dcel.vertex(b).star(), &[ba]);
    }

    #[test]
    fn add_edge_pair_rejects_unknown_vertex() {
        let mut builder = DcelBuilder::new();
        let a = builder.add_vertex(Coord { x: 0.0, y: 0.0 }).unwrap();
        let err = builder.add_edge_pair(a, VertexId(3)).unwrap_err();
        assert_eq!(err, DcelError::InvalidVertex { edge: 0, vertex: 3, count: 1 });
    }

    #[test]
    fn add_vertex_rejects_nan() {
        let mut builder = DcelBuilder::new();
        let err = builder.add_vertex(Coord { x: f64::NAN, y: 0.0 }).unwrap_err();
        assert!(matches!(err, DcelError::NonFiniteCoordinate { vertex: 0, .. }));
    }

    #[test]
    fn stars_are_sorted_from_negative_x_axis() {
        // Centre vertex with spokes at 0, π/2, π and -π/2.
        let dcel = Dcel::from_vertices_and_edges(
            &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]],
            &[[0, 1], [0, 2], [0, 3], [0, 4]],
        ).unwrap();

        let star = dcel.vertex(VertexId(0)).star();
        let targets: Vec<_> = star.iter().map(|&he| dcel.dest(he).0).collect();
        assert_eq!(targets, vec![4, 1, 2, 3]);
        for (slot, &he) in star.iter().enumerate() {
            assert_eq!(dcel.half_edge(he).slot, slot);
        }
    }

    #[test]
    fn square_discovery_counts() {
        let (dcel, stats) = Dcel::discover(
            &[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]],
            &[[0, 1], [1, 2], [2, 3], [3, 0]],
        ).unwrap();
        assert_eq!(stats, Discovery { faces: 1, outer: 1, open: 0 });
        assert_eq!(dcel.face_edges(FaceId(0)), &[HalfEdgeId(1), HalfEdgeId(7), HalfEdgeId(5), HalfEdgeId(3)]);
    }

    #[test]
    fn bow_tie_abandons_revisiting_walks() {
        let (vertices, edges) = bow_tie();
        let (dcel, stats) = Dcel::discover(&vertices, &edges).unwrap();

        assert_eq!(stats, Discovery { faces: 2, outer: 1, open: 2 });
        assert_eq!(dcel.face_edges(FaceId(0)), &[HalfEdgeId(1), HalfEdgeId(4), HalfEdgeId(2)]);
        assert_eq!(dcel.face_edges(FaceId(1)), &[HalfEdgeId(7), HalfEdgeId(11), HalfEdgeId(9)]);
    }

    #[test]
    fn open_path_has_no_faces() {
        let (dcel, stats) = Dcel::discover(&[[0.0, 0.0], [1.0, 0.0], [2.0, 1.0]], &[[0, 1], [1, 2]]).unwrap();
        assert_eq!(dcel.num_faces(), 0);
        assert_eq!(stats, Discovery { faces: 0, outer: 1, open: 0 });
        assert!(dcel.half_edge_ids().all(|he| dcel.face_of(he).is_none()));
    }

    #[test]
    fn zero_length_edge_is_harmless() {
        let (dcel, stats) = Dcel::discover(
            &[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]],
            &[[0, 1], [1, 2], [2, 3], [3, 0], [2, 2]],
        ).unwrap();
        assert_eq!(dcel.num_faces(), 1);
        assert_eq!(stats.faces, 1);
    }

    #[test]
    fn explicit_faces_are_taken_verbatim() {
        let dcel = Dcel::from_vertices_edges_and_faces(
            &[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]],
            &[[0, 1], [1, 0], [1, 2], [2, 1], [2, 3], [3, 2], [3, 0], [0, 3]],
            &[vec![1, 7, 5, 3]],
        ).unwrap();
        assert_eq!(dcel.num_faces(), 1);
        assert_eq!(dcel.face_of(HalfEdgeId(7)), Some(FaceId(0)));
        assert_eq!(dcel.face_of(HalfEdgeId(6)), None);
    }

    #[test]
    fn explicit_faces_are_validated() {
        let vertices = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let half_edges = [[0, 1], [1, 0], [1, 2], [2, 1], [2, 0], [0, 2]];

        let odd = Dcel::from_vertices_edges_and_faces(&vertices, &half_edges[..5], &[vec![0]]);
        assert_eq!(odd.unwrap_err(), DcelError::OddHalfEdgeCount(5));

        let unpaired = Dcel::from_vertices_edges_and_faces(&vertices, &[[0, 1], [0, 1]], &[vec![0]]);
        assert_eq!(unpaired.unwrap_err(), DcelError::UnpairedHalfEdge { first: 0, second: 1 });

        let out_of_range = Dcel::from_vertices_edges_and_faces(&vertices, &half_edges, &[vec![1, 9]]);
        assert_eq!(out_of_range.unwrap_err(), DcelError::InvalidHalfEdge { face: 0, half_edge: 9, count: 6 });

        let shared = Dcel::from_vertices_edges_and_faces(&vertices, &half_edges, &[vec![1, 5], vec![5]]);
        assert_eq!(shared.unwrap_err(), DcelError::SharedHalfEdge { half_edge: 5, first: 0, second: 1 });

        let empty = Dcel::from_vertices_edges_and_faces(&vertices, &half_edges, &[Vec::<usize>::new()]);
        assert_eq!(empty.unwrap_err(), DcelError::EmptyFace(0));
    }

    #[test]
    fn serialized_vertex_error_names_the_half_edge_entry() {
        let vertices = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let half_edges = [[0, 1], [1, 0], [1, 7], [7, 1]];
        let err = Dcel::from_vertices_edges_and_faces(&vertices, &half_edges, &[vec![1]]).unwrap_err();
        assert_eq!(err, DcelError::InvalidVertex { edge: 2, vertex: 7, count: 3 });
    }
}
