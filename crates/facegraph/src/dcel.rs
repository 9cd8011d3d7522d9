//! Doubly Connected Edge List (DCEL): a half-edge data structure for
//! decomposing a planar graph into its bounded faces.
//!
//! # Structure
//!
//! Every undirected input edge becomes a pair of directed **half-edges**
//! (twins), stored at consecutive indices `2k` and `2k + 1`.  Each half-edge
//! carries:
//!
//! * `origin` / `target`: the vertices it leaves from and arrives at
//! * `twin`: the opposite half-edge (same edge, opposite direction)
//! * `angle`: direction off the positive x-axis, in `(-π, π]`
//!
//! Each vertex keeps its *star*: the outgoing half-edges sorted by angle,
//! starting counter-clockwise from the negative x-axis.  The star order is
//! what makes "the next edge around a face" well defined.
//!
//! Faces only exist for bounded regions.  The unbounded outer region is never
//! materialised; half-edges on the outer boundary simply have no face.
//!
//! # Indexing
//!
//! All elements live in flat `Vec`s owned by the [`Dcel`] and are addressed
//! by strongly-typed index wrappers (`VertexId`, `HalfEdgeId`, `FaceId`).
//! Nothing is reference-counted and there are no back-pointers to fix up.

use std::fmt;

use geo::Coord;
use smallvec::SmallVec;

// ---------------------------------------------------------------------------
// Index types
// ---------------------------------------------------------------------------

macro_rules! idx {
    ($name:ident, $prefix:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl $name {
            /// Position of this element in its owning arena.
            #[inline] pub fn index(self) -> usize { self.0 }

            /// Sequential display name, e.g. `v0`, `e3`, `p12`.
            pub fn name(self) -> String { format!(concat!($prefix, "{}"), self.0) }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

idx!(VertexId, "v");
idx!(HalfEdgeId, "e");
idx!(FaceId, "p");

impl HalfEdgeId {
    /// Index of the undirected edge this half-edge belongs to.
    #[inline] pub fn edge(self) -> usize { self.0 / 2 }
}

impl FaceId {
    /// Parse a face name such as `p3` (or `P3`, as used by SVG element ids).
    pub fn from_name(name: &str) -> Option<Self> {
        let digits = name.strip_prefix(['p', 'P'])?;
        digits.parse().ok().map(FaceId)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Outgoing half-edges of a vertex.  Most planar vertices have degree <= 4.
pub type EdgeStar = SmallVec<[HalfEdgeId; 4]>;

/// A vertex: its coordinates and its angularly sorted edge star.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub coords: Coord<f64>,
    pub(crate) star: EdgeStar,
}

impl Vertex {
    /// Outgoing half-edges, sorted by angle off axis ascending.
    #[inline] pub fn star(&self) -> &[HalfEdgeId] { &self.star }

    /// Number of incident edges.
    #[inline] pub fn degree(&self) -> usize { self.star.len() }
}

/// A directed half-edge.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    /// Vertex this half-edge leaves from.
    pub origin: VertexId,
    /// Vertex this half-edge arrives at.
    pub target: VertexId,
    /// The other half-edge of the same undirected edge.
    pub twin:   HalfEdgeId,
    /// Angle of `target - origin` off the positive x-axis, in `(-π, π]`.
    pub angle:  f64,
    /// Position of this half-edge inside `origin`'s sorted star.
    pub(crate) slot: usize,
}

/// A bounded face: its boundary half-edges in walk order.
///
/// `edges[i].target == edges[i + 1].origin`, and the last edge closes back
/// onto the first.  Which edge comes first is not meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub(crate) edges: Vec<HalfEdgeId>,
}

impl Face {
    #[inline] pub fn edges(&self) -> &[HalfEdgeId] { &self.edges }
    #[inline] pub fn len(&self) -> usize { self.edges.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.edges.is_empty() }
}

// ---------------------------------------------------------------------------
// DCEL
// ---------------------------------------------------------------------------

/// A planar subdivision built once from vertices and edges, then read-only.
///
/// Construct with [`Dcel::from_vertices_and_edges`] (faces discovered) or
/// [`Dcel::from_vertices_edges_and_faces`] (faces supplied).
#[derive(Clone, Debug, Default)]
pub struct Dcel {
    pub(crate) vertices:   Vec<Vertex>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces:      Vec<Face>,
    /// Owning face of each half-edge; `None` on the outer boundary.
    pub(crate) edge_face:  Vec<Option<FaceId>>,
}

impl Dcel {
    // -----------------------------------------------------------------------
    // Counts
    // -----------------------------------------------------------------------

    pub fn num_vertices(&self)   -> usize { self.vertices.len() }
    pub fn num_half_edges(&self) -> usize { self.half_edges.len() }
    /// Number of undirected edges (half-edge pairs).
    pub fn num_edges(&self)      -> usize { self.half_edges.len() / 2 }
    /// Number of bounded faces.
    pub fn num_faces(&self)      -> usize { self.faces.len() }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn vertex(&self, id: VertexId)      -> &Vertex   { &self.vertices[id.0] }
    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge { &self.half_edges[id.0] }
    pub fn face(&self, id: FaceId)          -> &Face     { &self.faces[id.0] }

    /// Checked face access.
    pub fn get_face(&self, id: FaceId) -> Option<&Face> { self.faces.get(id.0) }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        (0..self.half_edges.len()).map(HalfEdgeId)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId)
    }

    #[inline] pub fn coords(&self, v: VertexId) -> Coord<f64> { self.vertices[v.0].coords }
    #[inline] pub fn origin(&self, he: HalfEdgeId) -> VertexId { self.half_edges[he.0].origin }
    #[inline] pub fn dest(&self, he: HalfEdgeId) -> VertexId { self.half_edges[he.0].target }
    #[inline] pub fn twin(&self, he: HalfEdgeId) -> HalfEdgeId { self.half_edges[he.0].twin }

    /// The face a half-edge bounds, or `None` for the outer boundary.
    #[inline] pub fn face_of(&self, he: HalfEdgeId) -> Option<FaceId> { self.edge_face[he.0] }

    /// Start and end coordinates of a half-edge.
    #[inline]
    pub fn segment(&self, he: HalfEdgeId) -> (Coord<f64>, Coord<f64>) {
        let edge = &self.half_edges[he.0];
        (self.vertices[edge.origin.0].coords, self.vertices[edge.target.0].coords)
    }

    /// Boundary half-edges of `face` in walk order.
    #[inline] pub fn face_edges(&self, face: FaceId) -> &[HalfEdgeId] { &self.faces[face.0].edges }

    /// Boundary segments of `face` in walk order.
    pub fn face_segments(&self, face: FaceId) -> impl Iterator<Item = (Coord<f64>, Coord<f64>)> + '_ {
        self.face_edges(face).iter().map(move |&he| self.segment(he))
    }

    /// Corner coordinates of `face`: the origin of each boundary half-edge.
    pub fn face_ring(&self, face: FaceId) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.face_edges(face).iter().map(move |&he| self.coords(self.origin(he)))
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// The boundary edge that follows `he` around its face: the entry after
    /// `twin(he)` in the star of `he`'s target, wrapping at the end.
    ///
    /// This is the smallest clockwise turn at the target vertex, so repeated
    /// application traces a single face.
    pub fn next_boundary_edge(&self, he: HalfEdgeId) -> HalfEdgeId {
        let edge = &self.half_edges[he.0];
        let twin = &self.half_edges[edge.twin.0];
        let star = &self.vertices[edge.target.0].star;
        star[(twin.slot + 1) % star.len()]
    }

    /// Iterate over the half-edges met by walking from `start` with
    /// [`next_boundary_edge`](Self::next_boundary_edge), stopping just before
    /// `start` would repeat.  The successor map is a permutation of the
    /// half-edges, so every walk returns to `start`.
    pub fn face_cycle(&self, start: HalfEdgeId) -> FaceCycle<'_> {
        FaceCycle { dcel: self, start, current: start, done: false }
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Iterator over half-edges in a boundary walk.
pub struct FaceCycle<'a> {
    dcel:    &'a Dcel,
    start:   HalfEdgeId,
    current: HalfEdgeId,
    done:    bool,
}

impl<'a> Iterator for FaceCycle<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        if self.done { return None; }
        let he = self.current;
        self.current = self.dcel.next_boundary_edge(he);
        if self.current == self.start { self.done = true; }
        Some(he)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
