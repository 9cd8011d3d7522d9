use thiserror::Error;

/// Result type alias using [`DcelError`].
pub type Result<T> = std::result::Result<T, DcelError>;

/// Errors raised while building or querying a [`Dcel`](crate::Dcel).
///
/// All of these are input-contract violations: the structure is never left
/// half-built, construction either completes or returns one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DcelError {
    /// An edge references a vertex index past the end of the vertex list.
    #[error("edge {edge} references vertex {vertex}, but only {count} vertices exist")]
    InvalidVertex {
        /// Index of the offending entry in its input edge list: an undirected
        /// edge for raw input, a half-edge for serialized input.
        edge: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// Number of vertices available.
        count: usize,
    },

    /// A face references a half-edge index past the end of the half-edge list.
    #[error("face {face} references half-edge {half_edge}, but only {count} half-edges exist")]
    InvalidHalfEdge {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range half-edge index.
        half_edge: usize,
        /// Number of half-edges available.
        count: usize,
    },

    /// A serialized half-edge list must hold twins in consecutive pairs.
    #[error("serialized graph lists {0} half-edges, expected an even count")]
    OddHalfEdgeCount(usize),

    /// Entries `2k` and `2k + 1` of a serialized half-edge list are not reversed copies.
    #[error("half-edges {first} and {second} are not twins")]
    UnpairedHalfEdge {
        /// Index of the even entry.
        first: usize,
        /// Index of the odd entry.
        second: usize,
    },

    /// Two faces both list the same half-edge on their boundary.
    #[error("half-edge {half_edge} is claimed by faces {first} and {second}")]
    SharedHalfEdge {
        /// The doubly claimed half-edge.
        half_edge: usize,
        /// The face that claimed it first.
        first: usize,
        /// The face that claimed it again.
        second: usize,
    },

    /// A face was given with no boundary edges.
    #[error("face {0} has no boundary edges")]
    EmptyFace(usize),

    /// A vertex coordinate is NaN or infinite.
    #[error("vertex {vertex} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Index of the vertex.
        vertex: usize,
        /// The x coordinate as given.
        x: f64,
        /// The y coordinate as given.
        y: f64,
    },

    /// A face query was made against a graph without any bounded face.
    #[error("graph has no faces")]
    NoFaces,
}
