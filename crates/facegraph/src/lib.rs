//! Planar face decomposition over a half-edge (DCEL) structure.
//!
//! Build a [`Dcel`] from vertices and undirected edges; its bounded faces
//! are discovered by walking boundary cycles.  The built structure is
//! read-only and answers point-location ([`Dcel::locate`], [`FaceLocator`])
//! and face-adjacency ([`Dcel::neighbors`], [`Dcel::neighbor_layers`])
//! queries.
//!
//! ```
//! use facegraph::{Dcel, FaceId};
//! use geo::Coord;
//!
//! let dcel = Dcel::from_vertices_and_edges(
//!     &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [0.0, 1.0]],
//!     &[[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 0], [1, 4]],
//! ).unwrap();
//!
//! assert_eq!(dcel.num_faces(), 2);
//! assert_eq!(dcel.locate(Coord { x: 0.5, y: 0.5 }), Some(FaceId(0)));
//! assert_eq!(dcel.neighbors(FaceId(0)), vec![FaceId(1)]);
//! ```

pub mod adj;
pub mod build;
pub mod dcel;
pub mod error;
pub mod io;
pub mod kernel;
pub mod locate;

pub use build::{DcelBuilder, Discovery};
pub use dcel::{Dcel, Face, FaceCycle, FaceId, HalfEdge, HalfEdgeId, Vertex, VertexId};
pub use error::{DcelError, Result};
pub use io::{RawGraph, SerializedGraph};
pub use kernel::{Orientation, orientation, point_in_face, winding_number};
pub use locate::FaceLocator;
