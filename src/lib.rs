#![doc = "planarmap public API"]
//!
//! Boundary operations over planar graphs: build a graph's faces from raw
//! vertices and edges, then answer point-location and face-adjacency
//! questions against the serialized result.  The half-edge machinery lives in
//! the [`facegraph`] crate; this crate speaks in face names (`p0`, `p1`, ...)
//! and JSON files.
mod io;
mod polyline;
mod query;

#[doc(inline)]
pub use facegraph::{DcelError, FaceId, RawGraph, SerializedGraph};

#[doc(inline)]
pub use io::{read_raw_graph, read_serialized_graph, write_serialized_graph};

#[doc(inline)]
pub use polyline::{face_polygons, face_polylines};

#[doc(inline)]
pub use query::{build, face_neighbor_layers, face_neighbors, locate_point, FaceSelector, Location, Neighbors};
