//! Interchange formats.
//!
//! Two shapes cross the crate boundary, and their `edges` fields mean
//! different things:
//!
//! * [`RawGraph`]: `edges[i]` is one *undirected* edge.
//! * [`SerializedGraph`]: `edges` lists every *half-edge*, twins at `2k`
//!   and `2k + 1`, and `faces[i]` indexes into that list.

use serde::{Deserialize, Serialize};

use crate::dcel::Dcel;
use crate::error::Result;

/// Plain vertex/edge input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGraph {
    /// `[x, y]` per vertex.
    pub vertices: Vec<[f64; 2]>,
    /// `[start, end]` vertex indices per undirected edge.
    pub edges: Vec<[usize; 2]>,
}

/// A graph together with its discovered faces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializedGraph {
    /// `[x, y]` per vertex, in creation order.
    pub vertices: Vec<[f64; 2]>,
    /// `[start, end]` vertex indices per half-edge, in creation order.
    pub edges: Vec<[usize; 2]>,
    /// Half-edge indices per face, in boundary-walk order.
    #[serde(alias = "polygons")]
    pub faces: Vec<Vec<usize>>,
}

impl Dcel {
    /// Build from a raw graph, discovering faces.
    pub fn from_raw(raw: &RawGraph) -> Result<Self> {
        Self::from_vertices_and_edges(&raw.vertices, &raw.edges)
    }

    /// Rebuild from the interchange format without rediscovering faces.
    pub fn from_serialized(graph: &SerializedGraph) -> Result<Self> {
        Self::from_vertices_edges_and_faces(&graph.vertices, &graph.edges, &graph.faces)
    }

    /// Export vertices, half-edges and faces by index.
    ///
    /// `Dcel::from_serialized(&dcel.serialize())` reproduces the same face
    /// cycles, starting edges included.
    pub fn serialize(&self) -> SerializedGraph {
        SerializedGraph {
            vertices: self.vertices.iter().map(|v| [v.coords.x, v.coords.y]).collect(),
            edges: self.half_edges.iter().map(|he| [he.origin.0, he.target.0]).collect(),
            faces: self.faces.iter()
                .map(|face| face.edges.iter().map(|he| he.0).collect())
                .collect(),
        }
    }

    /// The raw input this structure could have been built from: one entry
    /// per even half-edge.
    pub fn to_raw(&self) -> RawGraph {
        RawGraph {
            vertices: self.vertices.iter().map(|v| [v.coords.x, v.coords.y]).collect(),
            edges: self.half_edges.iter().step_by(2).map(|he| [he.origin.0, he.target.0]).collect(),
        }
    }
}
