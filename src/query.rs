use std::{convert::Infallible, fmt, str::FromStr};

use anyhow::{Context, Result};
use facegraph::{Dcel, FaceId, RawGraph, SerializedGraph};
use geo::Coord;
use serde::Serialize;

/// Rebuild the half-edge structure behind a serialized graph.
pub(crate) fn load(graph: &SerializedGraph) -> Result<Dcel> {
    Dcel::from_serialized(graph).context("Invalid serialized graph")
}

/// Build a raw graph, discover its faces, and serialize the result.
pub fn build(raw: &RawGraph) -> Result<SerializedGraph> {
    let (dcel, stats) = Dcel::discover(&raw.vertices, &raw.edges)
        .context("Failed to build graph")?;
    tracing::info!(faces = stats.faces, outer = stats.outer, open = stats.open, "built graph");
    Ok(dcel.serialize())
}

/// Result of a point-location query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Name of the containing face.
    Face(String),
    /// Outside every face, or on a boundary.
    NoFace,
}

impl Location {
    pub fn face_name(&self) -> Option<&str> {
        match self {
            Location::Face(name) => Some(name),
            Location::NoFace => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Face(name) => f.write_str(name),
            Location::NoFace => f.write_str("no faces"),
        }
    }
}

/// Name of the first face containing `point`.
pub fn locate_point(graph: &SerializedGraph, [x, y]: [f64; 2]) -> Result<Location> {
    let dcel = load(graph)?;
    Ok(match dcel.locate(Coord { x, y }) {
        Some(face) => Location::Face(face.name()),
        None => Location::NoFace,
    })
}

/// How a caller picks the origin face of an adjacency query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaceSelector {
    Index(usize),
    /// A face name such as `p3` (or `P3`).
    Name(String),
}

impl FaceSelector {
    /// Resolve against `dcel`.  Out-of-range indices and unrecognized names
    /// fall back to face 0; a graph with no faces is an error.
    pub fn resolve(&self, dcel: &Dcel) -> Result<FaceId> {
        let face = match self {
            FaceSelector::Index(index) => dcel.face_or_first(*index),
            FaceSelector::Name(name) => match FaceId::from_name(name) {
                Some(face) => dcel.face_or_first(face.index()),
                None => {
                    tracing::warn!(name = name.as_str(), "unrecognized face name, using face 0");
                    dcel.face_or_first(0)
                }
            },
        };
        face.with_context(|| format!("Cannot select face {self}"))
    }
}

impl fmt::Display for FaceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSelector::Index(index) => write!(f, "{index}"),
            FaceSelector::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for FaceSelector {
    fn from(index: usize) -> Self { FaceSelector::Index(index) }
}

impl From<FaceId> for FaceSelector {
    fn from(face: FaceId) -> Self { FaceSelector::Index(face.index()) }
}

impl From<&str> for FaceSelector {
    fn from(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(index) => FaceSelector::Index(index),
            Err(_) => FaceSelector::Name(s.to_string()),
        }
    }
}

impl FromStr for FaceSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> { Ok(s.into()) }
}

/// Neighbors of a resolved origin face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    /// Index actually used, after any fallback.
    pub index: usize,
    /// Name of the origin face.
    pub face: String,
    /// One name per shared boundary edge, in boundary order.
    pub neighbors: Vec<String>,
}

/// Faces sharing an edge with the selected face.
pub fn face_neighbors(graph: &SerializedGraph, origin: impl Into<FaceSelector>) -> Result<Neighbors> {
    let dcel = load(graph)?;
    let face = origin.into().resolve(&dcel)?;
    Ok(Neighbors {
        index: face.index(),
        face: face.name(),
        neighbors: dcel.neighbors(face).into_iter().map(FaceId::name).collect(),
    })
}

/// Breadth-first layers of face names around the selected face.
pub fn face_neighbor_layers(graph: &SerializedGraph, origin: impl Into<FaceSelector>) -> Result<Vec<Vec<String>>> {
    let dcel = load(graph)?;
    let face = origin.into().resolve(&dcel)?;
    Ok(dcel.neighbor_layers(face).into_iter()
        .map(|layer| layer.into_iter().map(FaceId::name).collect())
        .collect())
}
