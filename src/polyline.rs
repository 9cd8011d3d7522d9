//! Drawable face outlines.
//!
//! Each face ring is taken from the start vertex of every boundary edge, in
//! walk order, so rings are clockwise in a y-up frame and open (the first
//! point is not repeated).

use anyhow::Result;
use geo::{Coord, LineString, Polygon};
use facegraph::{Dcel, FaceId, SerializedGraph};

use crate::query::load;

fn points(ring: impl Iterator<Item = Coord<f64>>) -> String {
    ring.map(|c| format!("{},{}", c.x, c.y)).collect::<Vec<_>>().join(" ")
}

fn polygon(dcel: &Dcel, face: FaceId) -> Polygon<f64> {
    Polygon::new(LineString::from(dcel.face_ring(face).collect::<Vec<_>>()), vec![])
}

/// One `"x,y x,y ..."` point string per face, in face order.
pub fn face_polylines(graph: &SerializedGraph) -> Result<Vec<String>> {
    let dcel = load(graph)?;
    Ok(dcel.face_ids().map(|face| points(dcel.face_ring(face))).collect())
}

/// Faces as `geo` polygons (exterior only), in face order.
pub fn face_polygons(graph: &SerializedGraph) -> Result<Vec<Polygon<f64>>> {
    let dcel = load(graph)?;
    Ok(dcel.face_ids().map(|face| polygon(&dcel, face)).collect())
}
