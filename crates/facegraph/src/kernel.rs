//! Geometry kernel: orientation, point-on-segment, winding number and the
//! ring orientation test used to tell bounded faces from the outer boundary.
//!
//! Everything here is a pure function over `f64` coordinates.  No
//! trigonometry is involved except [`angle_off_axis`], which only feeds the
//! edge-star sort.

use std::f64::consts::PI;

use geo::Coord;

use crate::dcel::{Dcel, FaceId};

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Orientation of the path `p1 → p2 → p3`, from the sign of
/// `(p1 - p2) × (p3 - p2)`: positive is clockwise, negative is
/// counter-clockwise, zero is collinear.
#[inline]
pub fn orientation(p1: Coord<f64>, p2: Coord<f64>, p3: Coord<f64>) -> Orientation {
    let val = (p1.x - p2.x) * (p3.y - p2.y) - (p1.y - p2.y) * (p3.x - p2.x);
    if val > 0.0 {
        Orientation::Clockwise
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `r` lies inside the closed bounding box of `p` and `q`.
///
/// The three points must already be collinear (see [`orientation`]); under
/// that precondition this is exactly "`r` is on segment `pq`".
#[inline]
pub fn is_point_on_segment(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> bool {
    r.x <= p.x.max(q.x) && r.x >= p.x.min(q.x) && r.y <= p.y.max(q.y) && r.y >= p.y.min(q.y)
}

/// Winding number of `point` with respect to a closed chain of directed
/// segments.
///
/// For each segment `P → Q` the orientation of `P → point → Q` decides the
/// crossing direction: a clockwise turn with `P.x <= point.x < Q.x` counts
/// `+1`, a counter-clockwise turn with `Q.x <= point.x < P.x` counts `-1`.
/// Both half-open intervals include their left endpoint, so a vertex
/// sitting exactly on the ray is counted once.
///
/// A point lying on any segment has winding number `0`: boundary points are
/// outside.
pub fn winding_number_of_segments<I>(segments: I, point: Coord<f64>) -> i32
where
    I: IntoIterator<Item = (Coord<f64>, Coord<f64>)>,
{
    let mut wind = 0;
    for (p, q) in segments {
        match orientation(p, point, q) {
            Orientation::Collinear => {
                if is_point_on_segment(p, q, point) { return 0 }
            }
            Orientation::Clockwise => {
                if p.x <= point.x && point.x < q.x { wind += 1 }
            }
            Orientation::CounterClockwise => {
                if q.x <= point.x && point.x < p.x { wind -= 1 }
            }
        }
    }
    wind
}

/// Winding number of `point` with respect to a closed ring given by its
/// corners (the closing segment back to the first corner is implied).
pub fn winding_number_of_ring(ring: &[Coord<f64>], point: Coord<f64>) -> i32 {
    let segments = ring.iter().zip(ring.iter().cycle().skip(1)).map(|(&p, &q)| (p, q));
    winding_number_of_segments(segments, point)
}

/// Winding number of `point` with respect to the boundary of `face`.
///
/// O(n) in the number of boundary edges.
pub fn winding_number(dcel: &Dcel, face: FaceId, point: Coord<f64>) -> i32 {
    winding_number_of_segments(dcel.face_segments(face), point)
}

/// Returns `true` if `point` lies strictly inside `face`.
#[inline]
pub fn point_in_face(dcel: &Dcel, face: FaceId, point: Coord<f64>) -> bool {
    winding_number(dcel, face, point) != 0
}

/// Direction of `to - from` off the positive x-axis, normalised to `(-π, π]`.
pub fn angle_off_axis(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    // atan2(-0.0, negative) is -π; fold it onto π.
    if angle == -PI { PI } else { angle }
}

/// Shoelace sum `Σ (x2 - x1)(y2 + y1)` over a closed chain of segments.
///
/// Positive for clockwise chains, negative for counter-clockwise ones, in a
/// y-up frame.  Equals twice the negated signed area.
pub fn shoelace_sum<I>(segments: I) -> f64
where
    I: IntoIterator<Item = (Coord<f64>, Coord<f64>)>,
{
    segments.into_iter().map(|(a, b)| (b.x - a.x) * (b.y + a.y)).sum()
}

/// Returns `true` if a closed chain of segments winds clockwise (strictly
/// positive shoelace sum).  Degenerate zero-area chains are not clockwise.
#[inline]
pub fn is_clockwise<I>(segments: I) -> bool
where
    I: IntoIterator<Item = (Coord<f64>, Coord<f64>)>,
{
    shoelace_sum(segments) > 0.0
}

/// Signed area of `face` using the usual convention (counter-clockwise is
/// positive).  Faces produced by discovery wind clockwise, so this is
/// negative for them.
pub fn signed_area(dcel: &Dcel, face: FaceId) -> f64 {
    -0.5 * shoelace_sum(dcel.face_segments(face))
}
