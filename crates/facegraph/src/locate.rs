//! Point location: which bounded face, if any, strictly contains a point.

use geo::{Coord, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::dcel::{Dcel, FaceId};
use crate::kernel;

impl Dcel {
    /// The first face (in face order) whose winding number at `point` is
    /// non-zero, or `None` if the point is outside every face or on a
    /// boundary.  O(total boundary edges).
    pub fn locate(&self, point: Coord<f64>) -> Option<FaceId> {
        self.face_ids().find(|&face| kernel::point_in_face(self, face, point))
    }

    /// Axis-aligned bounding box of `face`.
    pub fn face_bounds(&self, face: FaceId) -> Rect<f64> {
        let mut ring = self.face_ring(face);
        let first = ring.next().unwrap_or(Coord { x: 0.0, y: 0.0 });
        let (min, max) = ring.fold((first, first), |(min, max), c| (
            Coord { x: min.x.min(c.x), y: min.y.min(c.y) },
            Coord { x: max.x.max(c.x), y: max.y.max(c.y) },
        ));
        Rect::new(min, max)
    }
}

/// A bounding box in an R-tree, associated with a face.
#[derive(Debug, Clone)]
struct BoundingBox {
    face: FaceId,
    bbox: Rect<f64>,
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// R-tree over face bounding boxes, for repeated point queries against one
/// `Dcel`.
///
/// Answers are identical to [`Dcel::locate`]: candidates are narrowed by
/// envelope, confirmed with the winding test, and the lowest face id wins.
#[derive(Debug, Clone)]
pub struct FaceLocator {
    rtree: RTree<BoundingBox>,
}

impl FaceLocator {
    /// Index every face of `dcel`.
    pub fn new(dcel: &Dcel) -> Self {
        Self {
            rtree: RTree::bulk_load(
                dcel.face_ids()
                    .map(|face| BoundingBox { face, bbox: dcel.face_bounds(face) })
                    .collect()
            ),
        }
    }

    /// Number of indexed faces.
    pub fn len(&self) -> usize { self.rtree.size() }

    pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Locate `point` among the faces of `dcel`, which must be the structure
    /// this locator was built from.
    pub fn locate(&self, dcel: &Dcel, point: Coord<f64>) -> Option<FaceId> {
        let envelope = AABB::from_point([point.x, point.y]);
        self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(|bb| bb.face)
            .filter(|&face| kernel::point_in_face(dcel, face, point))
            .min()
    }
}
