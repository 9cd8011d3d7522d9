//! Face adjacency derived from twin links: two faces are neighbors when one
//! owns a half-edge whose twin the other owns.

use ahash::AHashSet;

use crate::dcel::{Dcel, FaceId};
use crate::error::{DcelError, Result};

impl Dcel {
    /// Faces across each boundary edge of `face`, in boundary order.
    ///
    /// A neighbor sharing `k` edges with `face` appears `k` times; edges on the
    /// outer boundary contribute nothing.  O(edges in `face`).
    ///
    /// # Panics
    ///
    /// Panics if `face` is not a face of this `Dcel`; resolve caller input
    /// with [`face_or_first`](Self::face_or_first) first.
    pub fn neighbors(&self, face: FaceId) -> Vec<FaceId> {
        self.face_edges(face).iter()
            .filter_map(|&he| self.face_of(self.twin(he)))
            .collect()
    }

    /// Like [`neighbors`](Self::neighbors) with duplicates removed, keeping
    /// the first occurrence of each face.
    pub fn distinct_neighbors(&self, face: FaceId) -> Vec<FaceId> {
        let mut seen = AHashSet::new();
        self.neighbors(face).into_iter()
            .filter(|&f| seen.insert(f))
            .collect()
    }

    /// Number of boundary edges `a` shares with `b`.
    pub fn shared_edge_count(&self, a: FaceId, b: FaceId) -> usize {
        self.face_edges(a).iter()
            .filter(|&&he| self.face_of(self.twin(he)) == Some(b))
            .count()
    }

    /// Returns `true` if `a` and `b` share at least one boundary edge.
    pub fn are_adjacent(&self, a: FaceId, b: FaceId) -> bool {
        self.face_edges(a).iter().any(|&he| self.face_of(self.twin(he)) == Some(b))
    }

    /// Breadth-first layers of faces around `origin`.
    ///
    /// Layer 0 is `[origin]`; layer `k` holds every face whose shortest chain
    /// of shared-edge hops from `origin` has length `k`, in discovery order.
    /// The walk stops at the first empty layer, which is not returned.
    /// O(F + E) over faces and their boundary edges.
    ///
    /// # Panics
    ///
    /// Panics if `origin` is not a face of this `Dcel`.
    pub fn neighbor_layers(&self, origin: FaceId) -> Vec<Vec<FaceId>> {
        let mut visited = vec![false; self.num_faces()];
        visited[origin.0] = true;

        let mut layers = vec![vec![origin]];
        loop {
            let mut next = Vec::new();
            for &face in layers.last().into_iter().flatten() {
                for neighbor in self.neighbors(face) {
                    if !visited[neighbor.0] {
                        visited[neighbor.0] = true;
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() { break }
            layers.push(next);
        }
        layers
    }

    /// Resolve a caller-supplied face index, falling back to face 0 when it
    /// is out of range.  Fails only if there are no faces at all.
    pub fn face_or_first(&self, index: usize) -> Result<FaceId> {
        if index < self.num_faces() {
            Ok(FaceId(index))
        } else if self.num_faces() > 0 {
            tracing::warn!(index, faces = self.num_faces(), "face index out of range, using face 0");
            Ok(FaceId(0))
        } else {
            Err(DcelError::NoFaces)
        }
    }
}
