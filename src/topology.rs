//! Face/vertex connectivity of a polygon mesh, independent of point positions.

mod error;
mod iter;

pub use error::*;
pub use iter::*;

use smoothmesh_common::MeshIndex;

/// The connectivity of a polygon mesh.
///
/// # Invariants
///
/// * `sum(face_sizes)` == `face_indices.len()`
/// * every face has at least 3 vertices
/// * every entry of `face_indices` is within `0..num_points`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology<Idx: MeshIndex = u32> {
    face_sizes: Vec<Idx>,
    face_indices: Vec<Idx>,
    num_points: usize,
}

impl<Idx: MeshIndex> Topology<Idx> {
    /// Validate and wrap a face list.
    ///
    /// `face_sizes[f]` is the number of vertices in face `f`; `face_indices` is every face's vertex
    /// list, concatenated in face order.
    pub fn new(
        face_sizes: Vec<Idx>,
        face_indices: Vec<Idx>,
        num_points: usize,
    ) -> Result<Self, TopologyError> {
        let expected = face_sizes
            .iter()
            .enumerate()
            .try_fold(0usize, |acc, (face, s)| {
                acc.checked_add(s.index())
                    .ok_or(TopologyError::FaceSizeOverflow { face })
            })?;
        if expected != face_indices.len() {
            return Err(TopologyError::FaceCountMismatch {
                expected,
                found: face_indices.len(),
            });
        }

        let mut offset = 0;
        for (face, size) in face_sizes.iter().map(|s| s.index()).enumerate() {
            if size < 3 {
                return Err(TopologyError::DegenerateFace { face, size });
            }
            if let Some(index) = face_indices[offset..offset + size]
                .iter()
                .map(|i| i.index())
                .find(|&i| i >= num_points)
            {
                return Err(TopologyError::IndexOutOfRange {
                    face,
                    index,
                    num_points,
                });
            }
            offset += size;
        }

        Ok(Self {
            face_sizes,
            face_indices,
            num_points,
        })
    }

    /// Validate and wrap a face list given as signed integers, as handed over by hosts without
    /// unsigned types.
    pub fn from_signed(
        face_sizes: &[i32],
        face_indices: &[i32],
        num_points: usize,
    ) -> Result<Self, TopologyError> {
        fn convert<Idx: MeshIndex>(
            what: &'static str,
            raw: &[i32],
        ) -> Result<Vec<Idx>, TopologyError> {
            raw.iter()
                .map(|&v| {
                    let v = usize::try_from(v).map_err(|_| TopologyError::Negative {
                        what,
                        value: v.into(),
                    })?;
                    Idx::from_usize(v).ok_or(TopologyError::Overflow { what, value: v })
                })
                .collect()
        }
        Self::new(
            convert("face size", face_sizes)?,
            convert("face index", face_indices)?,
            num_points,
        )
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.face_sizes.len()
    }

    #[inline]
    pub fn face_sizes(&self) -> &[Idx] {
        &self.face_sizes
    }

    #[inline]
    pub fn face_indices(&self) -> &[Idx] {
        &self.face_indices
    }

    /// Iterate over each face's vertex list, in topology order.
    pub fn faces(&self) -> Faces<'_, Idx> {
        Faces {
            sizes: self.face_sizes.iter(),
            indices: &self.face_indices,
        }
    }

    /// Iterate over every edge of every face as `[from, to]`, following each face's winding.
    ///
    /// Edges shared between faces are yielded once per face; this is the line list of the control
    /// hull.
    pub fn hull_edges(&self) -> impl Iterator<Item = [Idx; 2]> + '_ {
        self.faces().flat_map(|face| {
            let n = face.len();
            (0..n).map(move |j| [face[j], face[(j + 1) % n]])
        })
    }

    /// Number of points referenced by no face.
    pub fn isolated_points(&self) -> usize {
        let mut touched = vec![false; self.num_points];
        for i in &self.face_indices {
            touched[i.index()] = true;
        }
        touched.into_iter().filter(|t| !t).count()
    }
}
