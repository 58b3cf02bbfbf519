//! Smooth per-point normals for polygon meshes.
//!
//! Each face contributes, at every one of its vertices, the cross product of the two edges leaving
//! the vertex before it. Contributions are summed over all faces sharing a point and the sum is
//! normalized, so the result is a smoothed normal weighted by corner area.

use nalgebra::Vector3;
use smoothmesh_common::MeshIndex;

use crate::{Error, Points, Topology, TopologyError};

/// Accumulated normals with a squared length below this are replaced by the zero vector instead of
/// being normalized.
pub const NORMAL_EPSILON: f32 = 1e-20;

/// Compute one smooth normal per point of `points`.
///
/// Points touched by no face, and points whose contributions cancel out, get a zero normal.
pub fn compute_normals<Idx: MeshIndex>(
    topology: &Topology<Idx>,
    points: &Points,
) -> Result<Vec<Vector3<f32>>, TopologyError> {
    if points.len() != topology.num_points() {
        return Err(TopologyError::PointCountMismatch {
            expected: topology.num_points(),
            found: points.len(),
        });
    }

    let mut normals = vec![Vector3::zeros(); points.len()];
    for face in topology.faces() {
        let n = face.len();
        for j in 0..n {
            let a = points.position(face[j].index());
            let b = face[(j + 1) % n].index();
            let c = points.position(face[(j + 2) % n].index());
            let pb = points.position(b);
            normals[b] -= (pb - a).cross(&(c - a));
        }
    }

    let degenerate = normalize_all(&mut normals);
    if degenerate > 0 {
        tracing::debug!(
            degenerate,
            total = normals.len(),
            "points without a usable normal"
        );
    }
    Ok(normals)
}

/// As [compute_normals], on a raw face list and flat point array.
pub fn smooth_normals<Idx: MeshIndex>(
    face_sizes: &[Idx],
    face_indices: &[Idx],
    num_points: usize,
    floats_per_point: usize,
    points: &[f32],
) -> Result<Vec<Vector3<f32>>, Error> {
    let topology = Topology::new(face_sizes.to_vec(), face_indices.to_vec(), num_points)?;
    let points = Points::new(points.to_vec(), floats_per_point)?;
    Ok(compute_normals(&topology, &points)?)
}

/// Normalize every vector in place; return how many were too short to normalize.
fn normalize_all(normals: &mut [Vector3<f32>]) -> usize {
    let mut degenerate = 0;
    for n in normals.iter_mut() {
        let len2 = n.norm_squared();
        if len2 < NORMAL_EPSILON {
            *n = Vector3::zeros();
            degenerate += 1;
        } else {
            *n /= len2.sqrt();
        }
    }
    degenerate
}

/// Emit, for each point, its channels followed by its normal.
///
/// The result has `points.len() * (points.floats_per_point() + 3)` floats.
///
/// # Panics
///
/// * `normals.len()` != `points.len()`
pub fn interleave(points: &Points, normals: &[Vector3<f32>]) -> Vec<f32> {
    assert_eq!(
        points.len(),
        normals.len(),
        "one normal is needed per point"
    );
    let mut res = Vec::with_capacity(points.len() * (points.floats_per_point() + 3));
    for (p, n) in points.iter().zip(normals) {
        res.extend_from_slice(p);
        res.extend_from_slice(n.as_slice());
    }
    res
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_vector_stays_zero() {
        let mut normals = [Vector3::zeros(), Vector3::new(0.0, 3.0, 4.0)];
        assert_eq!(normalize_all(&mut normals), 1);
        assert_eq!(normals[0], Vector3::zeros());
        assert_eq!(normals[1], Vector3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn point_count_mismatch() {
        let topo = Topology::<u32>::new(vec![3], vec![0, 1, 2], 3).unwrap();
        let pts = Points::new(vec![0.0; 6], 3).unwrap();
        assert_eq!(
            compute_normals(&topo, &pts),
            Err(TopologyError::PointCountMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn interleave_extra_channels() {
        let pts = Points::new(vec![1.0, 2.0, 3.0, 9.0], 4).unwrap();
        let res = interleave(&pts, &[Vector3::new(0.0, 0.0, 1.0)]);
        assert_eq!(res, vec![1.0, 2.0, 3.0, 9.0, 0.0, 0.0, 1.0]);
    }
}
