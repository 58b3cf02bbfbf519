use nalgebra::Vector3;
use smoothmesh_common::MeshIndex;

use crate::{
    normals::{compute_normals, interleave},
    refine::RefinedMesh,
    Error, HandleId, Points, Topology,
};

/// One mesh owned by a [Registry](crate::Registry): its topology, the normals from its last point
/// update, and the engine-side mesh built from it.
#[derive(Debug)]
pub struct MeshHandle<M, Idx: MeshIndex = u32> {
    pub(crate) id: HandleId,
    pub(crate) level: u32,
    pub(crate) floats_per_point: usize,
    pub(crate) topology: Topology<Idx>,
    pub(crate) normals: Vec<Vector3<f32>>,
    pub(crate) mesh: M,
}

impl<M, Idx: MeshIndex> MeshHandle<M, Idx> {
    #[inline]
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Refinement level the engine mesh was built with.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn floats_per_point(&self) -> usize {
        self.floats_per_point
    }

    /// Floats per vertex in the engine's vertex buffer: the point channels, then a normal.
    #[inline]
    pub fn vertex_stride(&self) -> usize {
        self.floats_per_point + 3
    }

    #[inline]
    pub fn topology(&self) -> &Topology<Idx> {
        &self.topology
    }

    /// Normals computed on the last point update.
    #[inline]
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    #[inline]
    pub fn mesh(&self) -> &M {
        &self.mesh
    }
}

/// Recompute normals for `points`, hand the interleaved result to `mesh`, and refine it.
pub(crate) fn upload<M: RefinedMesh, Idx: MeshIndex>(
    mesh: &mut M,
    topology: &Topology<Idx>,
    points: &Points,
) -> Result<Vec<Vector3<f32>>, Error> {
    let normals = compute_normals(topology, points)?;
    let interleaved = interleave(points, &normals);
    mesh.update_vertex_buffer(&interleaved, points.len())
        .map_err(Error::Refine)?;
    mesh.refine().map_err(Error::Refine)?;
    Ok(normals)
}
