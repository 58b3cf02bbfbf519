//! The seam between the [Registry](crate::Registry) and a subdivision engine.
//!
//! A [Refiner] turns a coarse [Topology] into an engine-side mesh; the [RefinedMesh] it returns
//! accepts interleaved vertex data, refines it, and exposes the buffers to draw the result with.
//! Engine-side resources are only ever released through [Refiner::release].

mod arena;
mod host;

pub use arena::*;
pub use host::*;

use smoothmesh_common::MeshIndex;

use crate::{error::RefineError, Topology};

smoothmesh_common::id_type!(
    /// Names a vertex or index buffer owned by a refinement engine.
    ///
    /// `BufferId(0)` never names a live buffer.
    pub BufferId(u32)
);

static_assertions::assert_eq_size!(BufferId, u32);

/// A subdivision engine, able to build refined meshes from coarse topology.
pub trait Refiner {
    type Mesh: RefinedMesh;

    /// Build a mesh from `topology`, with `vertex_stride` floats per coarse vertex, refined to
    /// `level`.
    fn build<Idx: MeshIndex>(
        &mut self,
        topology: &Topology<Idx>,
        vertex_stride: usize,
        level: u32,
    ) -> Result<Self::Mesh, RefineError>;

    /// Free every engine-side resource held by `mesh`.
    fn release(&mut self, mesh: Self::Mesh);
}

/// A mesh owned by a [Refiner].
pub trait RefinedMesh {
    /// Replace the coarse vertex data. `data` holds `num_points` vertices of the stride the mesh
    /// was built with.
    fn update_vertex_buffer(&mut self, data: &[f32], num_points: usize)
        -> Result<(), RefineError>;

    /// Refine the current coarse vertex data.
    fn refine(&mut self) -> Result<(), RefineError>;

    fn vertex_buffer(&self) -> BufferId;

    fn index_buffer(&self) -> BufferId;

    /// Number of indices in the quad patch array.
    fn patch_index_count(&self) -> usize;

    /// Number of indices needed to draw the patches as triangles (two per quad).
    #[inline]
    fn index_count(&self) -> usize {
        (self.patch_index_count() / 4) * 6
    }
}
