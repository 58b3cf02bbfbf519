//! Ownership of live meshes, keyed by [HandleId].

mod handle;
mod shared;

pub use handle::*;
pub use shared::*;

use std::collections::BTreeMap;

use smoothmesh_common::MeshIndex;

use crate::{
    refine::{BufferId, RefinedMesh, Refiner},
    AttributeError, Error, Points, Topology, TopologyError,
};

smoothmesh_common::id_type!(
    /// Identifies one mesh for its whole lifetime within a [Registry].
    ///
    /// Ids are issued in strictly increasing order starting at 1, and are never reused.
    pub HandleId(u32)
);

/// Owns every live mesh built by a [Refiner].
///
/// Any number of meshes may be live at once; each is destroyed independently through
/// [Registry::delete]. Dropping the registry releases whatever is still live.
#[derive(Debug)]
pub struct Registry<R: Refiner, Idx: MeshIndex = u32> {
    refiner: R,
    handles: BTreeMap<HandleId, MeshHandle<R::Mesh, Idx>>,
    /// The last id issued.
    last_id: u32,
}

impl<R: Refiner, Idx: MeshIndex> Registry<R, Idx> {
    pub fn new(refiner: R) -> Self {
        Self {
            refiner,
            handles: BTreeMap::new(),
            last_id: 0,
        }
    }

    #[inline]
    pub fn refiner(&self) -> &R {
        &self.refiner
    }

    #[inline]
    pub fn refiner_mut(&mut self) -> &mut R {
        &mut self.refiner
    }

    /// Number of live meshes.
    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Ids of every live mesh, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = HandleId> + '_ {
        self.handles.keys().copied()
    }

    /// Build a mesh at refinement `level` and upload its initial `points`.
    ///
    /// Nothing is registered unless every step succeeds; an engine mesh built before a failing
    /// upload is released again.
    pub fn create(
        &mut self,
        level: u32,
        topology: Topology<Idx>,
        points: &Points,
    ) -> Result<HandleId, Error> {
        if points.len() != topology.num_points() {
            return Err(TopologyError::PointCountMismatch {
                expected: topology.num_points(),
                found: points.len(),
            }
            .into());
        }
        let next = self.last_id.checked_add(1).ok_or(Error::HandlesExhausted)?;

        let floats_per_point = points.floats_per_point();
        let mut mesh = self
            .refiner
            .build(&topology, floats_per_point + 3, level)
            .map_err(Error::Refine)?;
        let normals = match handle::upload(&mut mesh, &topology, points) {
            Ok(n) => n,
            Err(e) => {
                self.refiner.release(mesh);
                return Err(e);
            }
        };

        self.last_id = next;
        let id = HandleId(next);
        tracing::debug!(
            %id,
            level,
            points = points.len(),
            faces = topology.num_faces(),
            "created mesh"
        );
        self.handles.insert(
            id,
            MeshHandle {
                id,
                level,
                floats_per_point,
                topology,
                normals,
                mesh,
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: HandleId) -> Result<&MeshHandle<R::Mesh, Idx>, Error> {
        self.handles.get(&id).ok_or(Error::NotFound(id))
    }

    pub fn get_mut(&mut self, id: HandleId) -> Result<&mut MeshHandle<R::Mesh, Idx>, Error> {
        self.handles.get_mut(&id).ok_or(Error::NotFound(id))
    }

    /// Recompute normals from new `points` and refine.
    ///
    /// If `level` differs from the mesh's current level, the engine mesh is rebuilt at `level`.
    /// A rebuild that fails leaves the previous mesh and level untouched.
    pub fn update_points(&mut self, id: HandleId, level: u32, points: &Points) -> Result<(), Error> {
        let handle = self.handles.get_mut(&id).ok_or(Error::NotFound(id))?;
        if points.floats_per_point() != handle.floats_per_point {
            return Err(AttributeError::ChannelMismatch {
                expected: handle.floats_per_point,
                found: points.floats_per_point(),
            }
            .into());
        }

        if points.len() != handle.topology.num_points() {
            return Err(TopologyError::PointCountMismatch {
                expected: handle.topology.num_points(),
                found: points.len(),
            }
            .into());
        }

        if level == handle.level {
            handle.normals = handle::upload(&mut handle.mesh, &handle.topology, points)?;
        } else {
            // the old mesh stays in place until the rebuilt one has been uploaded
            let mut rebuilt = self
                .refiner
                .build(&handle.topology, handle.vertex_stride(), level)
                .map_err(Error::Refine)?;
            let normals = match handle::upload(&mut rebuilt, &handle.topology, points) {
                Ok(n) => n,
                Err(e) => {
                    self.refiner.release(rebuilt);
                    return Err(e);
                }
            };
            let old = std::mem::replace(&mut handle.mesh, rebuilt);
            self.refiner.release(old);
            tracing::debug!(%id, from = handle.level, to = level, "rebuilt mesh at new level");
            handle.level = level;
            handle.normals = normals;
        }
        tracing::trace!(%id, points = points.len(), "updated points");
        Ok(())
    }

    /// Destroy a mesh and release its engine-side resources; return whether `id` was live.
    ///
    /// Deleting an unknown or already-deleted id does nothing.
    pub fn delete(&mut self, id: HandleId) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => {
                self.refiner.release(handle.mesh);
                tracing::debug!(%id, "deleted mesh");
                true
            }
            None => {
                tracing::trace!(%id, "ignoring deletion of unknown mesh");
                false
            }
        }
    }

    /// Destroy every live mesh.
    pub fn clear(&mut self) {
        while let Some((_, handle)) = self.handles.pop_first() {
            self.refiner.release(handle.mesh);
        }
    }

    pub fn vertex_buffer(&self, id: HandleId) -> Result<BufferId, Error> {
        self.get(id).map(|h| h.mesh.vertex_buffer())
    }

    pub fn index_buffer(&self, id: HandleId) -> Result<BufferId, Error> {
        self.get(id).map(|h| h.mesh.index_buffer())
    }

    /// Number of triangle indices to draw the refined mesh with.
    pub fn index_count(&self, id: HandleId) -> Result<usize, Error> {
        self.get(id).map(|h| h.mesh.index_count())
    }
}

impl<R: Refiner, Idx: MeshIndex> Drop for Registry<R, Idx> {
    fn drop(&mut self) {
        self.clear();
    }
}
