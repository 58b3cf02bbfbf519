use smoothmesh_common::MeshIndex;

use crate::{error::RefineError, Topology};

use super::{BufferArena, BufferId, RefinedMesh, Refiner};

/// Errors returned by [HostRefiner] and its meshes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostRefineError {
    #[error("vertex stride must be nonzero")]
    ZeroStride,
    #[error("mesh was built for {expected} points, but {found} were uploaded")]
    PointCountMismatch { expected: usize, found: usize },
    #[error("{num_points} points of stride {stride} need {expected} floats, but {found} were uploaded")]
    BufferLength {
        num_points: usize,
        stride: usize,
        expected: usize,
        found: usize,
    },
    #[error("point index {index} does not fit in a 32-bit index buffer")]
    IndexOverflow { index: usize },
    #[error("attempted to refine a mesh before uploading vertex data")]
    NoVertexData,
}

/// A [Refiner] which keeps its buffers in host memory.
///
/// Meshes are not subdivided: each coarse face becomes one or more quad patches (n-gons are split
/// into a fan of quads, with a trailing triangle stored as a quad with its last index repeated),
/// whatever the requested level. Useful headless, and as a stand-in for a GPU engine in tests.
#[derive(Debug, Default)]
pub struct HostRefiner {
    buffers: BufferArena,
}

impl HostRefiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffers currently allocated to live meshes.
    pub fn live_buffers(&self) -> usize {
        self.buffers.live()
    }

    pub fn buffers(&self) -> &BufferArena {
        &self.buffers
    }
}

impl Refiner for HostRefiner {
    type Mesh = HostMesh;

    fn build<Idx: MeshIndex>(
        &mut self,
        topology: &Topology<Idx>,
        vertex_stride: usize,
        level: u32,
    ) -> Result<Self::Mesh, RefineError> {
        if vertex_stride == 0 {
            return Err(HostRefineError::ZeroStride.into());
        }
        let mut patches = Vec::with_capacity(topology.num_faces());
        for face in topology.faces() {
            patches.extend(quad_patches(face)?);
        }
        tracing::trace!(
            faces = topology.num_faces(),
            level,
            vertex_stride,
            "building host mesh"
        );
        Ok(HostMesh {
            level,
            stride: vertex_stride,
            num_points: topology.num_points(),
            patches,
            vertices: Vec::new(),
            indices: Vec::new(),
            vertex_buffer: self.buffers.allocate(),
            index_buffer: self.buffers.allocate(),
        })
    }

    fn release(&mut self, mesh: Self::Mesh) {
        self.buffers.release(mesh.vertex_buffer);
        self.buffers.release(mesh.index_buffer);
    }
}

/// Split a polygon into a fan of quads around its first vertex.
fn quad_patches<Idx: MeshIndex>(face: &[Idx]) -> Result<Vec<[u32; 4]>, HostRefineError> {
    let v = face
        .iter()
        .map(|i| {
            let index = i.index();
            u32::try_from(index).map_err(|_| HostRefineError::IndexOverflow { index })
        })
        .collect::<Result<Vec<u32>, _>>()?;
    let mut res = Vec::with_capacity(v.len() / 2);
    let mut i = 1;
    while i + 2 < v.len() {
        res.push([v[0], v[i], v[i + 1], v[i + 2]]);
        i += 2;
    }
    if i + 1 < v.len() {
        res.push([v[0], v[i], v[i + 1], v[i + 1]]);
    }
    Ok(res)
}

/// A mesh built by a [HostRefiner].
#[derive(Debug, Clone)]
pub struct HostMesh {
    level: u32,
    stride: usize,
    num_points: usize,
    patches: Vec<[u32; 4]>,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    vertex_buffer: BufferId,
    index_buffer: BufferId,
}

impl HostMesh {
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Contents of the vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Contents of the index buffer, four indices per patch.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The index buffer as a triangle list (two triangles per quad patch).
    pub fn triangles(&self) -> Vec<u32> {
        self.indices
            .chunks_exact(4)
            .flat_map(|q| [q[0], q[1], q[2], q[0], q[2], q[3]])
            .collect()
    }
}

impl RefinedMesh for HostMesh {
    fn update_vertex_buffer(
        &mut self,
        data: &[f32],
        num_points: usize,
    ) -> Result<(), RefineError> {
        if num_points != self.num_points {
            return Err(HostRefineError::PointCountMismatch {
                expected: self.num_points,
                found: num_points,
            }
            .into());
        }
        let expected = num_points * self.stride;
        if data.len() != expected {
            return Err(HostRefineError::BufferLength {
                num_points,
                stride: self.stride,
                expected,
                found: data.len(),
            }
            .into());
        }
        self.vertices.clear();
        self.vertices.extend_from_slice(data);
        Ok(())
    }

    fn refine(&mut self) -> Result<(), RefineError> {
        if self.vertices.is_empty() && self.num_points > 0 {
            return Err(HostRefineError::NoVertexData.into());
        }
        self.indices.clear();
        self.indices.extend(self.patches.iter().flatten());
        Ok(())
    }

    #[inline]
    fn vertex_buffer(&self) -> BufferId {
        self.vertex_buffer
    }

    #[inline]
    fn index_buffer(&self) -> BufferId {
        self.index_buffer
    }

    #[inline]
    fn patch_index_count(&self) -> usize {
        self.indices.len()
    }
}
