use std::iter::FusedIterator;

use smoothmesh_common::MeshIndex;

/// An iterator over the vertex lists of each face in a [Topology](crate::Topology).
#[derive(Debug, Clone)]
pub struct Faces<'topo, Idx: MeshIndex> {
    pub(crate) sizes: std::slice::Iter<'topo, Idx>,
    pub(crate) indices: &'topo [Idx],
}

impl<'topo, Idx: MeshIndex> Iterator for Faces<'topo, Idx> {
    type Item = &'topo [Idx];

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.sizes.next()?.index();
        // sizes are validated against `indices` on construction
        let (face, rest) = self.indices.split_at(size);
        self.indices = rest;
        Some(face)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

impl<'topo, Idx: MeshIndex> ExactSizeIterator for Faces<'topo, Idx> {}

impl<'topo, Idx: MeshIndex> FusedIterator for Faces<'topo, Idx> {}
