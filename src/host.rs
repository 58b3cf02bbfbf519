//! Entry points for hosts which hand over plain signed integer and float arrays, such as a JVM.
//!
//! Every argument is validated and converted before it reaches the [Registry].

use crate::{
    refine::{BufferId, Refiner},
    Error, HandleId, Points, Registry, Topology,
};

/// A [Registry] addressed with signed integer handles.
pub struct HostApi<R: Refiner> {
    registry: Registry<R, u32>,
}

fn to_level(raw: i32) -> Result<u32, Error> {
    u32::try_from(raw).map_err(|_| Error::NegativeLevel(raw))
}

fn to_handle(raw: i32) -> Result<HandleId, Error> {
    u32::try_from(raw)
        .map(HandleId)
        .map_err(|_| Error::NegativeHandle(raw))
}

/// Hosts see buffer names as signed integers; the bits are kept as-is.
fn to_buffer(id: BufferId) -> i32 {
    id.get() as i32
}

impl<R: Refiner> HostApi<R> {
    pub fn new(refiner: R) -> Self {
        Self {
            registry: Registry::new(refiner),
        }
    }

    #[inline]
    pub fn registry(&self) -> &Registry<R, u32> {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut Registry<R, u32> {
        &mut self.registry
    }

    /// Create a mesh from a face list and a flat point array; return its handle.
    ///
    /// The number of points is `points.len() / floats_per_point`.
    pub fn create_mesh(
        &mut self,
        level: i32,
        face_sizes: &[i32],
        face_indices: &[i32],
        floats_per_point: i32,
        points: &[f32],
    ) -> Result<i32, Error> {
        let level = to_level(level)?;
        let points = Points::from_signed(points, floats_per_point)?;
        let topology = Topology::from_signed(face_sizes, face_indices, points.len())?;
        let id = self.registry.create(level, topology, &points)?;
        match i32::try_from(id.get()) {
            Ok(raw) => Ok(raw),
            Err(_) => {
                // ids past i32::MAX can never be named by the host
                self.registry.delete(id);
                Err(Error::HandlesExhausted)
            }
        }
    }

    pub fn update_points(&mut self, mesh: i32, level: i32, points: &[f32]) -> Result<(), Error> {
        let id = to_handle(mesh)?;
        let floats_per_point = self.registry.get(id)?.floats_per_point();
        let points = Points::new(points.to_vec(), floats_per_point)?;
        self.registry.update_points(id, to_level(level)?, &points)
    }

    /// Destroy a mesh. Unknown and negative handles are ignored.
    pub fn delete_mesh(&mut self, mesh: i32) {
        if let Ok(id) = to_handle(mesh) {
            self.registry.delete(id);
        }
    }

    pub fn vertex_buffer_handle(&self, mesh: i32) -> Result<i32, Error> {
        self.registry.vertex_buffer(to_handle(mesh)?).map(to_buffer)
    }

    pub fn index_buffer_handle(&self, mesh: i32) -> Result<i32, Error> {
        self.registry.index_buffer(to_handle(mesh)?).map(to_buffer)
    }

    /// Number of triangle indices to draw `mesh` with, saturating at `i32::MAX`.
    pub fn index_count(&self, mesh: i32) -> Result<i32, Error> {
        self.registry
            .index_count(to_handle(mesh)?)
            .map(|n| i32::try_from(n).unwrap_or(i32::MAX))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{refine::HostRefiner, AttributeError, TopologyError};

    const QUAD: [f32; 12] = [
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
    ];

    #[test]
    fn round_trip() {
        let mut api = HostApi::new(HostRefiner::new());
        let mesh = api.create_mesh(2, &[4], &[0, 1, 2, 3], 3, &QUAD).unwrap();
        assert_eq!(mesh, 1);
        api.update_points(mesh, 2, &QUAD).unwrap();
        assert_eq!(api.index_count(mesh).unwrap(), 6);
        assert_eq!(api.vertex_buffer_handle(mesh).unwrap(), 1);
        assert_eq!(api.index_buffer_handle(mesh).unwrap(), 2);
        api.delete_mesh(mesh);
        api.delete_mesh(mesh);
        api.delete_mesh(-4);
        assert!(matches!(
            api.index_count(mesh),
            Err(Error::NotFound(HandleId(1)))
        ));
    }

    #[test]
    fn rejects_negative_input() {
        let mut api = HostApi::new(HostRefiner::new());
        assert!(matches!(
            api.create_mesh(-1, &[4], &[0, 1, 2, 3], 3, &QUAD),
            Err(Error::NegativeLevel(-1))
        ));
        assert!(matches!(
            api.create_mesh(0, &[-4], &[0, 1, 2, 3], 3, &QUAD),
            Err(Error::InvalidTopology(TopologyError::Negative { .. }))
        ));
        assert!(matches!(
            api.create_mesh(0, &[4], &[0, 1, 2, 3], -3, &QUAD),
            Err(Error::InvalidAttributes(AttributeError::TooFewChannels(-3)))
        ));
        assert!(matches!(
            api.create_mesh(0, &[4], &[0, 1, 2, 3], 5, &QUAD),
            Err(Error::InvalidAttributes(AttributeError::Misaligned { .. }))
        ));
        assert!(matches!(
            api.vertex_buffer_handle(-1),
            Err(Error::NegativeHandle(-1))
        ));
        assert!(api.registry().is_empty());
    }

    #[test]
    fn misaligned_update() {
        let mut api = HostApi::new(HostRefiner::new());
        let mesh = api.create_mesh(0, &[4], &[0, 1, 2, 3], 3, &QUAD).unwrap();
        assert!(matches!(
            api.update_points(mesh, 0, &QUAD[..11]),
            Err(Error::InvalidAttributes(AttributeError::Misaligned { .. }))
        ));
        assert!(matches!(
            api.update_points(mesh, 0, &QUAD[..9]),
            Err(Error::InvalidTopology(TopologyError::PointCountMismatch { .. }))
        ));
    }
}
