use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use smoothmesh_common::MeshIndex;

use crate::{refine::Refiner, Registry};

/// A [Registry] behind a mutex, for callers that must reach it from more than one thread.
///
/// Clones share the same registry.
pub struct SharedRegistry<R: Refiner, Idx: MeshIndex = u32> {
    inner: Arc<Mutex<Registry<R, Idx>>>,
}

impl<R: Refiner, Idx: MeshIndex> Clone for SharedRegistry<R, Idx> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Refiner, Idx: MeshIndex> From<Registry<R, Idx>> for SharedRegistry<R, Idx> {
    fn from(value: Registry<R, Idx>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }
}

impl<R: Refiner, Idx: MeshIndex> SharedRegistry<R, Idx> {
    pub fn new(refiner: R) -> Self {
        Registry::new(refiner).into()
    }

    /// Block until the registry is available.
    pub fn lock(&self) -> MutexGuard<'_, Registry<R, Idx>> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with<T>(&self, f: impl FnOnce(&mut Registry<R, Idx>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
