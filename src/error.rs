use crate::{AttributeError, HandleId, TopologyError};

/// Boxed error returned by a [Refiner](crate::refine::Refiner).
pub type RefineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors related to [Registries](crate::Registry) and the meshes they own.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidTopology(#[from] TopologyError),
    #[error(transparent)]
    InvalidAttributes(#[from] AttributeError),
    #[error("no mesh is registered under handle {0}")]
    NotFound(HandleId),
    #[error("handle ids are never negative: {0}")]
    NegativeHandle(i32),
    #[error("refinement level must not be negative: {0}")]
    NegativeLevel(i32),
    #[error("every handle id has been issued")]
    HandlesExhausted,
    #[error("refinement engine failed: {0}")]
    Refine(#[source] RefineError),
}

impl Error {
    /// Wrap an error returned by a refinement engine.
    pub fn refine(e: impl Into<RefineError>) -> Self {
        Self::Refine(e.into())
    }
}
