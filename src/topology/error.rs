/// Errors related to [Topologies](crate::Topology).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("face sizes sum to {expected}, but {found} face indices were given")]
    FaceCountMismatch { expected: usize, found: usize },
    #[error("face sizes overflow at face {face}")]
    FaceSizeOverflow { face: usize },
    #[error("face {face} refers to point {index}, outside of (0..{num_points})")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        num_points: usize,
    },
    #[error("face {face} has {size} vertices; faces need at least 3")]
    DegenerateFace { face: usize, size: usize },
    #[error("topology expects {expected} points, but {found} were given")]
    PointCountMismatch { expected: usize, found: usize },
    #[error("{what} must not be negative: {value}")]
    Negative { what: &'static str, value: i64 },
    #[error("{what} does not fit in the index type: {value}")]
    Overflow { what: &'static str, value: usize },
}
