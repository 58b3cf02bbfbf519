use std::num::{ParseFloatError, ParseIntError};

/// Errors related to parsing [Shapes](crate::shape::Shape).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("line {line}: unknown directive {directive:?}")]
    UnknownDirective { line: usize, directive: String },
    #[error("line {line}: expected {what}")]
    Missing { line: usize, what: &'static str },
    #[error("line {line}: {source}")]
    Float {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: {source}")]
    Int {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: face indices start at 1")]
    ZeroIndex { line: usize },
    #[error("line {line}: relative index {index} reaches before the first position")]
    RelativeIndex { line: usize, index: i64 },
}
