//! Error type shared by the rational, vector and matrix layers.

use thiserror::Error;

/// Errors raised by construction and arithmetic on fractions, row vectors
/// and matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Two operands (or the rows of a matrix) have different lengths.
    #[error("dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A fraction or vector was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Vector or matrix indexing outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Text (or a non-finite float) that has no exact rational value.
    #[error("invalid numeric literal: {0:?}")]
    InvalidNumericLiteral(String),

    /// A matrix with no rows, or a row with no entries.
    #[error("a matrix needs at least one row and one column")]
    Empty,
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
