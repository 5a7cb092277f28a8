//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("number of layers must be greater than zero")]
    InvalidLayerCount,

    #[error("expected {expected} layer dimensions (layers + 1), got {got}")]
    DimensionCountMismatch { expected: usize, got: usize },

    #[error("layer dimension at index {index} must be greater than zero")]
    NonPositiveDimension { index: usize },

    /// A matrix did not have the shape an operation requires.
    /// Shapes are reported as `(rows, cols)`.
    #[error("shape mismatch in {context}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        context: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("batch must contain at least one sample")]
    EmptyBatch,

    #[error("back_propagate called before feed_forward")]
    MissingForwardPass,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
