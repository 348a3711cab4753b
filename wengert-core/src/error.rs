use thiserror::Error;

/// Custom error type for the wengert workspace.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum WengertError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Incompatible shapes for operation {operation}: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
        operation: String,
    },

    #[error("Rank mismatch in {operation}: expected at least {expected} dimensions, got {actual}")]
    RankMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid tape index {index}: the tape only holds {len} nodes")]
    InvalidTapeIndex { index: usize, len: usize },

    #[error("Operands were recorded on different tapes")]
    TapeMismatch,

    #[error("Shape mismatch during gradient accumulation into node {index}: expected {expected:?}, got {actual:?}")]
    GradientAccumulationShapeMismatch {
        index: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Scalar backward called on a terminal of shape {shape:?}")]
    BackwardNonScalar { shape: Vec<usize> },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Unknown parameter id {0}")]
    UnknownParameter(usize),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
