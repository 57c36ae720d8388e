use std::num::ParseIntError;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in matrix arithmetic, training, data loading
/// or checkpoint handling.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes do not satisfy the operation's precondition.
    #[error("incompatible dimensions for {op}: {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    IncompatibleDimensions {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A literal value list does not fill the requested shape exactly.
    #[error("got {got} values for a {rows}x{cols} matrix")]
    ElementCount { rows: usize, cols: usize, got: usize },

    /// A numeric string could not be parsed as an integer.
    #[error("entry {index} ({value:?}) is not an integer: {source}")]
    Parse {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `line` counts records from 0.
    #[error("line {line}: label {value:?} is not a non-negative integer")]
    InvalidLabel { line: usize, value: String },

    #[error("label {label} is out of range for {classes} classes")]
    LabelOutOfRange { label: usize, classes: usize },

    #[error("invalid network spec: {0}")]
    InvalidSpec(String),

    #[error("invalid checkpoint: {0}")]
    InvalidCheckpoint(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
