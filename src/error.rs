//! Error types for puzzle construction and the command-line driver.
//!
//! Search itself never fails: "no solution" is reported as `None`, not as an
//! error. Everything here is about rejecting malformed input before it
//! reaches the solver.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{what} grid has no cells")]
    EmptyGrid { what: &'static str },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown symbol '{symbol}' at row {row}, column {column}")]
    InvalidSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    #[error("symbol '{symbol}' at row {row}, column {column} is not in the allowed marker set")]
    DisallowedSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    #[error("start grid is {}x{} but target grid is {}x{}", .from.0, .from.1, .to.0, .to.1)]
    GridSizeMismatch {
        from: (usize, usize),
        to: (usize, usize),
    },

    #[error("start grid must contain exactly one blank, found {count}")]
    BlankCount { count: usize },

    #[error("invalid word '{word}' (expected non-empty lowercase ASCII)")]
    InvalidWord { word: String },

    #[error("must provide either a file path or --stdin")]
    MissingInput,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
