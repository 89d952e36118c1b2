//! Error types for the pacai crate

use thiserror::Error;

/// Main error type for the pacai crate
///
/// Unreachable goals and terminal states are not errors: searches report them
/// through [`crate::search::SearchOutcome`] and agents return `None`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{variant} is not implemented")]
    NotImplemented { variant: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unknown algorithm '{input}'. Expected one of: {expected}")]
    ParseAlgorithm { input: String, expected: String },

    #[error("invalid maze character '{character}' at row {row}, column {column}")]
    InvalidMazeCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("maze has no {cell} cell")]
    MissingMazeCell { cell: String },

    #[error("maze row {row} has {got} columns, expected {expected}")]
    RaggedMaze {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
