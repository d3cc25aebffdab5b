//! Error types for the statement engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, StatementError>;

/// Errors that can occur while building a statement.
#[derive(Error, Debug)]
pub enum StatementError {
    /// A performance references a play absent from the catalog
    #[error("unknown play id: {play_id}")]
    UnknownPlayId { play_id: String },

    /// A resolved play carries a genre outside the recognized set
    #[error("unknown play type {kind:?} for play {play:?}")]
    UnknownPlayType { play: String, kind: String },

    /// Failed to open or read a data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a data file
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing data file arguments
    #[error("Missing data file arguments. Usage: statement-engine <plays.json> <invoice.json>")]
    MissingArgument,
}
