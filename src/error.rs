//! Error types for uswds-blocks.

use std::io;
use thiserror::Error;

/// Result type alias for block decoration.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or decorating blocks.
///
/// Missing optional content is never an error: decorators omit the
/// corresponding fragment instead. Missing required content is logged and
/// reported as "not decorated" rather than as one of these variants.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No decorator is registered for the block name.
    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    /// The block markup has no recognizable container shape.
    #[error("Invalid block markup: {0}")]
    InvalidBlock(String),

    /// A fragment could not be loaded from the given path.
    #[error("Fragment unavailable: {0}")]
    FragmentUnavailable(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
