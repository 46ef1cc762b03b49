use std::io;

use thiserror::Error;

/// Errors raised while producing demonstration output
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The output sink rejected a write
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// The catalogue could not be rendered as JSON
    #[error("failed to export catalogue: {0}")]
    Export(#[from] serde_json::Error),
}

/// Result alias used by the driver level operations
pub type Result<T> = std::result::Result<T, LibraryError>;
