//! Loader error types.

use std::path::PathBuf;

use super::convert::ConversionError;

/// Errors that can occur when loading train data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data is not a JSON array of train records
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record decoded but holds invalid values
    #[error("invalid record at index {index}: {source}")]
    Record {
        index: usize,
        source: ConversionError,
    },
}
