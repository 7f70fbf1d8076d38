//! Error types for Metadata Extraction

use thiserror::Error;

/// All errors that can occur during metadata extraction.
///
/// Every variant is fatal to the extraction run: the pool is either read,
/// parsed, projected, and persisted in full, or no artifact is written.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The raw content pool file does not exist
    #[error("Content pool not found at {path}")]
    PoolNotFound { path: String },

    /// The pool file exists but could not be read
    #[error("Failed to read content pool at {path}: {message}")]
    PoolReadFailed { path: String, message: String },

    /// The pool file is not valid JSON or not the expected shape
    #[error("Failed to parse content pool at {path}: {message}")]
    PoolParseFailed { path: String, message: String },

    /// The metadata store could not be serialized
    #[error("Failed to encode metadata store: {message}")]
    StoreEncodeFailed { message: String },

    /// The metadata store could not be written to disk
    #[error("Failed to write metadata store at {path}: {message}")]
    StoreWriteFailed { path: String, message: String },
}
