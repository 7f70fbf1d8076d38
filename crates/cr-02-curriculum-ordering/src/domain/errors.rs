//! Error types for Curriculum Ordering

use thiserror::Error;

/// All errors that can occur in the ordering stage.
///
/// `ItemsNotFound` is always fatal (there is nothing to order).
/// `MetadataNotFound` and `GraphNotFound` are reported faithfully by the
/// adapters; the service degrades them to empty inputs. Parse failures are
/// fatal everywhere: a malformed input never yields a partial artifact.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// The aggregated items file does not exist
    #[error("Aggregated items not found at {path}")]
    ItemsNotFound { path: String },

    /// The metadata store file does not exist
    #[error("Metadata store not found at {path}")]
    MetadataNotFound { path: String },

    /// The dependency graph file does not exist
    #[error("Dependency graph not found at {path}")]
    GraphNotFound { path: String },

    /// An input file exists but could not be read
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// An input file is not valid JSON of the expected shape
    #[error("Failed to parse {path}: {message}")]
    ParseFailed { path: String, message: String },

    /// The ordered curriculum could not be serialized
    #[error("Failed to encode ordered curriculum: {message}")]
    EncodeFailed { message: String },

    /// The ordered curriculum could not be written
    #[error("Failed to write ordered curriculum at {path}: {message}")]
    WriteFailed { path: String, message: String },
}
