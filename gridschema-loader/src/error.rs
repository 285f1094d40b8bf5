//! Error types for the persistence layer.

use thiserror::Error;

/// Result type for loading and dumping operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading or dumping schema documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A schema document violates the document contract: wrong top-level
    /// shape, unrecognized keys, or mixed shorthand forms.
    #[error("malformed schema document: {0}")]
    MalformedDocument(String),

    /// No registered provider produced a document for a source identity.
    #[error("no schema provider for source {0:?}")]
    NoProvider(String),
}
