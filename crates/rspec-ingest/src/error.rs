//! Error types for manifest fetching.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching raw manifests from a source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Catalog directory not found.
    #[error("rules directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a manifest or documentation file.
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON.
    #[error("failed to parse manifest {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rule directory name cannot serve as a rule key.
    #[error("rule directory name is not valid UTF-8: {path}")]
    InvalidRuleName { path: PathBuf },

    /// Manifest parsed but its root is not a JSON object.
    #[error("manifest root must be an object: {path}")]
    NotAnObject { path: PathBuf },
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
