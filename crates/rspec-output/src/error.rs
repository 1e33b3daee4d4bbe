use std::path::PathBuf;

use thiserror::Error;

/// The file sink failed to persist an artifact.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rule could not be serialized for export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize rule {rule}: {source}")]
    Serialize {
        rule: String,
        #[source]
        source: serde_json::Error,
    },
}
