//! Artifact persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::WriteError;

/// Where generated artifacts go.
///
/// Paths are opaque to the pipeline: they are only ever produced by
/// [`FileSink::resolve`] and handed back to [`FileSink::write`].
pub trait FileSink {
    fn resolve(&self, base: &Path, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(base.to_path_buf(), |path, segment| path.join(segment))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError>;
}

impl<S: FileSink + ?Sized> FileSink for &S {
    fn resolve(&self, base: &Path, segments: &[&str]) -> PathBuf {
        (**self).resolve(base, segments)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        (**self).write(path, contents)
    }
}

/// Writes to the local file system, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl FileSink for FsSink {
    fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        Ok(())
    }
}

/// Logs what would be written and touches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSink;

impl FileSink for DryRunSink {
    fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        info!(path = %path.display(), bytes = contents.len(), "dry run: would write");
        Ok(())
    }
}
