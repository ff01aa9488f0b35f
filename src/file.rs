//! File-only reader strategy.

use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::{ReaderError, ReaderResult};
use crate::factory::{require_name, AsyncReaderFactory, ReaderFactory};
use crate::reader::{AsyncUtf8Reader, Utf8Reader};

/// True if `path` names an existing regular file.
///
/// Directories, special files and paths whose metadata cannot be read all
/// count as absent.
pub(crate) fn is_regular_file(path: &Path) -> bool {
    let found = path.is_file();
    trace!(path = %path.display(), found, "checked for regular file");
    found
}

pub(crate) async fn is_regular_file_async(path: &Path) -> bool {
    let found = tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    trace!(path = %path.display(), found, "checked for regular file");
    found
}

/// Open a file already known to exist. A failure here is not retried.
pub(crate) fn open_file(path: &Path) -> ReaderResult<Utf8Reader> {
    let file =
        File::open(path).map_err(|e| ReaderError::io(path.display().to_string(), e))?;
    debug!(path = %path.display(), "opened file");
    Ok(Utf8Reader::from_file(path.to_path_buf(), file))
}

pub(crate) async fn open_file_async(path: &Path) -> ReaderResult<AsyncUtf8Reader> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| ReaderError::io(path.display().to_string(), e))?;
    debug!(path = %path.display(), "opened file");
    Ok(AsyncUtf8Reader::from_file(path.to_path_buf(), file))
}

/// Reads a file relative to the current working directory, with no fallback.
#[derive(Debug, Clone)]
pub struct FileReaderFactory {
    name: String,
    file: PathBuf,
}

impl FileReaderFactory {
    /// Create a factory for the given logical name.
    ///
    /// Fails with [`ReaderError::InvalidArgument`] if the name is empty.
    /// Nothing is touched on disk until [`ReaderFactory::instance`] is called.
    pub fn new(name: impl Into<String>) -> ReaderResult<Self> {
        let name = require_name(name)?;
        let file = PathBuf::from(&name);
        Ok(Self { name, file })
    }

    /// The path checked on each call.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl ReaderFactory for FileReaderFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn instance(&self) -> ReaderResult<Utf8Reader> {
        if !is_regular_file(&self.file) {
            return Err(ReaderError::FileNotFound(self.file.clone()));
        }
        open_file(&self.file)
    }
}

#[async_trait]
impl AsyncReaderFactory for FileReaderFactory {
    async fn instance_async(&self) -> ReaderResult<AsyncUtf8Reader> {
        if !is_regular_file_async(&self.file).await {
            return Err(ReaderError::FileNotFound(self.file.clone()));
        }
        open_file_async(&self.file).await
    }
}
