//! File-then-resource reader strategy.
//!
//! Given a logical name such as `settings.toml`, the factory first looks for
//! a regular file of that name in the current working directory. If there is
//! none, it reads the resource `/settings.toml` from the bundle instead. This
//! lets a program ship default data inside its binary while a deployer
//! overrides it by dropping a same-named file next to where it runs.
//!
//! Resolution runs on every call:
//!
//! ```text
//! CheckFile ──regular file──▶ OpenFile ──▶ reader (or Io error, no fallback)
//!     │
//!     └──absent/directory──▶ CheckResource ──found──▶ reader
//!                                 │
//!                                 └──missing──▶ NotFound(name)
//! ```

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::bundle::ResourceBundle;
use crate::error::{ReaderError, ReaderResult};
use crate::factory::{AsyncReaderFactory, ReaderFactory};
use crate::file::{
    is_regular_file, is_regular_file_async, open_file, open_file_async, FileReaderFactory,
};
use crate::reader::{AsyncUtf8Reader, Utf8Reader};
use crate::resource::ResourceReaderFactory;

/// Reads a file from the working directory, falling back to a bundled resource.
///
/// # Example
///
/// ```rust
/// use fallback_reader::prelude::*;
///
/// static DEFAULTS: StaticBundle =
///     StaticBundle::new(&[("greeting-example.txt", b"hello from the bundle")]);
///
/// let factory = FileOrResourceReaderFactory::new("greeting-example.txt", DEFAULTS).unwrap();
/// assert_eq!(factory.read_to_string().unwrap(), "hello from the bundle");
///
/// assert!(FileOrResourceReaderFactory::new("", DEFAULTS).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FileOrResourceReaderFactory<B> {
    file: FileReaderFactory,
    resource: ResourceReaderFactory<B>,
}

impl<B: ResourceBundle> FileOrResourceReaderFactory<B> {
    /// Create a factory for the given logical name.
    ///
    /// Fails with [`ReaderError::InvalidArgument`] if the name is empty.
    /// Neither the filesystem nor the bundle is consulted here.
    pub fn new(name: impl Into<String>, bundle: B) -> ReaderResult<Self> {
        let file = FileReaderFactory::new(name)?;
        let resource = ResourceReaderFactory::new(file.name(), bundle)?;
        Ok(Self { file, resource })
    }

    /// The path checked first, relative to the working directory.
    pub fn file(&self) -> &Path {
        self.file.file()
    }

    /// The bundle identifier used when the file is absent.
    pub fn resource_id(&self) -> &str {
        self.resource.resource_id()
    }

    /// The bundle consulted when the file is absent.
    pub fn bundle(&self) -> &B {
        self.resource.bundle()
    }

    /// Resolve with `open` as the file-opening step. Once the file check
    /// passes, the bundle is not consulted whatever `open` returns.
    fn resolve_with(
        &self,
        open: impl FnOnce(&Path) -> ReaderResult<Utf8Reader>,
    ) -> ReaderResult<Utf8Reader> {
        if is_regular_file(self.file()) {
            return open(self.file());
        }
        self.resource.open().ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> ReaderError {
        debug!(name = %self.file.name(), "neither file nor resource exists");
        ReaderError::NotFound(self.file.name().to_string())
    }
}

impl<B: ResourceBundle> ReaderFactory for FileOrResourceReaderFactory<B> {
    fn name(&self) -> &str {
        self.file.name()
    }

    fn instance(&self) -> ReaderResult<Utf8Reader> {
        self.resolve_with(open_file)
    }
}

#[async_trait]
impl<B: ResourceBundle> AsyncReaderFactory for FileOrResourceReaderFactory<B> {
    async fn instance_async(&self) -> ReaderResult<AsyncUtf8Reader> {
        if is_regular_file_async(self.file()).await {
            return open_file_async(self.file()).await;
        }
        self.resource.open_async().ok_or_else(|| self.not_found())
    }
}
