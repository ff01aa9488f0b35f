//! Error types for reader factories.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing a factory or resolving a reader.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The factory was given a malformed argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Neither the file nor the bundled resource exists
    #[error("Neither file nor resource exists: {0}")]
    NotFound(String),

    /// The file does not exist or is not a regular file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The bundle has no resource with this identifier
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The source was located but could not be opened or read
    #[error("IO error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    /// Build an IO error for the given location.
    pub fn io(location: impl Into<String>, source: io::Error) -> Self {
        ReaderError::Io {
            location: location.into(),
            source,
        }
    }

    /// True for every not-found kind, whichever strategy raised it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReaderError::NotFound(_)
                | ReaderError::FileNotFound(_)
                | ReaderError::ResourceNotFound(_)
        )
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ReaderError::InvalidArgument(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ReaderError::Io { .. })
    }
}

/// Result type alias for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;
