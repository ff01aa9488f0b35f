//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use fallback_reader::prelude::*;
//! ```

// Factory traits
pub use crate::factory::{AsyncReaderFactory, ReaderFactory, ReaderFactoryExt};

// Strategies
pub use crate::fallback::FileOrResourceReaderFactory;
pub use crate::file::FileReaderFactory;
pub use crate::resource::ResourceReaderFactory;

// Bundles
pub use crate::static_bundle;
pub use crate::bundle::{ResourceBundle, StaticBundle};

// Readers and streams
pub use crate::reader::{AsyncUtf8Reader, Source, Utf8Reader};
pub use crate::stream::LineStream;

// Errors
pub use crate::error::{ReaderError, ReaderResult};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
