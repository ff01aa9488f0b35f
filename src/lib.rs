//! # fallback-reader
//!
//! Open a UTF-8 text stream by logical name, reading from a file in the
//! current working directory when one exists and otherwise from a resource
//! bundled into the program at build time.
//!
//! ## Overview
//!
//! Tools often ship default configuration or data files and let a deployer
//! override them by placing a same-named file where the tool runs. This crate
//! captures that rule behind a small trait:
//!
//! - [`ReaderFactory`]: produce one reader on demand (sync)
//! - [`AsyncReaderFactory`]: the same over `tokio::fs`
//! - [`FileOrResourceReaderFactory`]: file first, bundled resource second
//! - [`FileReaderFactory`] / [`ResourceReaderFactory`]: single-source strategies
//!
//! ## Resolution
//!
//! ```text
//! name ──▶ ./name is a regular file? ──yes──▶ open file
//!                    │
//!                    no ──▶ bundle has /name? ──yes──▶ read resource
//!                                  │
//!                                  no ──▶ ReaderError::NotFound(name)
//! ```
//!
//! Resolution happens on every call. A directory named like the file does not
//! count as a file. If the file exists but cannot be opened the error
//! surfaces as [`ReaderError::Io`]; there is no silent fallback.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fallback_reader::prelude::*;
//!
//! static DEFAULTS: StaticBundle = static_bundle![
//!     "settings.toml" => "../defaults/settings.toml",
//! ];
//!
//! let factory = FileOrResourceReaderFactory::new("settings.toml", DEFAULTS)?;
//! let settings = factory.read_to_string()?;
//! ```

mod bundle;
mod error;
mod factory;
mod fallback;
mod file;
mod reader;
mod resource;
pub mod stream;

pub mod prelude;

// Re-export core types
pub use bundle::{resource_id, ResourceBundle, StaticBundle, RESOURCE_ROOT};
pub use error::{ReaderError, ReaderResult};
pub use factory::{AsyncReaderFactory, ReaderFactory, ReaderFactoryExt};
pub use fallback::FileOrResourceReaderFactory;
pub use file::FileReaderFactory;
pub use reader::{AsyncUtf8Reader, Source, Utf8Reader};
pub use resource::ResourceReaderFactory;
pub use stream::{line_stream, LineStream};

// Re-export async-trait for implementors of AsyncReaderFactory
pub use async_trait::async_trait;
