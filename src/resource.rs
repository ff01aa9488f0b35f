//! Bundled-resource-only reader strategy.

use std::borrow::Cow;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::bundle::{resource_id, ResourceBundle};
use crate::error::{ReaderError, ReaderResult};
use crate::factory::{require_name, AsyncReaderFactory, ReaderFactory};
use crate::reader::{AsyncUtf8Reader, Utf8Reader};

/// Reads a resource from a bundle, ignoring the filesystem.
#[derive(Debug, Clone)]
pub struct ResourceReaderFactory<B> {
    name: String,
    resource_id: String,
    bundle: B,
}

impl<B: ResourceBundle> ResourceReaderFactory<B> {
    /// Create a factory looking up `name` at the root of `bundle`.
    pub fn new(name: impl Into<String>, bundle: B) -> ReaderResult<Self> {
        let name = require_name(name)?;
        let resource_id = resource_id(&name);
        Ok(Self {
            name,
            resource_id,
            bundle,
        })
    }

    /// The identifier looked up on each call.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// The bundle resources are read from.
    pub fn bundle(&self) -> &B {
        &self.bundle
    }

    fn lookup<R>(&self, open: impl FnOnce(String, Cow<'static, [u8]>) -> R) -> Option<R> {
        let bytes = self.bundle.get(&self.resource_id);
        trace!(resource = %self.resource_id, found = bytes.is_some(), "checked bundle");
        let bytes = bytes?;
        debug!(resource = %self.resource_id, len = bytes.len(), "opened bundled resource");
        Some(open(self.resource_id.clone(), bytes))
    }

    /// Open the resource, or `None` if the bundle lacks it.
    pub(crate) fn open(&self) -> Option<Utf8Reader> {
        self.lookup(Utf8Reader::from_resource)
    }

    pub(crate) fn open_async(&self) -> Option<AsyncUtf8Reader> {
        self.lookup(AsyncUtf8Reader::from_resource)
    }
}

impl<B: ResourceBundle> ReaderFactory for ResourceReaderFactory<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn instance(&self) -> ReaderResult<Utf8Reader> {
        self.open()
            .ok_or_else(|| ReaderError::ResourceNotFound(self.resource_id.clone()))
    }
}

#[async_trait]
impl<B: ResourceBundle> AsyncReaderFactory for ResourceReaderFactory<B> {
    async fn instance_async(&self) -> ReaderResult<AsyncUtf8Reader> {
        self.open_async()
            .ok_or_else(|| ReaderError::ResourceNotFound(self.resource_id.clone()))
    }
}
