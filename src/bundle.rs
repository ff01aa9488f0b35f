//! Read-only resources packaged with the program at build time.
//!
//! A `ResourceBundle` maps root-anchored identifiers such as `/defaults.toml`
//! to bytes. The usual bundle is a [`StaticBundle`] built with the
//! [`static_bundle!`](crate::static_bundle) macro, which embeds each file with
//! `include_bytes!` so the defaults travel inside the executable.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Separator placed before a logical name to form a resource identifier.
pub const RESOURCE_ROOT: char = '/';

/// Build the root-anchored resource identifier for a logical name.
pub fn resource_id(name: &str) -> String {
    format!("{RESOURCE_ROOT}{name}")
}

/// Lookup of bundled resources by identifier.
///
/// # Example
///
/// ```rust
/// use fallback_reader::{ResourceBundle, StaticBundle};
///
/// static DEFAULTS: StaticBundle = StaticBundle::new(&[("greeting.txt", b"hello")]);
///
/// assert_eq!(DEFAULTS.get("/greeting.txt").as_deref(), Some(&b"hello"[..]));
/// assert!(DEFAULTS.get("greeting.txt").is_none());
/// ```
pub trait ResourceBundle: Send + Sync + Debug {
    /// Returns the bytes of the resource with the given identifier.
    ///
    /// Identifiers must start with [`RESOURCE_ROOT`]; anything else is absent.
    fn get(&self, id: &str) -> Option<Cow<'static, [u8]>>;

    /// Check whether a resource exists.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// A bundle compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBundle {
    entries: &'static [(&'static str, &'static [u8])],
}

impl StaticBundle {
    /// Create a bundle from `(name, bytes)` entries. Names carry no leading separator.
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }

    /// A bundle without resources.
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    /// Number of bundled resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bundle holds no resources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all bundled resources, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }
}

impl ResourceBundle for StaticBundle {
    fn get(&self, id: &str) -> Option<Cow<'static, [u8]>> {
        let name = id.strip_prefix(RESOURCE_ROOT)?;
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
    }
}

impl ResourceBundle for HashMap<String, Vec<u8>> {
    fn get(&self, id: &str) -> Option<Cow<'static, [u8]>> {
        let name = id.strip_prefix(RESOURCE_ROOT)?;
        HashMap::get(self, name).map(|bytes| Cow::Owned(bytes.clone()))
    }
}

impl<B: ResourceBundle + ?Sized> ResourceBundle for &B {
    fn get(&self, id: &str) -> Option<Cow<'static, [u8]>> {
        (**self).get(id)
    }
}

impl<B: ResourceBundle + ?Sized> ResourceBundle for Arc<B> {
    fn get(&self, id: &str) -> Option<Cow<'static, [u8]>> {
        (**self).get(id)
    }
}

/// Build a [`StaticBundle`] from files embedded at compile time.
///
/// Paths are resolved like `include_bytes!`, relative to the invoking file.
///
/// ```rust,ignore
/// use fallback_reader::{static_bundle, StaticBundle};
///
/// static DEFAULTS: StaticBundle = static_bundle![
///     "settings.toml" => "../defaults/settings.toml",
///     "banner.txt" => "../defaults/banner.txt",
/// ];
/// ```
#[macro_export]
macro_rules! static_bundle {
    ($($name:literal => $path:literal),* $(,)?) => {
        $crate::StaticBundle::new(&[
            $(($name, include_bytes!($path) as &'static [u8])),*
        ])
    };
}
