//! Reader factory traits.
//!
//! A `ReaderFactory` produces a fresh decoded reader each time it is asked.
//! Callers depend on the trait alone, so the strategy deciding where the
//! bytes come from can be swapped without touching call sites.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::{ReaderError, ReaderResult};
use crate::reader::{AsyncUtf8Reader, Utf8Reader};

/// Produces reader instances on demand.
///
/// # Example
///
/// ```rust
/// use fallback_reader::{ReaderFactory, ReaderResult, Utf8Reader};
/// use std::borrow::Cow;
///
/// #[derive(Debug)]
/// struct Fixed;
///
/// impl ReaderFactory for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn instance(&self) -> ReaderResult<Utf8Reader> {
///         Ok(Utf8Reader::from_resource(
///             "/fixed".to_string(),
///             Cow::Borrowed(&b"always the same"[..]),
///         ))
///     }
/// }
///
/// let mut reader = Fixed.instance().unwrap();
/// assert_eq!(reader.read_string().unwrap(), "always the same");
/// ```
pub trait ReaderFactory: Send + Sync + Debug {
    /// Returns the logical name this factory resolves.
    fn name(&self) -> &str;

    /// Gets a reader instance.
    ///
    /// Every call resolves anew; nothing is cached between calls. The caller
    /// owns the returned reader and releases the source by dropping it.
    fn instance(&self) -> ReaderResult<Utf8Reader>;
}

/// Extension trait with conveniences over [`ReaderFactory`].
pub trait ReaderFactoryExt: ReaderFactory {
    /// Resolve a reader and drain it into a string.
    ///
    /// Failures while reading, including malformed UTF-8, become
    /// [`ReaderError::Io`] tagged with the resolved source.
    fn read_to_string(&self) -> ReaderResult<String> {
        let mut reader = self.instance()?;
        reader
            .read_string()
            .map_err(|e| ReaderError::io(reader.source().to_string(), e))
    }
}

impl<F: ReaderFactory + ?Sized> ReaderFactoryExt for F {}

/// Async variant of [`ReaderFactory`], resolving through `tokio::fs`.
#[async_trait]
pub trait AsyncReaderFactory: Send + Sync + Debug {
    /// Gets an async reader instance with the same resolution rules as
    /// [`ReaderFactory::instance`].
    async fn instance_async(&self) -> ReaderResult<AsyncUtf8Reader>;

    /// Resolve an async reader and drain it into a string.
    async fn read_to_string_async(&self) -> ReaderResult<String> {
        let mut reader = self.instance_async().await?;
        match reader.read_string().await {
            Ok(contents) => Ok(contents),
            Err(e) => Err(ReaderError::io(reader.source().to_string(), e)),
        }
    }
}

/// Validate a logical name passed to a factory constructor.
pub(crate) fn require_name(name: impl Into<String>) -> ReaderResult<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(ReaderError::InvalidArgument(
            "logical name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::io;

    #[derive(Debug)]
    struct BytesFactory(&'static [u8]);

    impl ReaderFactory for BytesFactory {
        fn name(&self) -> &str {
            "bytes"
        }

        fn instance(&self) -> ReaderResult<Utf8Reader> {
            Ok(Utf8Reader::from_resource(
                "/bytes".to_string(),
                Cow::Borrowed(self.0),
            ))
        }
    }

    #[async_trait]
    impl AsyncReaderFactory for BytesFactory {
        async fn instance_async(&self) -> ReaderResult<AsyncUtf8Reader> {
            Ok(AsyncUtf8Reader::from_resource(
                "/bytes".to_string(),
                Cow::Borrowed(self.0),
            ))
        }
    }

    #[test]
    fn test_require_name() {
        assert_eq!(require_name("file.txt").unwrap(), "file.txt");
        assert!(require_name("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_read_to_string() {
        let factory = BytesFactory(b"hello");
        assert_eq!(factory.read_to_string().unwrap(), "hello");
    }

    #[test]
    fn test_read_to_string_through_trait_object() {
        let factory: Box<dyn ReaderFactory> = Box::new(BytesFactory(b"boxed"));
        assert_eq!(factory.name(), "bytes");
        assert_eq!(factory.read_to_string().unwrap(), "boxed");
    }

    #[test]
    fn test_malformed_contents_become_io_error() {
        let factory = BytesFactory(&[0xff, 0xfe]);
        match factory.read_to_string() {
            Err(ReaderError::Io { location, source }) => {
                assert_eq!(location, "resource:/bytes");
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_to_string_async() {
        let factory = BytesFactory(b"async hello");
        assert_eq!(factory.read_to_string_async().await.unwrap(), "async hello");
    }
}
