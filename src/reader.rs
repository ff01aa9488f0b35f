//! UTF-8 text readers handed out by reader factories.
//!
//! Each reader owns exactly one open source, either a file handle or an
//! in-memory view of a bundled resource. Dropping the reader releases it.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt, ReadBuf};

use crate::stream::{line_stream, LineStream};

/// Where a reader's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk
    File(PathBuf),
    /// A bundled resource, by identifier
    Resource(String),
}

impl Source {
    pub fn is_file(&self) -> bool {
        matches!(self, Source::File(_))
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Source::Resource(_))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Resource(id) => write!(f, "resource:{id}"),
        }
    }
}

/// A buffered reader over one source whose contents decode as UTF-8.
///
/// The `Read`/`BufRead` impls hand through the raw bytes unvalidated. Only
/// [`read_string`] and [`into_lines`] decode, and they report malformed input
/// as [`io::ErrorKind::InvalidData`] rather than substituting U+FFFD.
///
/// [`read_string`]: Utf8Reader::read_string
/// [`into_lines`]: Utf8Reader::into_lines
pub struct Utf8Reader {
    source: Source,
    inner: BufReader<Box<dyn Read + Send>>,
}

impl Utf8Reader {
    /// Wrap an open source.
    pub fn new(source: Source, reader: Box<dyn Read + Send>) -> Self {
        Self {
            source,
            inner: BufReader::new(reader),
        }
    }

    /// Reader over an open file.
    pub fn from_file(path: PathBuf, file: std::fs::File) -> Self {
        Self::new(Source::File(path), Box::new(file))
    }

    /// Reader over bundled bytes.
    pub fn from_resource(id: String, bytes: Cow<'static, [u8]>) -> Self {
        Self::new(Source::Resource(id), Box::new(Cursor::new(bytes)))
    }

    /// The source this reader was opened on.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Drain the remaining contents into a string.
    pub fn read_string(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        self.inner.read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Consume the reader, yielding decoded lines without their terminators.
    pub fn into_lines(self) -> io::Lines<BufReader<Box<dyn Read + Send>>> {
        self.inner.lines()
    }
}

impl fmt::Debug for Utf8Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utf8Reader")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Read for Utf8Reader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for Utf8Reader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

type BoxedAsyncRead = Pin<Box<dyn AsyncRead + Send>>;

/// Async counterpart of [`Utf8Reader`], backed by tokio.
pub struct AsyncUtf8Reader {
    source: Source,
    inner: tokio::io::BufReader<BoxedAsyncRead>,
}

impl AsyncUtf8Reader {
    /// Wrap an open async source.
    pub fn new(source: Source, reader: BoxedAsyncRead) -> Self {
        Self {
            source,
            inner: tokio::io::BufReader::new(reader),
        }
    }

    /// Reader over an open tokio file.
    pub fn from_file(path: PathBuf, file: tokio::fs::File) -> Self {
        Self::new(Source::File(path), Box::pin(file))
    }

    /// Reader over bundled bytes.
    pub fn from_resource(id: String, bytes: Cow<'static, [u8]>) -> Self {
        Self::new(Source::Resource(id), Box::pin(Cursor::new(bytes)))
    }

    /// The source this reader was opened on.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Drain the remaining contents into a string.
    pub async fn read_string(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        self.inner.read_to_string(&mut buf).await?;
        Ok(buf)
    }

    /// Consume the reader into a stream of decoded lines.
    pub fn lines(self) -> LineStream {
        line_stream(self.inner)
    }
}

impl fmt::Debug for AsyncUtf8Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncUtf8Reader")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl AsyncRead for AsyncUtf8Reader {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_read(cx, buf)
    }
}

impl AsyncBufRead for AsyncUtf8Reader {
    fn poll_fill_buf(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        Pin::new(&mut self.get_mut().inner).poll_fill_buf(cx)
    }

    fn consume(self: Pin<&mut Self>, amt: usize) {
        Pin::new(&mut self.get_mut().inner).consume(amt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn resource(bytes: &'static [u8]) -> Utf8Reader {
        Utf8Reader::from_resource("/test.txt".to_string(), Cow::Borrowed(bytes))
    }

    #[test]
    fn test_read_string() {
        let mut reader = resource("résumé ✓".as_bytes());
        assert_eq!(reader.read_string().unwrap(), "résumé ✓");
        assert_eq!(reader.source(), &Source::Resource("/test.txt".to_string()));
    }

    #[test]
    fn test_invalid_utf8_is_invalid_data() {
        let mut reader = resource(&[0x66, 0x6f, 0xff, 0x6f]);
        let err = reader.read_string().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_into_lines() {
        let reader = resource(b"first\nsecond\r\nthird");
        let lines: Vec<String> = reader.into_lines().collect::<io::Result<_>>().unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::File(PathBuf::from("a.txt")).to_string(), "a.txt");
        assert_eq!(
            Source::Resource("/a.txt".to_string()).to_string(),
            "resource:/a.txt"
        );
        assert!(Source::File(PathBuf::from("a.txt")).is_file());
        assert!(Source::Resource("/a.txt".to_string()).is_resource());
    }

    #[tokio::test]
    async fn test_async_read_string() {
        let mut reader = AsyncUtf8Reader::from_resource(
            "/test.txt".to_string(),
            Cow::Owned(b"async contents".to_vec()),
        );
        assert_eq!(reader.read_string().await.unwrap(), "async contents");
    }

    #[tokio::test]
    async fn test_async_lines() {
        let reader = AsyncUtf8Reader::from_resource(
            "/test.txt".to_string(),
            Cow::Borrowed(&b"a\nb\n"[..]),
        );
        let lines: Vec<String> = reader
            .lines()
            .map(|line| line.unwrap())
            .collect()
            .await;
        assert_eq!(lines, vec!["a", "b"]);
    }
}
