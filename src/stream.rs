//! Async line streams over decoded readers.

use std::io;
use std::pin::Pin;

use futures_core::Stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_stream::wrappers::LinesStream;

/// Type alias for a boxed stream of decoded lines.
///
/// Lines carry no terminator. A line that is not valid UTF-8 yields an
/// [`io::ErrorKind::InvalidData`] item.
pub type LineStream = Pin<Box<dyn Stream<Item = io::Result<String>> + Send>>;

/// Turn a buffered async reader into a [`LineStream`].
///
/// # Example
///
/// ```rust
/// use fallback_reader::stream::line_stream;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let lines: Vec<_> = line_stream(&b"one\ntwo\n"[..]).collect().await;
/// assert_eq!(lines.len(), 2);
/// # }
/// ```
pub fn line_stream<R>(reader: R) -> LineStream
where
    R: AsyncBufRead + Send + Unpin + 'static,
{
    Box::pin(LinesStream::new(reader.lines()))
}
