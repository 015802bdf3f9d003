//! [`RenderedStream`] — the readable output of every renderable file.

use std::fmt;
use std::io::{self, Cursor, Read};

/// Bytes produced for one output file.
///
/// Static text and freshly rendered templates are owned cursors; preserved
/// content is a borrow of the caller's stream and is read in place.
pub enum RenderedStream<'a> {
    /// A compiled-in default template.
    Static(Cursor<&'static [u8]>),
    /// Text produced by the template engine.
    Owned(Cursor<Vec<u8>>),
    /// Previously generated content supplied by the caller.
    Passthrough(&'a mut dyn Read),
}

impl<'a> RenderedStream<'a> {
    pub fn from_static(text: &'static str) -> Self {
        RenderedStream::Static(Cursor::new(text.as_bytes()))
    }

    pub fn from_string(text: String) -> Self {
        RenderedStream::Owned(Cursor::new(text.into_bytes()))
    }

    /// `true` when the stream forwards caller-supplied content.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, RenderedStream::Passthrough(_))
    }

    /// Drain the stream into a byte vector.
    pub fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.read_to_end(&mut out)?;
        Ok(out)
    }
}

impl Read for RenderedStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            RenderedStream::Static(c) => c.read(buf),
            RenderedStream::Owned(c) => c.read(buf),
            RenderedStream::Passthrough(r) => r.read(buf),
        }
    }
}

impl fmt::Debug for RenderedStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedStream::Static(c) => f
                .debug_tuple("Static")
                .field(&c.get_ref().len())
                .finish(),
            RenderedStream::Owned(c) => f
                .debug_tuple("Owned")
                .field(&c.get_ref().len())
                .finish(),
            RenderedStream::Passthrough(_) => f.write_str("Passthrough"),
        }
    }
}
