//! Sentinel-terminated source buffer.
//!
//! The buffer appends a `0x00` sentinel byte after the source content and
//! zero-pads to the next 64-byte boundary, so the cursor can read
//! `current()` and `peek()` near the end without bounds checks and every
//! scanning loop terminates on the sentinel.
//!
//! Interior null bytes (U+0000 inside the source) are detected once here,
//! at construction. The scanner steps over them without re-reporting; the
//! lexer turns each recorded position into an invalid-character
//! diagnostic.

use std::rc::Rc;

/// Padding granularity for the sentinel region.
const CACHE_LINE: usize = 64;

/// Source text plus sentinel and padding.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, zero padding...]
///  ^                ^
///  0            source_len
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned bytes: source, sentinel, padding.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    /// Positions of interior null bytes found at construction.
    interior_nulls: Vec<u32>,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated buffer and scan it for
    /// interior null bytes.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled allocation; the sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            interior_nulls: find_interior_nulls(source_bytes),
        }
    }

    /// A shared buffer, ready for the lexer's source cache.
    pub fn shared(source: &str) -> Rc<Self> {
        Rc::new(Self::new(source))
    }

    /// A [`Cursor`](crate::Cursor) positioned at byte 0.
    pub fn cursor(&self) -> crate::Cursor<'_> {
        crate::Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// The source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        // The buffer was built from a &str and is immutable after that.
        std::str::from_utf8(&self.buf[..self.source_len as usize]).unwrap_or_default()
    }

    /// Positions of interior null bytes, in source order.
    pub fn interior_nulls(&self) -> &[u32] {
        &self.interior_nulls
    }
}

/// Scan for null bytes inside the source content.
///
/// `memchr` rather than a byte loop: the common case is "none", and the
/// whole source is checked on every buffer construction.
fn find_interior_nulls(source: &[u8]) -> Vec<u32> {
    let mut positions = Vec::new();
    let mut offset = 0;
    while let Some(found) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + found;
        if let Ok(pos) = u32::try_from(absolute) {
            positions.push(pos);
        }
        offset = absolute + 1;
    }
    positions
}
