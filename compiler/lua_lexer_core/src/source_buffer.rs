//! Sentinel-terminated source buffer.
//!
//! The buffer owns a copy of the source followed by a `0x00` sentinel and
//! zero padding up to the next 64-byte boundary. The scanner detects the
//! end of input by reading the sentinel instead of bounds-checking every
//! byte, and `peek()`/`peek2()` stay in bounds near the end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Bytes that must follow the source: the sentinel plus room for `peek2()`.
const TAIL: usize = 3;

/// Owned, immutable copy of the input with a trailing sentinel.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`
    /// bytes of scannable content; the remainder is never visited.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        let padded_len = (source_len + TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already zero.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len = u32::try_from(source_len).unwrap_or(u32::MAX);
        // A saturated length must still be followed by a zero sentinel.
        if let Some(sentinel) = buf.get_mut(source_len as usize) {
            *sentinel = 0;
        }

        Self { buf, source_len }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
