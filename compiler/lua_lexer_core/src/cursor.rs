//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. Reads at or past
//! the end of the source return `0x00` (the sentinel or padding), so
//! predicate loops such as [`Cursor::eat_while`] stop at the end of input
//! without explicit bounds checks.
//!
//! # End of input
//!
//! EOF is a position test (`pos >= source_len`), not a byte test. Lua source
//! may contain interior null bytes; those read as `0x00` but are not EOF.

/// Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so look-ahead that may not commit (long-bracket
/// openers, closing markers) is done on a copy and assigned back on success.
///
/// # Invariant
///
/// `buf[source_len]` is `0x00`, followed by at least two more zero bytes.
/// This is guaranteed by `SourceBuffer::new()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Cursor should stay three words wide on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Jump forward to `pos`, clamped to the end of the source.
    ///
    /// Moving backward is a no-op: the cursor never revisits bytes it has
    /// already handed out as part of a token.
    pub fn advance_to(&mut self, pos: u32) {
        debug_assert!(pos >= self.pos, "cursor moved backward: {} -> {pos}", self.pos);
        self.pos = pos.clamp(self.pos, self.source_len.max(self.pos));
    }

    /// `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past a run of ASCII spaces (not tabs).
    #[inline]
    pub fn eat_spaces(&mut self) {
        self.eat_while(|b| b == b' ');
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(b'\n');
    }

    /// Advance to the next occurrence of `byte` or to EOF.
    ///
    /// Returns `true` if `byte` was found; the cursor then sits on it.
    /// Only source content is searched, never the sentinel region.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}
