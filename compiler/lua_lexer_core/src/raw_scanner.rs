//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner reads a sentinel-terminated [`Cursor`] and produces one
//! [`RawToken`] per call with no heap allocation. It does not resolve
//! keywords, extract spellings or apply the identifier dot heuristics;
//! the cooking layer does that.
//!
//! # Design
//!
//! The main dispatch looks at the current byte and calls one focused method,
//! which advances the cursor by at least one byte and returns a token. The
//! sentinel byte (`0x00`) at the end of the source dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free, single-pass scanner over Lua source.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Continue scanning from `pos`, skipping the bytes before it.
    ///
    /// Used by the cooking layer when a token absorbs bytes past its raw
    /// length. `pos` must not be behind the current position.
    pub fn resume_at(&mut self, pos: u32) {
        self.cursor.advance_to(pos);
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b'\n' => self.newline(start),
            b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'.' => self.dot(start),
            b'"' | b'\'' => self.short_string(start),
            b'[' => self.left_bracket(start),
            b'-' => self.minus_or_comment(start),
            b'=' => self.pair(start, b'=', RawTag::EqualEqual, RawTag::Equal),
            b'<' => self.pair(start, b'=', RawTag::LessEqual, RawTag::Less),
            b'>' => self.pair(start, b'=', RawTag::GreaterEqual, RawTag::Greater),
            b'~' => self.pair(start, b'=', RawTag::TildeEqual, RawTag::Unknown),
            b':' => self.pair(start, b':', RawTag::ColonColon, RawTag::Colon),
            b'+' => self.single(start, RawTag::Plus),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'%' => self.single(start, RawTag::Percent),
            b'^' => self.single(start, RawTag::Caret),
            b'#' => self.single(start, RawTag::Hash),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            _ => self.unknown(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            self.token(RawTag::Eof, start)
        } else {
            // Interior null byte: not the sentinel.
            self.unknown(start)
        }
    }

    // ─── Whitespace ────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_horizontal_space);
        self.token(RawTag::Whitespace, start)
    }

    /// A run that starts with `\n` swallows all whitespace after it,
    /// newlines and indentation alike.
    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor
            .eat_while(|b| b == b'\n' || is_horizontal_space(b));
        self.token(RawTag::Newline, start)
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Ident, start)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Digits, an optional fraction and an optional exponent.
    ///
    /// A `.` followed by another `.` is left alone: `1..2` is `1`, `..`, `2`.
    fn number(&mut self, start: u32) -> RawToken {
        self.eat_digits();

        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            self.cursor.advance();
            self.eat_digits();
        }

        let mut tag = RawTag::Number;
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                tag = RawTag::EmptyExponent;
            }
            self.eat_digits();
        }

        self.token(tag, start)
    }

    #[inline]
    fn eat_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// `"..."` or `'...'`. Backslash has no special meaning; the string ends
    /// at the first matching quote, across newlines if need be.
    fn short_string(&mut self, start: u32) -> RawToken {
        let quote = self.cursor.current();
        self.cursor.advance();
        if self.cursor.eat_until(quote) {
            self.cursor.advance();
            self.token(RawTag::String, start)
        } else {
            self.token(RawTag::UnterminatedString, start)
        }
    }

    fn left_bracket(&mut self, start: u32) -> RawToken {
        let Some(level) = self.long_bracket_level() else {
            return self.single(start, RawTag::LeftBracket);
        };
        self.cursor.advance_n(level + 2);
        if self.eat_long_bracket_body(level) {
            self.token(RawTag::LongString, start)
        } else {
            self.token(RawTag::UnterminatedLongString, start)
        }
    }

    // ─── Long Brackets ─────────────────────────────────────────────

    /// Level of a long-bracket opener (`[`, `=`*level, `[`) at the cursor.
    ///
    /// Returns `None` when the bytes at the cursor are not an opener.
    fn long_bracket_level(&self) -> Option<u32> {
        if self.cursor.current() != b'[' {
            return None;
        }
        let mut probe = self.cursor;
        probe.advance();
        probe.eat_while(|b| b == b'=');
        if probe.current() == b'[' {
            Some(probe.pos() - self.cursor.pos() - 1)
        } else {
            None
        }
    }

    /// Consume up to and including the closer `]` `=`*level `]`.
    ///
    /// A `]` whose `=` run has a different length is ordinary content.
    /// Returns `false` when EOF arrives first; the cursor is then at EOF.
    fn eat_long_bracket_body(&mut self, level: u32) -> bool {
        while self.cursor.eat_until(b']') {
            let mut probe = self.cursor;
            probe.advance();
            let eq_start = probe.pos();
            probe.eat_while(|b| b == b'=');
            if probe.pos() - eq_start == level && probe.current() == b']' {
                probe.advance();
                self.cursor = probe;
                return true;
            }
            self.cursor.advance();
        }
        false
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn minus_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() != b'-' {
            return self.token(RawTag::Minus, start);
        }
        self.cursor.advance();

        if let Some(level) = self.long_bracket_level() {
            self.cursor.advance_n(level + 2);
            if self.eat_long_bracket_body(level) {
                return self.token(RawTag::BlockComment, start);
            }
            return self.token(RawTag::UnterminatedBlockComment, start);
        }

        self.cursor.eat_until_newline_or_eof();
        self.token(RawTag::LineComment, start)
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// One-byte operator with a two-byte form when followed by `second`.
    fn pair(&mut self, start: u32, second: u8, double: RawTag, single: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(double, start)
        } else {
            self.token(single, start)
        }
    }

    /// `...`, `..` (plus trailing spaces) or `.`.
    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() != b'.' {
            return self.single(start, RawTag::Dot);
        }
        if self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(RawTag::DotDotDot, start);
        }
        self.cursor.advance_n(2);
        self.cursor.eat_spaces();
        self.token(RawTag::DotDot, start)
    }

    // ─── Unknown ───────────────────────────────────────────────────

    /// Exactly one character, however many bytes it encodes to.
    fn unknown(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(RawTag::Unknown, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Whitespace other than `\n`.
#[inline]
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
