//! Token cooking layer.
//!
//! Turns `(RawTag, len)` pairs from the raw scanner into [`Token`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct mapping, fixed spelling
//! - **Identifiers**: field-access rewrite → keyword lookup → trailing dot
//! - **Strings**: strip quotes or long-bracket markers
//! - **Comments/whitespace**: spelled as written
//! - **Malformed input**: token kind, plus a `LexWarning` where the kind
//!   alone does not show the problem
//!
//! Newline runs cook to nothing and are dropped.

use lua_lexer_core::RawTag;

use crate::field_access;
use crate::keywords;
use crate::lex_error::LexWarning;
use crate::{Span, Token, TokenKind};

/// Cooks raw tokens into `Token`s.
///
/// Each `cook()` call is independent. Warnings accumulate for the whole input.
pub(crate) struct TokenCooker<'src> {
    source: &'src [u8],
    warnings: Vec<LexWarning>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn warnings(&self) -> &[LexWarning] {
        &self.warnings
    }

    pub(crate) fn into_warnings(self) -> Vec<LexWarning> {
        self.warnings
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token, `len` its raw length.
    /// Returns `None` for tokens that are dropped (newline runs). The
    /// returned span may end past `offset + len` when an identifier absorbs
    /// a trailing dot; the caller resumes scanning at `span.end`.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> Option<Token> {
        let span = Span::new(offset, offset + len);
        let token = match tag {
            RawTag::Ident => self.cook_ident(span),
            RawTag::Number => self.cook_number(span),
            RawTag::EmptyExponent => {
                self.warn(LexWarning::malformed_exponent(span));
                self.cook_number(span)
            }

            // Strings
            RawTag::String => self.spelled(TokenKind::StringLiteral, span, 1, 1),
            RawTag::UnterminatedString => {
                self.spelled(TokenKind::UnclosedStringLiteral, span, 1, 0)
            }
            RawTag::LongString => {
                let marker = self.long_bracket_marker(offset);
                self.spelled(TokenKind::StringLiteral, span, marker, marker)
            }
            RawTag::UnterminatedLongString => {
                let marker = self.long_bracket_marker(offset);
                self.spelled(TokenKind::UnclosedStringLiteral, span, marker, 0)
            }

            // Trivia
            RawTag::Whitespace => self.spelled(TokenKind::Whitespace, span, 0, 0),
            RawTag::Newline => return None,
            RawTag::LineComment => self.spelled(TokenKind::ShortComment, span, 0, 0),
            RawTag::BlockComment => self.spelled(TokenKind::LongComment, span, 0, 0),
            RawTag::UnterminatedBlockComment => {
                self.warn(LexWarning::unterminated_long_comment(span));
                self.spelled(TokenKind::LongComment, span, 0, 0)
            }

            RawTag::Unknown => self.spelled(TokenKind::Unidentified, span, 0, 0),
            RawTag::Eof => Token::bare(TokenKind::EndOfFile, Span::point(offset)),

            // Fixed-spelling operators and delimiters
            RawTag::Plus => fixed(TokenKind::Add, tag, span),
            RawTag::Minus => fixed(TokenKind::Sub, tag, span),
            RawTag::Star => fixed(TokenKind::Mul, tag, span),
            RawTag::Slash => fixed(TokenKind::Div, tag, span),
            RawTag::Percent => fixed(TokenKind::Mod, tag, span),
            RawTag::Caret => fixed(TokenKind::Pow, tag, span),
            RawTag::Hash => fixed(TokenKind::Len, tag, span),
            RawTag::Equal => fixed(TokenKind::Assign, tag, span),
            RawTag::EqualEqual => fixed(TokenKind::Eq, tag, span),
            RawTag::TildeEqual => fixed(TokenKind::NotEq, tag, span),
            RawTag::Less => fixed(TokenKind::Less, tag, span),
            RawTag::LessEqual => fixed(TokenKind::LessEq, tag, span),
            RawTag::Greater => fixed(TokenKind::Greater, tag, span),
            RawTag::GreaterEqual => fixed(TokenKind::GreaterEq, tag, span),
            RawTag::Dot => fixed(TokenKind::Attr, tag, span),
            RawTag::DotDot => fixed(TokenKind::Concat, tag, span),
            RawTag::DotDotDot => fixed(TokenKind::Dots, tag, span),
            RawTag::LeftParen => fixed(TokenKind::LeftParen, tag, span),
            RawTag::RightParen => fixed(TokenKind::RightParen, tag, span),
            RawTag::LeftBracket => fixed(TokenKind::LeftBracket, tag, span),
            RawTag::RightBracket => fixed(TokenKind::RightBracket, tag, span),
            RawTag::LeftBrace => fixed(TokenKind::LeftCurly, tag, span),
            RawTag::RightBrace => fixed(TokenKind::RightCurly, tag, span),
            RawTag::Colon => fixed(TokenKind::Colon, tag, span),
            RawTag::ColonColon => fixed(TokenKind::DoubleColon, tag, span),
            RawTag::Comma => fixed(TokenKind::Comma, tag, span),
            RawTag::Semicolon => fixed(TokenKind::Semicolon, tag, span),
        };
        Some(token)
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn cook_ident(&self, span: Span) -> Token {
        let text = self.bytes(span);

        if field_access::follows_single_dot(self.source, span.start as usize) {
            let name = String::from_utf8_lossy(text);
            return Token::new(TokenKind::Identifier, field_access::bracketed(&name), span);
        }

        if let Some(kind) = keywords::lookup(text) {
            return Token::bare(kind, span);
        }

        let span = match field_access::absorb_trailing_dot(self.source, span.end as usize) {
            Some(end) => span.extend_to(u32::try_from(end).unwrap_or(span.end)),
            None => span,
        };
        Token::new(TokenKind::Identifier, String::from_utf8_lossy(text), span)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn cook_number(&self, span: Span) -> Token {
        let text = self.bytes(span);
        let kind = if text == b".." {
            TokenKind::Concat
        } else {
            TokenKind::Number
        };
        Token::new(kind, String::from_utf8_lossy(text), span)
    }

    // ─── Helpers ───────────────────────────────────────────────────

    /// Token spelled by its source bytes, minus `head` leading and `tail`
    /// trailing bytes.
    fn spelled(&self, kind: TokenKind, span: Span, head: u32, tail: u32) -> Token {
        let content = Span::new(span.start + head, span.end - tail);
        Token::new(kind, String::from_utf8_lossy(self.bytes(content)), span)
    }

    /// Length of the long-bracket opener at `offset`: `[`, the `=` run, `[`.
    ///
    /// The closer has the same length.
    fn long_bracket_marker(&self, offset: u32) -> u32 {
        let level = self
            .source
            .get(offset as usize + 1..)
            .map_or(0, |rest| rest.iter().take_while(|&&b| b == b'=').count());
        u32::try_from(level).map_or(u32::MAX, |level| level + 2)
    }

    fn bytes(&self, span: Span) -> &'src [u8] {
        self.source.get(span.to_range()).unwrap_or_default()
    }

    fn warn(&mut self, warning: LexWarning) {
        tracing::trace!(span = %warning.span, kind = warning.kind.name(), "lex warning");
        self.warnings.push(warning);
    }
}

/// Operator or delimiter with its fixed spelling.
#[inline]
fn fixed(kind: TokenKind, tag: RawTag, span: Span) -> Token {
    match tag.lexeme() {
        Some(text) => Token::new(kind, text, span),
        None => Token::bare(kind, span),
    }
}
