//! Lexer for Lua source.
//!
//! Two layers:
//!
//! ```text
//! &str → lua_lexer_core::RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! The raw scanner finds token boundaries. This crate gives each token its
//! kind and spelling, classifies keywords, applies the field-access rewrite
//! to identifiers and collects [`LexWarning`]s.
//!
//! Use [`tokenize`] to lex a whole string, or [`Lexer`] to pull tokens one
//! at a time.

mod cooker;
mod field_access;
mod keywords;
mod lex_error;
mod span;
mod token;

use cooker::TokenCooker;
use lua_lexer_core::RawScanner;

pub use lex_error::{LexWarning, LexWarningKind, TokenizeError};
pub use lua_lexer_core::SourceBuffer;
pub use span::Span;
pub use token::{token_kind_name, Token, TokenKind};

/// Pull-model lexer over a [`SourceBuffer`].
///
/// Each call to [`next_token`](Self::next_token) returns one token. After the
/// input is exhausted it keeps returning `end_of_file`. As an iterator it
/// yields `end_of_file` exactly once and then stops.
pub struct Lexer<'src> {
    scanner: RawScanner<'src>,
    cooker: TokenCooker<'src>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(buf: &'src SourceBuffer) -> Self {
        Lexer {
            scanner: RawScanner::new(buf.cursor()),
            cooker: TokenCooker::new(buf.as_bytes()),
            finished: false,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let Some(token) = self.cooker.cook(raw.tag, start, raw.len) else {
                continue;
            };
            // An identifier may have absorbed bytes past its raw length.
            if token.span.end > start + raw.len {
                self.scanner.resume_at(token.span.end);
            }
            return token;
        }
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[LexWarning] {
        self.cooker.warnings()
    }

    /// Consume the lexer, returning all recorded warnings.
    pub fn into_warnings(self) -> Vec<LexWarning> {
        self.cooker.into_warnings()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::EndOfFile;
        Some(token)
    }
}

/// Result of lexing a whole input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens in source order, ending with exactly one `end_of_file`.
    pub tokens: Vec<Token>,
    /// Recoverable problems, in source order.
    pub warnings: Vec<LexWarning>,
}

/// Lex `source` into a complete token list.
///
/// Lexical problems never fail: they show up as token kinds or warnings.
/// The only error is failing to allocate room for the tokens.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn tokenize(source: &str) -> Result<LexOutput, TokenizeError> {
    let buf = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buf);

    // Rough guess: one token per 4 bytes of source, plus EOF.
    let mut tokens = Vec::new();
    reserve(&mut tokens, source.len() / 4 + 1)?;

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfFile;
        if tokens.len() == tokens.capacity() {
            let additional = tokens.len();
            reserve(&mut tokens, additional)?;
        }
        tokens.push(token);
        if done {
            break;
        }
    }

    let warnings = lexer.into_warnings();
    tracing::debug!(
        tokens = tokens.len(),
        warnings = warnings.len(),
        "tokenized"
    );
    Ok(LexOutput { tokens, warnings })
}

fn reserve(tokens: &mut Vec<Token>, additional: usize) -> Result<(), TokenizeError> {
    tokens
        .try_reserve(additional)
        .map_err(|source| TokenizeError::OutOfMemory {
            tokens: tokens.len(),
            source,
        })
}
