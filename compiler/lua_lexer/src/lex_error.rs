//! Lexer diagnostics.
//!
//! Malformed input never stops the lexer. Most problems are visible in the
//! token stream itself (`unclosed_string_literal`, `unidentified`); the two
//! that are not are reported as [`LexWarning`]s returned next to the tokens.
//! The only hard failure is running out of memory for the token list.

use std::collections::TryReserveError;
use std::fmt;

use crate::Span;

/// A recoverable lexical problem.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexWarning {
    /// WHERE: the token the warning is about.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexWarningKind,
}

/// What kind of warning was recorded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexWarningKind {
    /// Exponent marker with no digits after it (`1e`, `2E+`).
    MalformedExponent,
    /// Long comment that reached end of input before its closing bracket.
    UnterminatedLongComment,
}

impl LexWarning {
    pub fn malformed_exponent(span: Span) -> Self {
        LexWarning {
            span,
            kind: LexWarningKind::MalformedExponent,
        }
    }

    pub fn unterminated_long_comment(span: Span) -> Self {
        LexWarning {
            span,
            kind: LexWarningKind::UnterminatedLongComment,
        }
    }

    /// Human-readable description, without location.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl LexWarningKind {
    /// Stable snake-case identifier for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MalformedExponent => "malformed_exponent",
            Self::UnterminatedLongComment => "unterminated_long_comment",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::MalformedExponent => "malformed number: expected digits after exponent",
            Self::UnterminatedLongComment => "unterminated long comment",
        }
    }
}

impl fmt::Display for LexWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message())
    }
}

/// Fatal tokenization failure.
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    /// The token list could not grow.
    #[error("out of memory after {tokens} tokens")]
    OutOfMemory {
        tokens: usize,
        source: TryReserveError,
    },
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{LexWarning, LexWarningKind};

    impl Serialize for LexWarningKind {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl Serialize for LexWarning {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("LexWarning", 3)?;
            state.serialize_field("kind", &self.kind)?;
            state.serialize_field("span", &self.span)?;
            state.serialize_field("message", self.message())?;
            state.end()
        }
    }
}
