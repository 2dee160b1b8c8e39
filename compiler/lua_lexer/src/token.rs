//! Token types for the Lua lexer.

use std::fmt;

use crate::Span;

/// A token with its kind, spelling and source span.
///
/// `text` is `None` only for keywords and `EndOfFile`, where the spelling is
/// implied by the kind. The span covers every byte the token consumed,
/// including a trailing `.` absorbed by an identifier or the spaces after `..`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub span: Span,
}

impl Token {
    /// Create a token with a spelling.
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    /// Create a token whose spelling is implied by its kind.
    #[inline]
    pub const fn bare(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: None,
            span,
        }
    }

    /// The spelling, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}({:?}) @ {}", self.kind, text, self.span),
            None => write!(f, "{} @ {}", self.kind, self.span),
        }
    }
}

/// Every kind of token the lexer produces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Keywords ===
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,

    // === Literals & Names ===
    /// Name, or `[name]` when the name follows a single `.`.
    Identifier,
    /// Decimal number, spelled as written.
    Number,
    /// Short or long string; the spelling excludes quotes and brackets.
    StringLiteral,
    /// String that reached end of input before closing.
    UnclosedStringLiteral,

    // === Relational & Assignment ===
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `~=`
    NotEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,

    // === Arithmetic & Other Operators ===
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `#`
    Len,
    /// `..`
    Concat,
    /// `...`
    Dots,

    // === Comments ===
    /// `--` to end of line.
    ShortComment,
    /// `--[[ ... ]]` at any level.
    LongComment,

    // === Brackets ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftCurly,
    RightCurly,

    // === Punctuation ===
    /// `::`
    DoubleColon,
    Colon,
    Comma,
    Semicolon,
    /// `.` (field access)
    Attr,

    // === Structural ===
    /// Horizontal whitespace run. Never contains `\n`.
    Whitespace,
    /// A single character that starts no token.
    Unidentified,
    EndOfFile,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 58;

    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        Self::And,
        Self::Break,
        Self::Do,
        Self::Else,
        Self::ElseIf,
        Self::End,
        Self::False,
        Self::For,
        Self::Function,
        Self::Goto,
        Self::If,
        Self::In,
        Self::Local,
        Self::Nil,
        Self::Not,
        Self::Or,
        Self::Repeat,
        Self::Return,
        Self::Then,
        Self::True,
        Self::Until,
        Self::While,
        Self::Identifier,
        Self::Number,
        Self::StringLiteral,
        Self::UnclosedStringLiteral,
        Self::Assign,
        Self::Eq,
        Self::NotEq,
        Self::Less,
        Self::Greater,
        Self::LessEq,
        Self::GreaterEq,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Pow,
        Self::Len,
        Self::Concat,
        Self::Dots,
        Self::ShortComment,
        Self::LongComment,
        Self::LeftParen,
        Self::RightParen,
        Self::LeftBracket,
        Self::RightBracket,
        Self::LeftCurly,
        Self::RightCurly,
        Self::DoubleColon,
        Self::Colon,
        Self::Comma,
        Self::Semicolon,
        Self::Attr,
        Self::Whitespace,
        Self::Unidentified,
        Self::EndOfFile,
    ];

    /// Lowercase snake-case name used by bindings and diagnostics.
    ///
    /// Keywords are named by their spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Break => "break",
            Self::Do => "do",
            Self::Else => "else",
            Self::ElseIf => "elseif",
            Self::End => "end",
            Self::False => "false",
            Self::For => "for",
            Self::Function => "function",
            Self::Goto => "goto",
            Self::If => "if",
            Self::In => "in",
            Self::Local => "local",
            Self::Nil => "nil",
            Self::Not => "not",
            Self::Or => "or",
            Self::Repeat => "repeat",
            Self::Return => "return",
            Self::Then => "then",
            Self::True => "true",
            Self::Until => "until",
            Self::While => "while",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::StringLiteral => "string_literal",
            Self::UnclosedStringLiteral => "unclosed_string_literal",
            Self::Assign => "assign",
            Self::Eq => "eq",
            Self::NotEq => "not_eq",
            Self::Less => "less",
            Self::Greater => "greater",
            Self::LessEq => "less_eq",
            Self::GreaterEq => "greater_eq",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "pow",
            Self::Len => "len",
            Self::Concat => "concat",
            Self::Dots => "dots",
            Self::ShortComment => "short_comment",
            Self::LongComment => "long_comment",
            Self::LeftParen => "left_paren",
            Self::RightParen => "right_paren",
            Self::LeftBracket => "left_bracket",
            Self::RightBracket => "right_bracket",
            Self::LeftCurly => "left_curly",
            Self::RightCurly => "right_curly",
            Self::DoubleColon => "double_colon",
            Self::Colon => "colon",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Attr => "attr",
            Self::Whitespace => "whitespace",
            Self::Unidentified => "unidentified",
            Self::EndOfFile => "end_of_file",
        }
    }

    /// `true` for the 22 reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Break
                | Self::Do
                | Self::Else
                | Self::ElseIf
                | Self::End
                | Self::False
                | Self::For
                | Self::Function
                | Self::Goto
                | Self::If
                | Self::In
                | Self::Local
                | Self::Nil
                | Self::Not
                | Self::Or
                | Self::Repeat
                | Self::Return
                | Self::Then
                | Self::True
                | Self::Until
                | Self::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of a token kind, e.g. `left_paren` or `end_of_file`.
#[inline]
pub fn token_kind_name(kind: TokenKind) -> &'static str {
    kind.name()
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{Token, TokenKind};

    impl Serialize for TokenKind {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    /// `{ "type": <kind name>, "value": <spelling or null> }`
    impl Serialize for Token {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Token", 2)?;
            state.serialize_field("type", self.kind.name())?;
            state.serialize_field("value", &self.text)?;
            state.end()
        }
    }
}
