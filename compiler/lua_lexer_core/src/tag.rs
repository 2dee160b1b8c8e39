//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges so a tag fits in one byte
//! and the category can be read off the value:
//!
//! | Range   | Category                      |
//! |---------|-------------------------------|
//! | 0-15    | names and literals            |
//! | 32-63   | operators                     |
//! | 80-95   | delimiters and punctuation    |
//! | 112-127 | trivia (whitespace, comments) |
//! | 240-254 | malformed or unknown input    |
//! | 255     | end of input                  |

/// What a raw token is, without its spelling.
///
/// Malformed input is encoded as tags (`UnterminatedString`,
/// `EmptyExponent`, ...) rather than as `Err`: the scanner never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Names & Literals (0-15) ===
    /// `[A-Za-z_][A-Za-z0-9_]*`, keyword or not.
    Ident = 0,
    /// Decimal number with optional fraction and exponent.
    Number = 1,
    /// `"..."` or `'...'`, quotes included.
    String = 2,
    /// `[[...]]` or `[==[...]==]`, markers included.
    LongString = 3,

    // === Operators (32-63) ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Hash = 38,
    Equal = 39,
    EqualEqual = 40,
    TildeEqual = 41,
    Less = 42,
    LessEqual = 43,
    Greater = 44,
    GreaterEqual = 45,
    Dot = 46,
    /// `..` plus any spaces that follow it.
    DotDot = 47,
    DotDotDot = 48,

    // === Delimiters & Punctuation (80-95) ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Colon = 86,
    ColonColon = 87,
    Comma = 88,
    Semicolon = 89,

    // === Trivia (112-127) ===
    /// Horizontal whitespace run (never contains `\n`).
    Whitespace = 112,
    /// Whitespace run that starts with `\n`.
    Newline = 113,
    /// `--` to end of line.
    LineComment = 114,
    /// `--[[...]]` or `--[==[...]==]`.
    BlockComment = 115,

    // === Malformed & Unknown (240-254) ===
    /// A single character that starts no token (including a lone `~`).
    Unknown = 240,
    /// Short string that reached EOF before its closing quote.
    UnterminatedString = 241,
    /// Long string that reached EOF before its closing marker.
    UnterminatedLongString = 242,
    /// Block comment that reached EOF before its closing marker.
    UnterminatedBlockComment = 243,
    /// Number whose exponent marker has no digits (`1e`, `2E+`).
    EmptyExponent = 244,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed spelling for tags whose text never varies.
    ///
    /// `DotDot` reports `..` even though its token length may include
    /// trailing spaces.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Percent => Some("%"),
            Self::Caret => Some("^"),
            Self::Hash => Some("#"),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::TildeEqual => Some("~="),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::Dot => Some("."),
            Self::DotDot => Some(".."),
            Self::DotDotDot => Some("..."),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Colon => Some(":"),
            Self::ColonColon => Some("::"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Ident
            | Self::Number
            | Self::String
            | Self::LongString
            | Self::Whitespace
            | Self::Newline
            | Self::LineComment
            | Self::BlockComment
            | Self::Unknown
            | Self::UnterminatedString
            | Self::UnterminatedLongString
            | Self::UnterminatedBlockComment
            | Self::EmptyExponent
            | Self::Eof => None,
        }
    }
}

/// One scanner step: what was seen and how many bytes it covered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
