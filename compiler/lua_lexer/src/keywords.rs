//! Reserved word lookup.
//!
//! Lua's 22 reserved words are all lowercase ASCII, 2-8 bytes long. The
//! lookup uses the identifier's length as a first-pass filter, then matches
//! against the keywords of that length.

use crate::TokenKind;

/// Look up a reserved word by its bytes.
///
/// Returns the keyword's `TokenKind`, or `None` for an ordinary name.
/// Matching is exact and case-sensitive: `End` and `ends` are names.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 2-8 bytes and start with a lowercase letter
    if !(2..=8).contains(&len) || !text[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            b"do" => Some(TokenKind::Do),
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            b"or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            b"and" => Some(TokenKind::And),
            b"end" => Some(TokenKind::End),
            b"for" => Some(TokenKind::For),
            b"nil" => Some(TokenKind::Nil),
            b"not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            b"goto" => Some(TokenKind::Goto),
            b"then" => Some(TokenKind::Then),
            b"true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            b"break" => Some(TokenKind::Break),
            b"false" => Some(TokenKind::False),
            b"local" => Some(TokenKind::Local),
            b"until" => Some(TokenKind::Until),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            b"elseif" => Some(TokenKind::ElseIf),
            b"repeat" => Some(TokenKind::Repeat),
            b"return" => Some(TokenKind::Return),
            _ => None,
        },
        8 => match text {
            b"function" => Some(TokenKind::Function),
            _ => None,
        },
        _ => None,
    }
}
