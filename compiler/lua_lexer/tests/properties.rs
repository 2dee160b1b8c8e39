//! Whole-input properties of `tokenize`, checked over generated sources.

#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use lua_lexer::{tokenize, LexOutput, Token, TokenKind};
use proptest::prelude::*;

const KEYWORDS: [&str; 22] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Lua-flavoured alphabet: every byte class the scanner dispatches on.
const LUA_ISH: &str = "[a-zA-Z0-9_ \t\r\n.\\-\\[\\]=\"'~<>:;,(){}+*/%^#@$]{0,80}";

fn lex(source: &str) -> LexOutput {
    tokenize(source).unwrap()
}

/// Spans are ordered and non-overlapping; any gap between them is a
/// whitespace run that starts with `\n`.
fn check_coverage(source: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    let bytes = source.as_bytes();
    let mut pos = 0usize;
    for tok in tokens {
        let range = tok.span.to_range();
        prop_assert!(range.start >= pos, "{:?} overlaps previous token", tok);
        if range.start > pos {
            let gap = &bytes[pos..range.start];
            prop_assert_eq!(gap[0], b'\n', "gap {:?} before {:?}", gap, tok);
            prop_assert!(gap.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)));
        }
        pos = range.end;
    }
    prop_assert_eq!(pos, source.len());
    Ok(())
}

proptest! {
    #[test]
    fn ends_with_exactly_one_eof(source in "\\PC{0,80}") {
        let out = lex(&source);
        let last = out.tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::EndOfFile);
        prop_assert!(last.text.is_none());
        let eofs = out.tokens.iter().filter(|t| t.kind == TokenKind::EndOfFile).count();
        prop_assert_eq!(eofs, 1);
    }

    #[test]
    fn coverage_arbitrary_text(source in "\\PC{0,80}") {
        let out = lex(&source);
        check_coverage(&source, &out.tokens)?;
    }

    #[test]
    fn coverage_lua_ish(source in LUA_ISH) {
        let out = lex(&source);
        check_coverage(&source, &out.tokens)?;
    }

    #[test]
    fn only_eof_is_empty(source in LUA_ISH) {
        for tok in lex(&source).tokens {
            prop_assert_eq!(tok.span.start == tok.span.end, tok.kind == TokenKind::EndOfFile, "{:?}", tok);
        }
    }

    #[test]
    fn whitespace_never_contains_newline(source in LUA_ISH) {
        for tok in lex(&source).tokens {
            if tok.kind == TokenKind::Whitespace {
                prop_assert!(!tok.text().unwrap().contains('\n'));
            }
        }
    }

    #[test]
    fn verbatim_kinds_reproduce_source(source in LUA_ISH) {
        for tok in lex(&source).tokens {
            let verbatim = matches!(
                tok.kind,
                TokenKind::Whitespace
                    | TokenKind::ShortComment
                    | TokenKind::LongComment
                    | TokenKind::Number
                    | TokenKind::Unidentified
                    | TokenKind::Assign
                    | TokenKind::Eq
                    | TokenKind::NotEq
                    | TokenKind::LeftBracket
                    | TokenKind::Dots
            );
            if verbatim {
                prop_assert_eq!(tok.text().unwrap(), &source[tok.span.to_range()]);
            }
        }
    }

    #[test]
    fn only_keywords_and_eof_lack_text(source in LUA_ISH) {
        for tok in lex(&source).tokens {
            let bare = tok.kind.is_keyword() || tok.kind == TokenKind::EndOfFile;
            prop_assert_eq!(tok.text.is_none(), bare, "{:?}", tok);
        }
    }

    #[test]
    fn unidentified_is_one_character(source in "\\PC{0,40}") {
        for tok in lex(&source).tokens {
            if tok.kind == TokenKind::Unidentified {
                prop_assert_eq!(tok.text().unwrap().chars().count(), 1);
            }
        }
    }
}

// === Keyword exactness ===

#[test]
fn every_keyword_standalone() {
    for word in KEYWORDS {
        let tokens = lex(word).tokens;
        assert_eq!(tokens.len(), 2, "{word}");
        assert!(tokens[0].kind.is_keyword(), "{word}");
        assert_eq!(tokens[0].kind.name(), word);
        assert_eq!(tokens[0].text, None);
    }
}

#[test]
fn near_keywords_are_identifiers() {
    for word in KEYWORDS {
        let mut upper = word.to_owned();
        upper[..1].make_ascii_uppercase();
        for variant in [upper, format!("{word}x"), format!("{word}_"), format!("{word}1")] {
            let tokens = lex(&variant).tokens;
            assert_eq!(tokens[0].kind, TokenKind::Identifier, "{variant}");
            assert_eq!(tokens[0].text(), Some(variant.as_str()));
        }
    }
}
