//! Lexing small but complete Lua programs.

#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use lua_lexer::{token_kind_name, tokenize, TokenKind};
use pretty_assertions::assert_eq;

/// Helper: `kind` or `kind:text` for every non-whitespace token.
fn summary(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| match t.text {
            Some(text) => format!("{}:{text}", token_kind_name(t.kind)),
            None => token_kind_name(t.kind).to_owned(),
        })
        .collect()
}

#[test]
fn function_with_loop() {
    let source = "\
-- sum a list
local function sum(t)
  local acc = 0
  for i = 1, #t do
    acc = acc + t[i]
  end
  return acc
end
";
    assert_eq!(
        summary(source),
        vec![
            "short_comment:-- sum a list",
            "local",
            "function",
            "identifier:sum",
            "left_paren:(",
            "identifier:t",
            "right_paren:)",
            "local",
            "identifier:acc",
            "assign:=",
            "number:0",
            "for",
            "identifier:i",
            "assign:=",
            "number:1",
            "comma:,",
            "len:#",
            "identifier:t",
            "do",
            "identifier:acc",
            "assign:=",
            "identifier:acc",
            "add:+",
            "identifier:t",
            "left_bracket:[",
            "identifier:i",
            "right_bracket:]",
            "end",
            "return",
            "identifier:acc",
            "end",
            "end_of_file",
        ]
    );
}

#[test]
fn table_constructor_and_field_access() {
    let source = "local cfg = { name = 'demo', size = 1.5e3 }\nprint(cfg.name .. \"!\")";
    assert_eq!(
        summary(source),
        vec![
            "local",
            "identifier:cfg",
            "assign:=",
            "left_curly:{",
            "identifier:name",
            "assign:=",
            "string_literal:demo",
            "comma:,",
            "identifier:size",
            "assign:=",
            "number:1.5e3",
            "right_curly:}",
            "identifier:print",
            "left_paren:(",
            "identifier:cfg",
            "identifier:[name]",
            "concat:..",
            "string_literal:!",
            "right_paren:)",
            "end_of_file",
        ]
    );
}

#[test]
fn goto_labels_and_varargs() {
    let source = "function f(...) ::top:: if select('#', ...) ~= 0 then goto top end end";
    assert_eq!(
        summary(source),
        vec![
            "function",
            "identifier:f",
            "left_paren:(",
            "dots:...",
            "right_paren:)",
            "double_colon:::",
            "identifier:top",
            "double_colon:::",
            "if",
            "identifier:select",
            "left_paren:(",
            "string_literal:#",
            "comma:,",
            "dots:...",
            "right_paren:)",
            "not_eq:~=",
            "number:0",
            "then",
            "goto",
            "identifier:top",
            "end",
            "end",
            "end_of_file",
        ]
    );
}

#[test]
fn long_comment_and_long_string() {
    let source = "--[[\nheader\n]]\nlocal s = [[raw\\n]]";
    assert_eq!(
        summary(source),
        vec![
            "long_comment:--[[\nheader\n]]",
            "local",
            "identifier:s",
            "assign:=",
            "string_literal:raw\\n",
            "end_of_file",
        ]
    );
}

#[cfg(feature = "serde")]
#[test]
fn json_shape_matches_binding_tables() {
    let out = tokenize("x = nil").unwrap();
    let json = serde_json::to_string(&out.tokens).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"identifier","value":"x"},{"type":"whitespace","value":" "},{"type":"assign","value":"="},{"type":"whitespace","value":" "},{"type":"nil","value":null},{"type":"end_of_file","value":null}]"#
    );
}
