//! Token stream rendering.

use std::io::{self, Write};

use lua_lexer::{LexWarning, Token};

use crate::error::CliError;

/// One line per token: `kind "text" @ span`.
pub(crate) fn write_text(out: &mut impl Write, name: &str, tokens: &[Token]) -> io::Result<()> {
    writeln!(out, "Tokens for '{}' ({} tokens):", name, tokens.len())?;
    for tok in tokens {
        match tok.text() {
            Some(text) => writeln!(out, "  {} {:?} @ {}", tok.kind, text, tok.span)?,
            None => writeln!(out, "  {} @ {}", tok.kind, tok.span)?,
        }
    }
    Ok(())
}

/// JSON array of `{ "type", "value" }` objects.
pub(crate) fn write_json(out: &mut impl Write, tokens: &[Token]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_warnings(
    out: &mut impl Write,
    name: &str,
    warnings: &[LexWarning],
) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "warning: {name}:{warning}")?;
    }
    Ok(())
}
