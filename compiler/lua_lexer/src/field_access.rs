//! Field-access rewriting for identifiers.
//!
//! Two heuristics mark names involved in `a.b` style access, applied after
//! the raw scanner has found an identifier:
//!
//! - A name preceded (across spaces) by a single `.` is a field name and is
//!   spelled `[name]`, keyword or not.
//! - A name followed (across spaces) by a single `.` absorbs that dot and the
//!   spaces after it, so no separate `attr` token is produced.
//!
//! Only the space byte counts as a space here; tabs and newlines break the
//! association. A `.` that is part of `..` or `...` never triggers either rule.

/// `true` when the nearest non-space byte before `start` is a lone `.`.
pub(crate) fn follows_single_dot(source: &[u8], start: usize) -> bool {
    let before = &source[..start];
    match before.iter().rposition(|&b| b != b' ') {
        Some(i) => before[i] == b'.' && (i == 0 || before[i - 1] != b'.'),
        None => false,
    }
}

/// End offset after absorbing a trailing single `.` past an identifier.
///
/// `end` is the identifier's end. Returns `None` when the next non-space
/// byte is not a lone `.`, in which case nothing is absorbed, spaces
/// included. Otherwise the dot and any spaces after it are absorbed, except
/// that the last space is left alone when another `.` follows it.
pub(crate) fn absorb_trailing_dot(source: &[u8], end: usize) -> Option<usize> {
    let dot = skip_spaces(source, end);
    if source.get(dot) != Some(&b'.') || source.get(dot + 1) == Some(&b'.') {
        return None;
    }
    let mut pos = skip_spaces(source, dot + 1);
    if source.get(pos) == Some(&b'.') {
        pos -= 1;
    }
    Some(pos)
}

/// Spelling of a field name: `name` becomes `[name]`.
pub(crate) fn bracketed(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('[');
    out.push_str(name);
    out.push(']');
    out
}

fn skip_spaces(source: &[u8], from: usize) -> usize {
    from + source
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| b == b' ').count())
}

#[cfg(test)]
mod tests;
