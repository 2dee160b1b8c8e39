//! Low-level scanner for Lua source text.
//!
//! This crate turns a source string into `(RawTag, len)` pairs. It knows
//! about byte classes, brackets, strings and comments, but nothing about
//! keywords, spellings or the identifier heuristics applied on top. Those
//! live in the `lua_lexer` cooking layer.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
