//! Line-level lexical primitives for Elixir tag scanning.
//!
//! This crate knows nothing about tags or directives. It provides:
//!
//! - [`IdentClass`]: the identifier character classes a scan can be
//!   configured with (`valid?`/`save!` style or `Foo.Bar` style).
//! - [`LineCursor`]: a forward-only cursor over one line with whitespace
//!   skipping and identifier scanning.
//! - [`SourceLines`]: splits a whole source text into numbered lines.
//!
//! All classification is byte-based in the C locale: bytes outside ASCII
//! are never identifier characters and never whitespace.

mod cursor;
mod ident_class;
mod source_lines;

pub use cursor::{is_whitespace, LineCursor};
pub use ident_class::{is_ident_start, IdentClass};
pub use source_lines::SourceLines;
