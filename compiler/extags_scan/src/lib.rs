//! Elixir definition scanner.
//!
//! Finds `def`, `defp`, `defmacro`, `defmacrop`, `defrecord`, `defmodule`,
//! `defprotocol` and `defimpl` directives at the start of source lines and
//! turns them into [`Tag`] records. There is no grammar and no AST: each line
//! is classified by its first non-blank byte, the leading identifier is
//! looked up in a fixed keyword table, and the identifier after it becomes
//! the tag name.
//!
//! # Architecture
//!
//! - [`kind`]: the closed set of tag kinds and the enabled-kind set.
//! - [`tag`]: tag records and the [`TagSink`] output seam.
//! - [`config`]: per-scan policy ([`ScanConfig`]).
//! - [`directive`]: the keyword table.
//! - `dispatch`: the per-line state machine.
//! - [`scanner`]: the file-scan driver that owns module scope.
//! - [`parser_def`]: registration metadata for a host tool.
//!
//! Scanning never fails. Malformed input degrades to fewer tags.
//!
//! # Tracing
//!
//! Ignored directives and emitted tags are logged at `trace` level under the
//! `extags_scan` target.

pub mod config;
mod dispatch;
pub mod directive;
pub mod kind;
pub mod parser_def;
pub mod scanner;
pub mod tag;

pub use config::ScanConfig;
pub use directive::Directive;
pub use extags_lexer_core::IdentClass;
pub use kind::{KindSet, KindSpecError, TagKind};
pub use parser_def::{ParserDefinition, ELIXIR};
pub use scanner::{scan_to_vec, ScanContext, TagScanner};
pub use tag::{Scope, ScopeLabel, Tag, TagSink};
