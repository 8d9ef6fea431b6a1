//! Tag file generator for Elixir sources.
//!
//! Wraps the [`extags_scan`] scanner with everything a command-line tool
//! needs: argument parsing, file discovery, parallel scanning, and an
//! extended-format ctags writer.
//!
//! # Tracing
//!
//! - `EXTAGS_LOG=debug`: one event per scanned file.
//! - `EXTAGS_LOG=extags_scan=trace`: every emitted tag and ignored directive.

pub mod commands;
pub mod discovery;
mod error;
pub mod options;
pub mod scan;
mod tracing_setup;
pub mod writer;

pub use commands::{generate_tags, list_kinds, list_maps, usage, TagsSummary};
pub use error::TagsError;
pub use options::{parse_args, Command, OutputTarget, TagsOptions};
pub use tracing_setup::init_tracing;
