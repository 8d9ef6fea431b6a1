//! Registration metadata a host tool needs to route files to this scanner.

use std::path::Path;

use crate::TagKind;

/// Name, file extensions and kind table of a tag parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserDefinition {
    pub name: &'static str,
    /// Extensions without the leading dot, matched case-sensitively.
    pub extensions: &'static [&'static str],
    pub kinds: &'static [TagKind],
}

/// The Elixir parser.
pub const ELIXIR: ParserDefinition = ParserDefinition {
    name: "Elixir",
    extensions: &["ex", "exs"],
    kinds: &TagKind::ALL,
};

impl ParserDefinition {
    /// Returns `true` if `ext` is one of this parser's extensions.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.contains(&ext)
    }

    /// Returns `true` if the file at `path` should be scanned by this parser.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.matches_extension(e))
    }

    /// Case-insensitive parser name comparison, as used for `--kinds-<lang>`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests;
