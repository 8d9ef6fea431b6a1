//! Per-scan configuration.
//!
//! Two historical flavours of the scanner differ only in policy: which
//! punctuation belongs to identifiers, whether `defprotocol`/`defimpl` are
//! recognized, and whether function tags are attributed to the current
//! module. [`ScanConfig`] makes each of these a setting instead of a
//! separate code path.

use extags_lexer_core::IdentClass;

use crate::{KindSet, TagKind};

/// Scanning policy for one or more files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Character class for every identifier run.
    pub ident_class: IdentClass,
    /// Recognize `defprotocol` and `defimpl`.
    pub extended_kinds: bool,
    /// Attach `module:<name>` scope to function tags.
    pub scope_functions: bool,
    /// Only emit function tags whose name starts with a letter.
    ///
    /// This drops underscore-prefixed definitions such as `def __struct__`
    /// and `defp _do_walk`. Turn it off (or use [`ScanConfig::legacy`]) to
    /// tag them.
    pub require_ident_start: bool,
    /// Kinds enabled for output.
    pub kinds: KindSet,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            ident_class: IdentClass::Punctuated,
            extended_kinds: true,
            scope_functions: true,
            require_ident_start: true,
            kinds: KindSet::default(),
        }
    }
}

impl ScanConfig {
    /// The reduced flavour: dot-qualified identifiers, no protocol or impl
    /// directives, unscoped functions.
    pub fn legacy() -> Self {
        ScanConfig {
            ident_class: IdentClass::Dotted,
            extended_kinds: false,
            scope_functions: false,
            require_ident_start: false,
            kinds: KindSet::default(),
        }
    }

    #[must_use]
    pub fn with_ident_class(mut self, ident_class: IdentClass) -> Self {
        self.ident_class = ident_class;
        self
    }

    #[must_use]
    pub fn with_extended_kinds(mut self, extended_kinds: bool) -> Self {
        self.extended_kinds = extended_kinds;
        self
    }

    #[must_use]
    pub fn with_scope_functions(mut self, scope_functions: bool) -> Self {
        self.scope_functions = scope_functions;
        self
    }

    #[must_use]
    pub fn with_require_ident_start(mut self, require_ident_start: bool) -> Self {
        self.require_ident_start = require_ident_start;
        self
    }

    #[must_use]
    pub fn with_kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    /// Returns `true` if tags of `kind` should be emitted.
    #[inline]
    pub fn is_enabled(&self, kind: TagKind) -> bool {
        self.kinds.is_enabled(kind)
    }
}

#[cfg(test)]
mod tests;
