//! Identifier character classes.
//!
//! Which punctuation counts as part of an identifier is a scanning policy,
//! not an accident of the source language. Elixir function names may end in
//! `?` or `!`, while module names are dot-qualified. A scan picks one class
//! for the whole file and applies it to every identifier run.

/// Identifier character class used for every identifier run in a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentClass {
    /// ASCII alphanumerics plus `_`, `?` and `!`.
    ///
    /// Captures predicate and bang functions (`valid?`, `save!`) as one
    /// token, but stops module names at the first dot.
    #[default]
    Punctuated,
    /// ASCII alphanumerics plus `_` and `.`.
    ///
    /// Captures qualified module names (`Foo.Bar`) as one token.
    Dotted,
}

impl IdentClass {
    /// Returns `true` if `b` may appear anywhere in an identifier of this class.
    ///
    /// The end-of-line sentinel (`0x00`) is never an identifier byte.
    #[inline]
    pub const fn contains(self, b: u8) -> bool {
        if b.is_ascii_alphanumeric() || b == b'_' {
            return true;
        }
        match self {
            IdentClass::Punctuated => matches!(b, b'?' | b'!'),
            IdentClass::Dotted => b == b'.',
        }
    }

    /// Stable lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            IdentClass::Punctuated => "punctuated",
            IdentClass::Dotted => "dotted",
        }
    }

    /// Parse a class from its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "punctuated" => Some(IdentClass::Punctuated),
            "dotted" => Some(IdentClass::Dotted),
            _ => None,
        }
    }
}

/// Returns `true` if `b` may start an identifier (ASCII alphabetic).
#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

#[cfg(test)]
mod tests;
