//! The directive keyword table.
//!
//! Every recognized directive starts with `d`, which lets the line scanner
//! reject most lines after looking at a single byte. Matching is exact and
//! case-sensitive. Anything else that starts with `d` (or any other leading
//! identifier such as `import` or `require`) is not a directive.

use crate::TagKind;

/// Leading byte shared by every directive keyword.
pub const DIRECTIVE_LEAD: u8 = b'd';

/// A definition directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    Def,
    Defp,
    Defmacro,
    Defmacrop,
    Defrecord,
    Defmodule,
    Defprotocol,
    Defimpl,
}

impl Directive {
    /// Look up a keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "def" => Directive::Def,
            "defp" => Directive::Defp,
            "defmacro" => Directive::Defmacro,
            "defmacrop" => Directive::Defmacrop,
            "defrecord" => Directive::Defrecord,
            "defmodule" => Directive::Defmodule,
            "defprotocol" => Directive::Defprotocol,
            "defimpl" => Directive::Defimpl,
            _ => return None,
        })
    }

    /// Source keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            Directive::Def => "def",
            Directive::Defp => "defp",
            Directive::Defmacro => "defmacro",
            Directive::Defmacrop => "defmacrop",
            Directive::Defrecord => "defrecord",
            Directive::Defmodule => "defmodule",
            Directive::Defprotocol => "defprotocol",
            Directive::Defimpl => "defimpl",
        }
    }

    /// Kind of the tag the directive emits.
    pub const fn kind(self) -> TagKind {
        match self {
            Directive::Def | Directive::Defp => TagKind::Function,
            Directive::Defmacro | Directive::Defmacrop => TagKind::Macro,
            Directive::Defrecord => TagKind::Record,
            Directive::Defmodule => TagKind::Module,
            Directive::Defprotocol => TagKind::Protocol,
            Directive::Defimpl => TagKind::Impl,
        }
    }

    /// Function directives are the only ones attributed to the current module.
    pub const fn is_scoped(self) -> bool {
        matches!(self, Directive::Def | Directive::Defp)
    }

    /// `defmodule` replaces the current module.
    pub const fn sets_module(self) -> bool {
        matches!(self, Directive::Defmodule)
    }
}
