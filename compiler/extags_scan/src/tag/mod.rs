//! Tag records and the output seam.

use std::fmt;

use crate::TagKind;

/// Label of an enclosing scope.
///
/// Modules are the only scope the scanner attributes tags to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeLabel {
    Module,
}

impl ScopeLabel {
    pub const fn name(self) -> &'static str {
        match self {
            ScopeLabel::Module => "module",
        }
    }
}

impl fmt::Display for ScopeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enclosing-scope attribution of a tag, e.g. `module:Foo.Bar`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope {
    pub label: ScopeLabel,
    pub value: String,
}

impl Scope {
    /// Module scope named `value`.
    pub fn module(value: impl Into<String>) -> Self {
        Scope {
            label: ScopeLabel::Module,
            value: value.into(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.value)
    }
}

/// One discovered definition.
///
/// # Invariant
///
/// `name` is never empty for tags produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    pub scope: Option<Scope>,
    /// 1-based line the definition was found on.
    pub line: u32,
}

impl Tag {
    /// Unscoped tag.
    pub fn new(name: impl Into<String>, kind: TagKind, line: u32) -> Self {
        Tag {
            name: name.into(),
            kind,
            scope: None,
            line,
        }
    }

    /// Attach a module scope.
    #[must_use]
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.scope = Some(Scope::module(module));
        self
    }

    /// Name of the enclosing module, if the tag is module-scoped.
    pub fn module(&self) -> Option<&str> {
        self.scope
            .as_ref()
            .filter(|s| s.label == ScopeLabel::Module)
            .map(|s| s.value.as_str())
    }
}

/// Consumer of emitted tags.
///
/// Receives one call per tag, in discovery order.
pub trait TagSink {
    fn emit(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn emit(&mut self, tag: Tag) {
        self.push(tag);
    }
}
