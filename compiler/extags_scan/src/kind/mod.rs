//! Tag kinds and the set of kinds enabled for output.
//!
//! Each [`TagKind`] carries its one-letter code, display name, description
//! and default state. [`KindSet`] is the configuration side: the scanner
//! checks it before emitting and a host can edit it with ctags-style kind
//! specs such as `+p-l`, `fm` or `{function}`.

use std::fmt;

/// Category of an emitted definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    Macro,
    Function,
    Module,
    Record,
    Protocol,
    Impl,
}

impl TagKind {
    /// Every kind, in kind-table order.
    pub const ALL: [TagKind; 6] = [
        TagKind::Macro,
        TagKind::Function,
        TagKind::Module,
        TagKind::Record,
        TagKind::Protocol,
        TagKind::Impl,
    ];

    /// One-letter code used in tag files and kind specs.
    pub const fn code(self) -> char {
        match self {
            TagKind::Macro => 'd',
            TagKind::Function => 'f',
            TagKind::Module => 'm',
            TagKind::Record => 'r',
            TagKind::Protocol => 'p',
            TagKind::Impl => 'l',
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::Macro => "macro",
            TagKind::Function => "function",
            TagKind::Module => "module",
            TagKind::Record => "record",
            TagKind::Protocol => "protocol",
            TagKind::Impl => "impl",
        }
    }

    /// Human-readable description for kind listings.
    pub const fn description(self) -> &'static str {
        match self {
            TagKind::Macro => "macro definitions",
            TagKind::Function => "functions",
            TagKind::Module => "modules",
            TagKind::Record => "record definitions",
            TagKind::Protocol => "protocol definitions",
            TagKind::Impl => "protocol implementations",
        }
    }

    /// Whether the kind is emitted when no kind spec says otherwise.
    pub const fn enabled_by_default(self) -> bool {
        match self {
            TagKind::Macro
            | TagKind::Function
            | TagKind::Module
            | TagKind::Record
            | TagKind::Protocol
            | TagKind::Impl => true,
        }
    }

    /// Kinds only produced when extended directives are turned on.
    pub const fn is_extended(self) -> bool {
        matches!(self, TagKind::Protocol | TagKind::Impl)
    }

    /// The single-bit [`KindSet`] for this kind.
    pub const fn flag(self) -> KindSet {
        match self {
            TagKind::Macro => KindSet::MACRO,
            TagKind::Function => KindSet::FUNCTION,
            TagKind::Module => KindSet::MODULE,
            TagKind::Record => KindSet::RECORD,
            TagKind::Protocol => KindSet::PROTOCOL,
            TagKind::Impl => KindSet::IMPL,
        }
    }

    /// Look a kind up by its one-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Look a kind up by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of kinds enabled for output.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        const MACRO = 1 << 0;
        const FUNCTION = 1 << 1;
        const MODULE = 1 << 2;
        const RECORD = 1 << 3;
        const PROTOCOL = 1 << 4;
        const IMPL = 1 << 5;
    }
}

impl Default for KindSet {
    fn default() -> Self {
        TagKind::ALL
            .into_iter()
            .filter(|k| k.enabled_by_default())
            .fold(KindSet::empty(), |set, k| set | k.flag())
    }
}

/// Error from [`KindSet::apply_spec`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KindSpecError {
    #[error("unknown kind letter '{0}'")]
    UnknownKind(char),
    #[error("unknown kind name '{{{0}}}'")]
    UnknownKindName(String),
    #[error("unterminated kind name '{{{0}'")]
    UnterminatedName(String),
}

impl KindSet {
    /// Returns `true` if `kind` is enabled.
    #[inline]
    pub fn is_enabled(self, kind: TagKind) -> bool {
        self.contains(kind.flag())
    }

    /// Enable `kind`.
    pub fn enable(&mut self, kind: TagKind) {
        self.insert(kind.flag());
    }

    /// Disable `kind`.
    pub fn disable(&mut self, kind: TagKind) {
        self.remove(kind.flag());
    }

    /// Enabled kinds in kind-table order.
    pub fn kinds(self) -> impl Iterator<Item = TagKind> {
        TagKind::ALL.into_iter().filter(move |k| self.is_enabled(*k))
    }

    /// Apply a ctags-style kind spec.
    ///
    /// A spec that does not start with `+` or `-` replaces the set: it is
    /// cleared first and the listed kinds are enabled. `+` and `-` switch
    /// between enabling and disabling the kinds that follow. `*` stands for
    /// every kind. A kind may be named by letter (`f`) or by name in braces
    /// (`{function}`).
    ///
    /// The set is left unchanged if the spec contains an error.
    pub fn apply_spec(&mut self, spec: &str) -> Result<(), KindSpecError> {
        let mut next = if spec.starts_with(['+', '-']) {
            *self
        } else {
            KindSet::empty()
        };
        let mut enable = true;

        let mut chars = spec.chars();
        while let Some(c) = chars.next() {
            let flags = match c {
                '+' => {
                    enable = true;
                    continue;
                }
                '-' => {
                    enable = false;
                    continue;
                }
                '*' => KindSet::all(),
                '{' => {
                    let rest = chars.as_str();
                    let Some(end) = rest.find('}') else {
                        return Err(KindSpecError::UnterminatedName(rest.to_string()));
                    };
                    let name = &rest[..end];
                    let kind = TagKind::from_name(name)
                        .ok_or_else(|| KindSpecError::UnknownKindName(name.to_string()))?;
                    chars = rest[end + 1..].chars();
                    kind.flag()
                }
                c => TagKind::from_code(c)
                    .ok_or(KindSpecError::UnknownKind(c))?
                    .flag(),
            };
            next.set(flags, enable);
        }

        *self = next;
        Ok(())
    }
}
