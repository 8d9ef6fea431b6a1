//! Per-line directive dispatch.
//!
//! A line goes through a fixed sequence of cheap checks:
//!
//! 1. skip leading whitespace;
//! 2. drop `#` comment lines and lines starting with `@` (module attributes
//!    and heredoc bodies that begin in column one);
//! 3. drop anything that does not start with [`DIRECTIVE_LEAD`];
//! 4. scan the leading identifier and look it up in the keyword table;
//! 5. skip whitespace, scan the name identifier and emit.
//!
//! Nothing after the name is inspected. Arguments, guards, `do` blocks and
//! parentheses are left alone.

use extags_lexer_core::{is_ident_start, LineCursor};

use crate::directive::DIRECTIVE_LEAD;
use crate::{Directive, ScanConfig, ScanContext, Tag, TagKind, TagSink};

/// Apply directive dispatch to one line.
pub(crate) fn scan_line<S: TagSink + ?Sized>(
    ctx: &mut ScanContext,
    config: &ScanConfig,
    line_no: u32,
    line: &str,
    sink: &mut S,
) {
    let mut cursor = LineCursor::new(line);
    cursor.skip_whitespace();

    match cursor.current() {
        b'#' | b'@' => return,
        DIRECTIVE_LEAD => {}
        _ => return,
    }

    cursor.scan_identifier(config.ident_class, &mut ctx.directive);
    cursor.skip_whitespace();

    let Some(directive) = Directive::from_keyword(&ctx.directive)
        .filter(|d| config.extended_kinds || !d.kind().is_extended())
    else {
        tracing::trace!(line = line_no, keyword = %ctx.directive, "not a directive");
        return;
    };

    cursor.scan_identifier(config.ident_class, &mut ctx.name);

    if directive.is_scoped() {
        if config.require_ident_start && !ctx.name.bytes().next().is_some_and(is_ident_start) {
            tracing::trace!(
                line = line_no,
                directive = directive.keyword(),
                ident = %ctx.name,
                "function name does not start with a letter"
            );
            return;
        }
        let module = if config.scope_functions {
            ctx.module()
        } else {
            None
        };
        emit_tag(config, sink, &ctx.name, directive.kind(), module, line_no);
    } else {
        emit_tag(config, sink, &ctx.name, directive.kind(), None, line_no);
    }

    if directive.sets_module() && !ctx.name.is_empty() {
        ctx.module.clone_from(&ctx.name);
    }
}

/// Emit one tag unless its kind is disabled or the name is empty.
///
/// Scope is attached only for a non-empty `module`.
fn emit_tag<S: TagSink + ?Sized>(
    config: &ScanConfig,
    sink: &mut S,
    name: &str,
    kind: TagKind,
    module: Option<&str>,
    line: u32,
) {
    if name.is_empty() || !config.is_enabled(kind) {
        return;
    }

    let mut tag = Tag::new(name, kind, line);
    if let Some(module) = module.filter(|m| !m.is_empty()) {
        tag = tag.in_module(module);
    }

    tracing::trace!(line, %kind, ident = name, module = tag.module(), "tag");
    sink.emit(tag);
}

#[cfg(test)]
mod tests;
