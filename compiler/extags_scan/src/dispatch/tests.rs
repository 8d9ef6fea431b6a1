use super::*;
use crate::{IdentClass, KindSet};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run(ctx: &mut ScanContext, config: &ScanConfig, line: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    scan_line(ctx, config, 1, line, &mut tags);
    tags
}

fn run_fresh(config: &ScanConfig, line: &str) -> Vec<Tag> {
    run(&mut ScanContext::new(), config, line)
}

// === Rejection filters ===

#[test]
fn comment_line_emits_nothing() {
    let config = ScanConfig::default();
    assert!(run_fresh(&config, "# def foo").is_empty());
    assert!(run_fresh(&config, "   # defmodule Foo").is_empty());
}

#[test]
fn attribute_line_emits_nothing() {
    let config = ScanConfig::default();
    assert!(run_fresh(&config, "@doc \"def foo\"").is_empty());
    assert!(run_fresh(&config, "\t@moduledoc false").is_empty());
}

#[test]
fn line_not_starting_with_d_is_skipped() {
    let config = ScanConfig::default();
    assert!(run_fresh(&config, "  use GenServer").is_empty());
    assert!(run_fresh(&config, "x = def foo").is_empty());
    assert!(run_fresh(&config, "").is_empty());
}

#[test]
fn unknown_d_directive_is_ignored() {
    let config = ScanConfig::default();
    let mut ctx = ScanContext::new();
    assert!(run(&mut ctx, &config, "destroy foo").is_empty());
    assert!(run(&mut ctx, &config, "defstruct [:a, :b]").is_empty());
    assert!(run(&mut ctx, &config, "defdelegate size(x), to: Enum").is_empty());
    assert_eq!(ctx.module(), None);
}

// === Directive table ===

#[test]
fn defmodule_emits_module_and_sets_scope() {
    let config = ScanConfig::default();
    let mut ctx = ScanContext::new();
    let tags = run(&mut ctx, &config, "defmodule Foo do");
    assert_eq!(tags, vec![Tag::new("Foo", TagKind::Module, 1)]);
    assert_eq!(ctx.module(), Some("Foo"));
}

#[test]
fn def_and_defp_are_scoped_functions() {
    let config = ScanConfig::default();
    let mut ctx = ScanContext::new();
    run(&mut ctx, &config, "defmodule Foo do");

    assert_eq!(
        run(&mut ctx, &config, "  def bar(x), do: x"),
        vec![Tag::new("bar", TagKind::Function, 1).in_module("Foo")]
    );
    assert_eq!(
        run(&mut ctx, &config, "  defp baz do"),
        vec![Tag::new("baz", TagKind::Function, 1).in_module("Foo")]
    );
}

#[test]
fn macros_are_unscoped_even_inside_module() {
    let config = ScanConfig::default();
    let mut ctx = ScanContext::new();
    run(&mut ctx, &config, "defmodule Foo do");

    assert_eq!(
        run(&mut ctx, &config, "defmacro baz(ast)"),
        vec![Tag::new("baz", TagKind::Macro, 1)]
    );
    assert_eq!(
        run(&mut ctx, &config, "defmacrop quux"),
        vec![Tag::new("quux", TagKind::Macro, 1)]
    );
}

#[test]
fn record_protocol_and_impl() {
    let config = ScanConfig::default();
    let mut ctx = ScanContext::new();
    run(&mut ctx, &config, "defmodule Foo do");

    assert_eq!(
        run(&mut ctx, &config, "defrecord User, name: nil"),
        vec![Tag::new("User", TagKind::Record, 1)]
    );
    assert_eq!(
        run(&mut ctx, &config, "defprotocol Size do"),
        vec![Tag::new("Size", TagKind::Protocol, 1)]
    );
    assert_eq!(
        run(&mut ctx, &config, "defimpl Size, for: BitString do"),
        vec![Tag::new("Size", TagKind::Impl, 1)]
    );
}

#[test]
fn protocol_and_impl_are_ignored_without_extended_kinds() {
    let config = ScanConfig::default().with_extended_kinds(false);
    assert!(run_fresh(&config, "defprotocol Size do").is_empty());
    assert!(run_fresh(&config, "defimpl Size, for: List do").is_empty());
}

#[test]
fn unscoped_functions_when_scoping_is_off() {
    let config = ScanConfig::default().with_scope_functions(false);
    let mut ctx = ScanContext::new();
    run(&mut ctx, &config, "defmodule Foo do");
    assert_eq!(
        run(&mut ctx, &config, "def bar"),
        vec![Tag::new("bar", TagKind::Function, 1)]
    );
    // The module is still tracked.
    assert_eq!(ctx.module(), Some("Foo"));
}

// === Empty names ===

#[test]
fn keyword_without_name_emits_nothing() {
    let config = ScanConfig::default();
    assert!(run_fresh(&config, "def").is_empty());
    assert!(run_fresh(&config, "def   ").is_empty());
    assert!(run_fresh(&config, "def (a, b)").is_empty());
    assert!(run_fresh(&config, "defmacro :\"quoted\"").is_empty());
}

#[test]
fn defmodule_without_name_keeps_previous_module() {
    let config = ScanConfig::default();
    let mut ctx = ScanContext::new();
    run(&mut ctx, &config, "defmodule Foo do");
    assert!(run(&mut ctx, &config, "defmodule").is_empty());
    assert!(run(&mut ctx, &config, "defmodule (").is_empty());
    assert_eq!(ctx.module(), Some("Foo"));
}

// === Identifier start gate ===

#[test]
fn function_names_must_start_with_a_letter_by_default() {
    let config = ScanConfig::default();
    assert!(run_fresh(&config, "defp _helper(x)").is_empty());
    assert_eq!(
        run_fresh(&config, "def unquote(name)(args)"),
        vec![Tag::new("unquote", TagKind::Function, 1)]
    );
}

#[test]
fn start_gate_can_be_disabled() {
    let config = ScanConfig::default().with_require_ident_start(false);
    assert_eq!(
        run_fresh(&config, "defp _helper(x)"),
        vec![Tag::new("_helper", TagKind::Function, 1)]
    );
}

#[test]
fn start_gate_does_not_apply_to_macros() {
    let config = ScanConfig::default();
    assert_eq!(
        run_fresh(&config, "defmacro __using__(opts)"),
        vec![Tag::new("__using__", TagKind::Macro, 1)]
    );
}

// === Identifier classes ===

#[test]
fn punctuated_class_keeps_predicate_and_bang_names() {
    let config = ScanConfig::default().with_scope_functions(false);
    assert_eq!(
        run_fresh(&config, "def valid?(x)"),
        vec![Tag::new("valid?", TagKind::Function, 1)]
    );
    assert_eq!(
        run_fresh(&config, "def save!(x)"),
        vec![Tag::new("save!", TagKind::Function, 1)]
    );
}

#[test]
fn dotted_class_keeps_qualified_module_names() {
    let config = ScanConfig::legacy();
    let mut ctx = ScanContext::new();
    assert_eq!(
        run(&mut ctx, &config, "defmodule Foo.Bar do"),
        vec![Tag::new("Foo.Bar", TagKind::Module, 1)]
    );
    assert_eq!(ctx.module(), Some("Foo.Bar"));
}

#[test]
fn punctuated_class_stops_module_name_at_dot() {
    let config = ScanConfig::default().with_ident_class(IdentClass::Punctuated);
    let mut ctx = ScanContext::new();
    assert_eq!(
        run(&mut ctx, &config, "defmodule Foo.Bar do"),
        vec![Tag::new("Foo", TagKind::Module, 1)]
    );
}

// === Kind configuration ===

#[test]
fn disabled_kind_is_suppressed() {
    let config = ScanConfig::default().with_kinds(KindSet::all() - KindSet::FUNCTION);
    assert!(run_fresh(&config, "def bar").is_empty());
    assert_eq!(
        run_fresh(&config, "defmacro baz"),
        vec![Tag::new("baz", TagKind::Macro, 1)]
    );
}

#[test]
fn disabled_module_kind_still_sets_scope() {
    let config = ScanConfig::default().with_kinds(KindSet::FUNCTION);
    let mut ctx = ScanContext::new();
    assert!(run(&mut ctx, &config, "defmodule Foo do").is_empty());
    assert_eq!(
        run(&mut ctx, &config, "def bar"),
        vec![Tag::new("bar", TagKind::Function, 1).in_module("Foo")]
    );
}

// === Property Tests ===

proptest! {
    #[test]
    fn comment_and_attribute_lines_never_emit(
        indent in "[ \t]{0,4}",
        lead in prop_oneof![Just('#'), Just('@')],
        body in "[ -~]{0,30}",
    ) {
        let config = ScanConfig::default();
        let mut ctx = ScanContext::new();
        ctx.module.push_str("Before");
        let line = format!("{indent}{lead}{body}");
        prop_assert!(run(&mut ctx, &config, &line).is_empty());
        prop_assert_eq!(ctx.module(), Some("Before"));
    }

    #[test]
    fn emitted_names_are_never_empty(line in "[ -~]{0,30}") {
        let config = ScanConfig::default();
        for tag in run_fresh(&config, &line) {
            prop_assert!(!tag.name.is_empty());
        }
    }

    #[test]
    fn defmodule_name_becomes_scope(name in "[A-Z][A-Za-z0-9_]{0,12}") {
        let config = ScanConfig::default();
        let mut ctx = ScanContext::new();
        let tags = run(&mut ctx, &config, &format!("defmodule {name}"));
        prop_assert_eq!(tags, vec![Tag::new(name.clone(), TagKind::Module, 1)]);
        prop_assert_eq!(ctx.module(), Some(name.as_str()));
    }
}
