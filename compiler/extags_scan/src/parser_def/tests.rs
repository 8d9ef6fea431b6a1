use super::*;

#[test]
fn elixir_definition() {
    assert_eq!(ELIXIR.name, "Elixir");
    assert_eq!(ELIXIR.extensions, &["ex", "exs"]);
    assert_eq!(ELIXIR.kinds.len(), 6);
}

#[test]
fn matches_elixir_sources() {
    assert!(ELIXIR.matches_path(Path::new("lib/app.ex")));
    assert!(ELIXIR.matches_path(Path::new("test/app_test.exs")));
    assert!(ELIXIR.matches_path(Path::new("/abs/path/mix.exs")));
}

#[test]
fn rejects_other_files() {
    assert!(!ELIXIR.matches_path(Path::new("lib/app.erl")));
    assert!(!ELIXIR.matches_path(Path::new("lib/app.EX")));
    assert!(!ELIXIR.matches_path(Path::new("Makefile")));
    assert!(!ELIXIR.matches_path(Path::new("lib/.ex")));
    assert!(!ELIXIR.matches_path(Path::new("template.html.eex")));
}

#[test]
fn name_match_ignores_case() {
    assert!(ELIXIR.is_named("elixir"));
    assert!(ELIXIR.is_named("ELIXIR"));
    assert!(!ELIXIR.is_named("erlang"));
}
