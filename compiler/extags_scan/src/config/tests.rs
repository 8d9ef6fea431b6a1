use super::*;

#[test]
fn default_is_the_full_flavour() {
    let config = ScanConfig::default();
    assert_eq!(config.ident_class, IdentClass::Punctuated);
    assert!(config.extended_kinds);
    assert!(config.scope_functions);
    assert!(config.require_ident_start);
    assert_eq!(config.kinds, KindSet::all());
}

#[test]
fn legacy_is_the_reduced_flavour() {
    let config = ScanConfig::legacy();
    assert_eq!(config.ident_class, IdentClass::Dotted);
    assert!(!config.extended_kinds);
    assert!(!config.scope_functions);
    assert!(!config.require_ident_start);
}

#[test]
fn builders_override_single_fields() {
    let config = ScanConfig::default()
        .with_ident_class(IdentClass::Dotted)
        .with_scope_functions(false)
        .with_kinds(KindSet::MODULE);

    assert_eq!(config.ident_class, IdentClass::Dotted);
    assert!(!config.scope_functions);
    assert!(config.extended_kinds);
    assert!(config.is_enabled(TagKind::Module));
    assert!(!config.is_enabled(TagKind::Function));
}

#[test]
fn extended_and_start_gate_toggles() {
    let config = ScanConfig::default()
        .with_extended_kinds(false)
        .with_require_ident_start(false);
    assert!(!config.extended_kinds);
    assert!(!config.require_ident_start);
}
