use super::*;

#[test]
fn alphanumerics_and_underscore_in_both_classes() {
    for class in [IdentClass::Punctuated, IdentClass::Dotted] {
        for b in [b'a', b'Z', b'0', b'9', b'_'] {
            assert!(class.contains(b), "{class:?} should contain {:?}", b as char);
        }
    }
}

#[test]
fn punctuated_accepts_bang_and_question() {
    assert!(IdentClass::Punctuated.contains(b'?'));
    assert!(IdentClass::Punctuated.contains(b'!'));
    assert!(!IdentClass::Punctuated.contains(b'.'));
}

#[test]
fn dotted_accepts_dot_only() {
    assert!(IdentClass::Dotted.contains(b'.'));
    assert!(!IdentClass::Dotted.contains(b'?'));
    assert!(!IdentClass::Dotted.contains(b'!'));
}

#[test]
fn sentinel_and_separators_are_never_identifier_bytes() {
    for class in [IdentClass::Punctuated, IdentClass::Dotted] {
        for b in [0u8, b' ', b'\t', b'(', b',', b':', b'@', b'#'] {
            assert!(!class.contains(b), "{class:?} should reject {b:#04x}");
        }
    }
}

#[test]
fn non_ascii_bytes_are_rejected() {
    // Leading byte of "é" in UTF-8.
    assert!(!IdentClass::Punctuated.contains(0xC3));
    assert!(!IdentClass::Dotted.contains(0xA9));
}

#[test]
fn ident_start_is_alphabetic_only() {
    assert!(is_ident_start(b'a'));
    assert!(is_ident_start(b'Q'));
    assert!(!is_ident_start(b'_'));
    assert!(!is_ident_start(b'1'));
    assert!(!is_ident_start(b'?'));
}

#[test]
fn name_round_trips() {
    assert_eq!(IdentClass::from_name("dotted"), Some(IdentClass::Dotted));
    assert_eq!(
        IdentClass::from_name(IdentClass::Punctuated.name()),
        Some(IdentClass::Punctuated)
    );
    assert_eq!(IdentClass::from_name("Dotted"), None);
}

#[test]
fn default_is_punctuated() {
    assert_eq!(IdentClass::default(), IdentClass::Punctuated);
}
