use super::*;

#[test]
fn whitespace_class() {
    for b in [b' ', b'\t', b'\r', b'\n'] {
        assert!(is_whitespace(b), "{b:?} should be whitespace");
    }
    assert!(!is_whitespace(b'a'));
    assert!(!is_whitespace(0));
}

#[test]
fn digit_class() {
    for b in b'0'..=b'9' {
        assert!(is_digit(b));
    }
    assert!(!is_digit(b'a'));
    assert!(!is_digit(b'/')); // one below '0'
    assert!(!is_digit(b':')); // one above '9'
    assert!(!is_digit(0));
}

#[test]
fn ident_start_class() {
    assert!(is_ident_start(b'a'));
    assert!(is_ident_start(b'Z'));
    assert!(is_ident_start(b'_'));
    assert!(!is_ident_start(b'0'));
    assert!(!is_ident_start(b'('));
    assert!(!is_ident_start(0));
}

#[test]
fn ident_continue_includes_digits() {
    assert!(is_ident_continue(b'x'));
    assert!(is_ident_continue(b'7'));
    assert!(is_ident_continue(b'_'));
    assert!(!is_ident_continue(b'.'));
    assert!(!is_ident_continue(0));
}

#[test]
fn hex_digit_class() {
    for b in [b'0', b'9', b'a', b'f', b'A', b'F'] {
        assert!(is_hex_digit(b));
    }
    for b in [b'g', b'G', b'x', 0] {
        assert!(!is_hex_digit(b));
    }
}

#[test]
fn two_element_classes() {
    assert!(is_sign(b'+') && is_sign(b'-'));
    assert!(!is_sign(b'*'));

    assert!(is_exponent_marker(b'e') && is_exponent_marker(b'E'));
    assert!(!is_exponent_marker(b'f'));

    assert!(is_hex_marker(b'x') && is_hex_marker(b'X'));
    assert!(!is_hex_marker(b'y'));

    assert!(is_paren(b'(') && is_paren(b')'));
    assert!(!is_paren(b'['));
}

#[test]
fn number_start_on_digit() {
    assert!(is_number_start(b'5', b'x'));
    assert!(is_number_start(b'0', 0));
}

#[test]
fn number_start_on_dot_needs_digit_lookahead() {
    assert!(is_number_start(b'.', b'5'));
    assert!(!is_number_start(b'.', b' '));
    assert!(!is_number_start(b'.', 0));
}

#[test]
fn tables_agree_with_std_ascii_classes() {
    // The table-backed classes are exactly the ASCII ranges they claim.
    for b in 0u8..=255 {
        assert_eq!(is_digit(b), b.is_ascii_digit(), "digit mismatch at {b}");
        assert_eq!(
            is_hex_digit(b),
            b.is_ascii_hexdigit(),
            "hex mismatch at {b}"
        );
        assert_eq!(
            is_ident_continue(b),
            b.is_ascii_alphanumeric() || b == b'_',
            "ident-continue mismatch at {b}"
        );
    }
}
