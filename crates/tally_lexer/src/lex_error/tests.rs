use pretty_assertions::assert_eq;

use super::{ErrorReport, LexError, LexErrorKind, LexFailure};

#[test]
fn kind_messages() {
    assert_eq!(
        LexErrorKind::UnterminatedHexLiteral { marker: 'x' }.to_string(),
        "expected a number after 'x'"
    );
    assert_eq!(
        LexErrorKind::UnterminatedHexLiteral { marker: 'X' }.to_string(),
        "expected a number after 'X'"
    );
    assert_eq!(
        LexErrorKind::UnterminatedFloatLiteral.to_string(),
        "expected a number after the decimal point"
    );
    assert_eq!(
        LexErrorKind::UnterminatedExponent.to_string(),
        "expected a number after the exponent sign"
    );
    assert_eq!(
        LexErrorKind::InvalidCharacter { ch: '@' }.to_string(),
        "invalid character '@'"
    );
}

#[test]
fn invalid_character_escapes_unprintables() {
    assert_eq!(
        LexErrorKind::InvalidCharacter { ch: '\0' }.to_string(),
        "invalid character '\\u{0}'"
    );
}

#[test]
fn factories_set_kind_and_position() {
    let e = LexError::unterminated_hex(2, 'X');
    assert_eq!(e.pos, 2);
    assert_eq!(e.kind, LexErrorKind::UnterminatedHexLiteral { marker: 'X' });

    assert_eq!(
        LexError::unterminated_float(5).kind,
        LexErrorKind::UnterminatedFloatLiteral
    );
    assert_eq!(
        LexError::unterminated_exponent(7).kind,
        LexErrorKind::UnterminatedExponent
    );
    assert_eq!(
        LexError::invalid_character(0, '#').kind,
        LexErrorKind::InvalidCharacter { ch: '#' }
    );
}

#[test]
fn to_diagnostic_carries_message_and_position() {
    let d = LexError::unterminated_float(2).to_diagnostic();
    assert_eq!(d.message, "expected a number after the decimal point");
    assert_eq!(d.pos, 2);
}

#[test]
fn report_renders_every_error_with_snippets() {
    let report = ErrorReport::new(
        "1. 0x",
        vec![
            LexError::unterminated_float(2),
            LexError::unterminated_hex(5, 'x'),
        ],
    );
    assert_eq!(
        report.to_string(),
        "expected a number after the decimal point\n1. 0x\n  ^\n\n\
         expected a number after 'x'\n1. 0x\n     ^"
    );
    assert_eq!(report.errors().len(), 2);
    assert_eq!(report.source(), "1. 0x");
}

#[test]
fn missing_input_message() {
    assert_eq!(
        LexFailure::MissingInput.to_string(),
        "no input bound; call reset() with a source before run()"
    );
}

#[test]
fn failure_displays_the_report() {
    let failure = LexFailure::Errors(ErrorReport::new(
        "@",
        vec![LexError::invalid_character(0, '@')],
    ));
    assert_eq!(failure.to_string(), "invalid character '@'\n@\n^");
}
