use pretty_assertions::assert_eq;

use super::{render_all, Diagnostic};

#[test]
fn render_message_then_snippet() {
    let d = Diagnostic::new("invalid character '@'", 2);
    assert_eq!(d.render("1 @ 2"), "invalid character '@'\n1 @ 2\n  ^");
}

#[test]
fn render_all_joins_with_blank_line() {
    let source = "1. 0x";
    let diags = vec![
        Diagnostic::new("expected a number after the decimal point", 2),
        Diagnostic::new("expected a number after 'x'", 5),
    ];
    let text = render_all(&diags, source);
    assert_eq!(
        text,
        "expected a number after the decimal point\n1. 0x\n  ^\n\n\
         expected a number after 'x'\n1. 0x\n     ^"
    );
}

#[test]
fn render_all_of_empty_batch_is_empty() {
    assert_eq!(render_all(&[], "anything"), "");
}

#[test]
fn diagnostics_compare_by_value() {
    assert_eq!(Diagnostic::new("m", 1), Diagnostic::new("m", 1));
    assert_ne!(Diagnostic::new("m", 1), Diagnostic::new("m", 2));
}
