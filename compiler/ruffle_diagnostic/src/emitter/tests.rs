use super::*;
use crate::{ColorMode, ErrorCode, TerminalEmitter};
use pretty_assertions::assert_eq;
use ruffle_ir::Span;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown type `Foo`")
        .with_label(Span::new(7, 10, 1, 8), "not declared")
}

#[test]
fn test_snippet_rendering() {
    let emitter = TerminalEmitter::new(Vec::new(), false).with_source("main.rf", "let x: Foo;");
    let text = render(emitter, &sample_diagnostic());
    assert_eq!(
        text,
        "error[E2001]: unknown type `Foo`\n  --> main.rf:1:8\n   |\n 1 | let x: Foo;\n   |        ^^^ not declared\n   |\n\n"
    );
}

#[test]
fn test_secondary_label_rendering() {
    let source = "let x: i32!Error!Error;";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("ambiguous error union chain")
        .with_label(Span::new(16, 17, 1, 17), "second `!` here")
        .with_secondary_label(Span::new(10, 11, 1, 11), "first `!` here")
        .with_help("parenthesize the error type");

    let emitter = TerminalEmitter::new(Vec::new(), false).with_source("a.rf", source);
    let text = render(emitter, &diag);
    assert!(text.contains("  --> a.rf:1:17\n"), "{text}");
    assert!(text.contains("   |                 ^ second `!` here\n"), "{text}");
    assert!(text.contains("   |           - first `!` here\n"), "{text}");
    assert!(text.contains("   = help: parenthesize the error type\n"), "{text}");
}

#[test]
fn test_without_source() {
    let text = render(TerminalEmitter::new(Vec::new(), false), &sample_diagnostic());
    assert!(text.starts_with("error[E2001]: unknown type `Foo`\n  --> 1:8\n"), "{text}");
}

#[test]
fn test_colors() {
    let colored = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false),
        &sample_diagnostic(),
    );
    assert!(colored.contains("\x1b["));

    let plain = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true),
        &sample_diagnostic(),
    );
    assert!(!plain.contains("\x1b["));
}

#[test]
fn test_color_mode_auto() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_emit_all_and_notes() {
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit_all(&[
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::note(ErrorCode::E9002).with_message("too many").with_note("raise the limit"),
    ]);
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert!(text.contains("error[E1001]: error 1"));
    assert!(text.contains("note[E9002]: too many"));
    assert!(text.contains("= note: raise the limit"));
}

#[test]
fn test_emit_summary() {
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(
        text,
        "error: aborting due to 2 previous errors; 1 warning emitted\n\
         error: aborting due to previous error\n\
         warning: 3 warnings emitted\n"
    );
}
