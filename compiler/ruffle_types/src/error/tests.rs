use super::*;
use pretty_assertions::assert_eq;
use ruffle_diagnostic::Applicability;

fn span(start: u32, end: u32) -> Span {
    Span::new(start, end, 1, start + 1)
}

#[test]
fn test_codes_and_spans() {
    let s = span(4, 9);
    let errors = [
        SemanticError::UnknownType {
            name: Name::UNIT,
            span: s,
            suggestion: None,
        },
        SemanticError::OptionalError { span: s },
        SemanticError::NestedSuccessUnion { span: s },
        SemanticError::DuplicateType {
            name: Name::UNIT,
            span: s,
            previous: None,
        },
    ];
    let codes: Vec<_> = errors.iter().map(SemanticError::code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::E2001,
            ErrorCode::E2002,
            ErrorCode::E2003,
            ErrorCode::E2004
        ]
    );
    assert!(errors.iter().all(|e| e.span() == s));
}

#[test]
fn test_unknown_type_with_suggestion() {
    let interner = StringInterner::new();
    let err = SemanticError::UnknownType {
        name: interner.intern("Sokcet"),
        span: span(7, 13),
        suggestion: Some(interner.intern("Socket")),
    };
    let diag = err.to_diagnostic(&interner);
    assert_eq!(diag.message, "unknown type `Sokcet`");
    assert_eq!(diag.primary_span(), Some(span(7, 13)));
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.suggestions[0].message, "did you mean `Socket`?");
    assert_eq!(diag.suggestions[0].applicability, Applicability::MaybeIncorrect);
}

#[test]
fn test_duplicate_points_at_both_declarations() {
    let interner = StringInterner::new();
    let err = SemanticError::DuplicateType {
        name: interner.intern("Point"),
        span: span(40, 45),
        previous: Some(span(7, 12)),
    };
    let diag = err.to_diagnostic(&interner);
    assert_eq!(diag.message, "type `Point` is declared more than once");
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.labels[1].span, span(7, 12));
}

#[test]
fn test_duplicate_builtin_has_note() {
    let interner = StringInterner::new();
    let err = SemanticError::DuplicateType {
        name: interner.intern("Error"),
        span: span(6, 11),
        previous: None,
    };
    let diag = err.to_diagnostic(&interner);
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.notes, vec!["`Error` is a built-in type".to_owned()]);
}

#[test]
fn test_optional_error_message() {
    let interner = StringInterner::new();
    let diag = SemanticError::OptionalError { span: span(4, 12) }.to_diagnostic(&interner);
    assert_eq!(diag.message, "error type cannot be optional");
    assert!(diag.is_error());
}
