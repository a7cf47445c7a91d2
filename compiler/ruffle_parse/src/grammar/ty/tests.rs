use pretty_assertions::assert_eq;
use ruffle_ir::{Span, StringInterner, Token, TokenKind, TypeExpr, TypeExprKind};

use crate::recovery::{ATOM_START, TYPE_START};
use crate::{parse_type, ParseError, Parser, MAX_TYPE_DEPTH};

fn lex(source: &str, interner: &StringInterner) -> Vec<Token> {
    ruffle_lexer::lex(source, interner).tokens.as_slice().to_vec()
}

/// Compact structural rendering: `opt(x)`, `err(ok, err)`, `(x)` for groups.
fn show(ty: &TypeExpr, interner: &StringInterner) -> String {
    match &ty.kind {
        TypeExprKind::Named(name) => interner.lookup(*name).to_owned(),
        TypeExprKind::Optional { inner, .. } => format!("opt({})", show(inner, interner)),
        TypeExprKind::ErrorUnion { ok, err } => {
            format!("err({}, {})", show(ok, interner), show(err, interner))
        }
        TypeExprKind::Grouped(inner) => format!("({})", show(inner, interner)),
    }
}

fn parse_ok(source: &str) -> String {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner);
    match parse_type(&tokens) {
        Ok((ty, _)) => show(&ty, &interner),
        Err(err) => panic!("`{source}` failed to parse: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner);
    match parse_type(&tokens) {
        Ok((ty, _)) => panic!("`{source}` parsed as {}", show(&ty, &interner)),
        Err(err) => err,
    }
}

#[test]
fn test_named() {
    let interner = StringInterner::new();
    let tokens = lex("i32", &interner);
    let (ty, rest) = parse_type(&tokens).unwrap();
    assert_eq!(ty.span, Span::new(0, 3, 1, 1));
    assert_eq!(show(&ty, &interner), "i32");
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].kind, TokenKind::Eof);
}

#[test]
fn test_optional() {
    assert_eq!(parse_ok("i32?"), "opt(i32)");
    assert_eq!(parse_ok("i32??"), "opt(opt(i32))");
    assert_eq!(parse_ok("(i32)?"), "opt((i32))");
}

#[test]
fn test_question_after_union_wraps_whole_union() {
    assert_eq!(parse_ok("i32!Error?"), "opt(err(i32, Error))");
    assert_eq!(parse_ok("i32!Error??"), "opt(opt(err(i32, Error)))");
}

#[test]
fn test_question_binds_tighter_than_bang() {
    assert_eq!(parse_ok("i32?!Error"), "err(opt(i32), Error)");
    assert_eq!(parse_ok("i32?!Error?"), "opt(err(opt(i32), Error))");
}

#[test]
fn test_error_arm_is_an_atom() {
    assert_eq!(parse_ok("i32!(Error?)"), "err(i32, (opt(Error)))");
    assert_eq!(parse_ok("i32!(Error!Error)"), "err(i32, (err(Error, Error)))");
    assert_eq!(parse_ok("(i32!Error)!Error"), "err((err(i32, Error)), Error)");
}

#[test]
fn test_bare_bang_has_unit_success() {
    let interner = StringInterner::new();
    let tokens = lex("!Error", &interner);
    let (ty, _) = parse_type(&tokens).unwrap();
    assert_eq!(show(&ty, &interner), "err(unit, Error)");
    let TypeExprKind::ErrorUnion { ok, .. } = &ty.kind else {
        panic!("expected an error union");
    };
    assert!(ok.is_unit());
    assert_eq!(ok.span, Span::point(0, 1, 1));
    assert_eq!(ty.span, Span::new(0, 6, 1, 1));
}

#[test]
fn test_bare_bang_in_error_arm() {
    assert_eq!(parse_ok("i32!(!Error)"), "err(i32, (err(unit, Error)))");
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let tokens = lex("i32!Error?", &interner);
    let (ty, _) = parse_type(&tokens).unwrap();
    assert_eq!(ty.span, Span::new(0, 10, 1, 1));
    let TypeExprKind::Optional { inner: union, question } = &ty.kind else {
        panic!("expected an optional");
    };
    assert_eq!(union.span, Span::new(0, 9, 1, 1));
    assert_eq!(*question, Span::new(9, 10, 1, 10));
}

#[test]
fn test_chained_bang_is_ambiguous() {
    assert_eq!(
        parse_err("i32!Error!Error"),
        ParseError::AmbiguousErrorChain {
            first: Span::new(3, 4, 1, 4),
            second: Span::new(9, 10, 1, 10),
        }
    );
    assert!(matches!(
        parse_err("i32!Error?!Error"),
        ParseError::AmbiguousErrorChain { .. }
    ));
    assert!(matches!(
        parse_err("!Error!Error"),
        ParseError::AmbiguousErrorChain { .. }
    ));
}

#[test]
fn test_boss_case_points_at_second_bang() {
    let err = parse_err("i32!(Error?)!(Error?!Error)?");
    let ParseError::AmbiguousErrorChain { first, second } = err else {
        panic!("expected an ambiguous chain, got {err:?}");
    };
    assert_eq!(first.start, 3);
    assert_eq!(second.start, 12);
}

#[test]
fn test_boss_case_parenthesized() {
    assert_eq!(
        parse_ok("i32!((Error?)!(Error?!Error))?"),
        "opt(err(i32, (err((opt(Error)), (err(opt(Error), Error))))))"
    );
}

#[test]
fn test_stops_before_trailing_tokens() {
    let interner = StringInterner::new();
    let tokens = lex("i32? = 5;", &interner);
    let (ty, rest) = parse_type(&tokens).unwrap();
    assert_eq!(show(&ty, &interner), "opt(i32)");
    assert_eq!(rest[0].kind, TokenKind::Eq);
    assert_eq!(rest.len(), 4);
}

#[test]
fn test_unclosed_paren() {
    assert_eq!(
        parse_err("(i32;"),
        ParseError::UnclosedParen {
            open: Span::new(0, 1, 1, 1),
            found: TokenKind::Semicolon,
            span: Span::new(4, 5, 1, 5),
        }
    );
    assert!(matches!(
        parse_err("i32!(Error"),
        ParseError::UnclosedParen {
            found: TokenKind::Eof,
            ..
        }
    ));
}

#[test]
fn test_unexpected_token_at_start() {
    assert_eq!(
        parse_err(";"),
        ParseError::UnexpectedToken {
            expected: TYPE_START,
            found: TokenKind::Semicolon,
            span: Span::new(0, 1, 1, 1),
        }
    );
    assert!(matches!(
        parse_err(""),
        ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            ..
        }
    ));
    assert!(matches!(
        parse_err("?"),
        ParseError::UnexpectedToken {
            found: TokenKind::Question,
            ..
        }
    ));
}

#[test]
fn test_missing_error_arm() {
    let err = parse_err("i32!;");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: ATOM_START,
            found: TokenKind::Semicolon,
            span: Span::new(4, 5, 1, 5),
        }
    );
    assert_eq!(err.to_string(), "expected identifier or `(`, found `;`");
    assert!(matches!(parse_err("i32!?"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("()"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_lex_error_token() {
    let err = parse_err("i32!$");
    assert!(err.is_from_lex_error());
}

#[test]
fn test_deep_parens_are_rejected() {
    let depth = MAX_TYPE_DEPTH + 10;
    let source = format!("{}i32{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(
        parse_err(&source),
        ParseError::TooDeep {
            limit: MAX_TYPE_DEPTH,
            ..
        }
    ));
}

#[test]
fn test_long_question_chain_is_rejected() {
    let source = format!("i32{}", "?".repeat(MAX_TYPE_DEPTH + 1));
    assert!(matches!(parse_err(&source), ParseError::TooDeep { .. }));

    let source = format!("i32{}", "?".repeat(100));
    let interner = StringInterner::new();
    let tokens = lex(&source, &interner);
    let (ty, _) = parse_type(&tokens).unwrap();
    assert_eq!(ty.depth(), 101);
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let source = format!("{}i32{}", "(".repeat(100), ")".repeat(100));
    assert!(parse_ok(&source).ends_with("(i32)))"));
}

/// `levels` groups around `i32`, each closing after `per_level` `?`s.
fn stacked_optionals(levels: usize, per_level: usize) -> String {
    let mut source = "(".repeat(levels);
    source.push_str("i32");
    for _ in 0..levels {
        source.push_str(&"?".repeat(per_level));
        source.push(')');
    }
    source
}

#[test]
fn test_optionals_stack_across_groups() {
    let source = stacked_optionals(50, 2);
    let interner = StringInterner::new();
    let tokens = lex(&source, &interner);
    let (ty, _) = parse_type(&tokens).unwrap();
    assert_eq!(ty.depth(), 151);

    // No single level comes near the limit, but the tree as a whole does.
    let err = parse_err(&stacked_optionals(100, 3));
    assert!(
        matches!(err, ParseError::TooDeep { limit: MAX_TYPE_DEPTH, .. }),
        "{err:?}"
    );
}

#[test]
fn test_huge_stacked_optionals_fail_fast() {
    let source = stacked_optionals(250, 200);
    let err = parse_err(&source);
    let ParseError::TooDeep { span, .. } = err else {
        panic!("expected TooDeep, got {err:?}");
    };
    // The innermost level plus one group and the next level's first `?`s.
    assert!(span.start < 1000, "{span:?}");
}

#[test]
fn test_error_union_counts_toward_height() {
    let inner = format!("i32{}", "?".repeat(MAX_TYPE_DEPTH - 2));
    let interner = StringInterner::new();
    let tokens = lex(&inner, &interner);
    assert_eq!(parse_type(&tokens).unwrap().0.depth(), MAX_TYPE_DEPTH - 1);

    let tokens = lex(&format!("{inner}!Error?"), &interner);
    assert!(matches!(
        parse_type(&tokens),
        Err(ParseError::TooDeep { .. })
    ));
}

#[test]
fn test_depth_resets_after_error() {
    let interner = StringInterner::new();
    let tokens = lex("((i32; i32", &interner);
    let mut parser = Parser::new(&tokens);
    assert!(parser.parse_type().is_err());
    assert_eq!(parser.depth, 0);

    parser.cursor_mut().advance();
    let ty = parser.parse_type().unwrap();
    assert_eq!(show(&ty, &interner), "i32");
    assert!(parser.cursor().is_at_end());
}
