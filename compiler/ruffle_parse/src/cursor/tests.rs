use super::*;
use pretty_assertions::assert_eq;
use ruffle_ir::StringInterner;

fn tokens(source: &str) -> (Vec<Token>, StringInterner) {
    let interner = StringInterner::new();
    let output = ruffle_lexer::lex(source, &interner);
    (output.tokens.as_slice().to_vec(), interner)
}

#[test]
fn test_advance_and_check() {
    let (tokens, _interner) = tokens("a ? !");
    let mut cursor = Cursor::new(&tokens);
    assert!(cursor.current_ident().is_some());
    cursor.advance();
    assert!(cursor.check(TokenKind::Question));
    assert!(cursor.eat(TokenKind::Bang).is_none());
    assert!(cursor.eat(TokenKind::Question).is_some());
    assert_eq!(cursor.advance().kind, TokenKind::Bang);
    assert!(cursor.is_at_end());
}

#[test]
fn test_never_advances_past_eof() {
    let (tokens, _interner) = tokens("x");
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    let eof = cursor.advance();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.remaining().len(), 1);
}

#[test]
fn test_synthetic_eof_for_unterminated_slice() {
    let (tokens, _interner) = tokens("ab cd");
    let slice = &tokens[..1];
    let mut cursor = Cursor::new(slice);
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::new(2, 2, 1, 3));
    assert!(cursor.remaining().is_empty());
}

#[test]
fn test_empty_slice() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.previous_span(), Span::DUMMY);
    assert_eq!(cursor.peek_kind_at(3), TokenKind::Eof);
}

#[test]
fn test_peek_and_positions() {
    let (tokens, _interner) = tokens("a : b");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.peek_kind_at(1), TokenKind::Colon);
    cursor.advance();
    cursor.advance();
    assert!(cursor.current_ident().is_some());
    assert_eq!(cursor.previous_span(), Span::new(2, 3, 1, 3));
    assert_eq!(cursor.remaining().len(), 2);
}
