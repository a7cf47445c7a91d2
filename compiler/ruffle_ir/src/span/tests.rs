use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20, 1, 11);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge_keeps_earliest_position() {
    let a = Span::new(15, 30, 2, 4);
    let b = Span::new(10, 20, 1, 11);
    let merged = a.merge(b);
    assert_eq!(merged, Span::new(10, 30, 1, 11));
    assert_eq!(b.merge(a), Span::new(10, 30, 1, 11));
}

#[test]
fn test_span_end_point() {
    let span = Span::new(4, 7, 1, 5);
    assert_eq!(span.end_point(), Span::new(7, 7, 1, 8));
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(3, 5, 2, 7).to_string(), "2:7");
    assert_eq!(format!("{:?}", Span::new(3, 5, 2, 7)), "3..5@2:7");
}

#[test]
fn test_span_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Span::new(0, 10, 1, 1));
    set.insert(Span::new(0, 10, 1, 1));
    set.insert(Span::new(5, 15, 1, 6));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_line_index_single_line() {
    let source = "Hello, world!";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 0), (1, 1));
    assert_eq!(index.line_col(source, 6), (1, 7));
    assert_eq!(index.line_col(source, 12), (1, 13));
}

#[test]
fn test_line_index_multiple_lines() {
    let source = "Hello\nWorld\nRust!";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 5), (1, 6));
    assert_eq!(index.line_col(source, 6), (2, 1));
    assert_eq!(index.line_col(source, 10), (2, 5));
    assert_eq!(index.line_col(source, 12), (3, 1));
    assert_eq!(index.line_count(), 3);
}

#[test]
fn test_line_index_empty_and_out_of_bounds() {
    let index = LineIndex::build("");
    assert_eq!(index.line_col("", 0), (1, 1));

    let index = LineIndex::build("Hello");
    assert_eq!(index.line_col("Hello", 100), (1, 6));
}

#[test]
fn test_line_index_counts_characters() {
    let source = "é: i32";
    let index = LineIndex::build(source);
    // 'é' is two bytes but one column
    assert_eq!(index.line_col(source, 2), (1, 2));
}

#[test]
fn test_line_text() {
    let source = "let a: i32\r\nlet b: bool\n";
    let index = LineIndex::build(source);
    assert_eq!(index.line_text(source, 1), Some("let a: i32"));
    assert_eq!(index.line_text(source, 2), Some("let b: bool"));
    assert_eq!(index.line_text(source, 3), Some(""));
    assert_eq!(index.line_text(source, 4), None);
}

#[test]
fn test_from_range() {
    let source = "a\n  bc";
    let index = LineIndex::build(source);
    let span = Span::from_range(4..6, source, &index);
    assert_eq!(span, Span::new(4, 6, 2, 3));
}
