use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_edit_distance() {
    assert_eq!(edit_distance("hello", "hello"), 0);
    assert_eq!(edit_distance("hello", "helo"), 1);
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("Sokcet", "Socket"), 2);
}

#[test]
fn test_suggest_similar() {
    let candidates = ["Socket", "String", "i32"];
    assert_eq!(suggest_similar("Sokcet", candidates), Some("Socket"));
    assert_eq!(suggest_similar("Strng", candidates), Some("String"));
    assert_eq!(suggest_similar("i33", candidates), Some("i32"));
    assert_eq!(suggest_similar("Frobnicator", candidates), None);
}

#[test]
fn test_exact_match_is_not_a_suggestion() {
    assert_eq!(suggest_similar("i32", ["i32"]), None);
}

#[test]
fn test_short_names_need_a_close_match() {
    assert_eq!(suggest_similar("u", ["u8"]), Some("u8"));
    assert_eq!(suggest_similar("x", ["i32"]), None);
    assert_eq!(suggest_similar("", ["u8"]), None);
}

#[test]
fn test_ties_are_deterministic() {
    assert_eq!(suggest_similar("i63", ["u63", "i64", "i32"]), Some("i64"));
    assert_eq!(suggest_similar("i63", ["i64", "u63"]), Some("i64"));
}

#[test]
fn test_closest_wins() {
    assert_eq!(suggest_similar("Colr", ["Cooler", "Color"]), Some("Color"));
}
