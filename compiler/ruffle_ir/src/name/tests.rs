use super::*;

#[test]
fn test_name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
    assert_eq!(name.raw(), (5 << 28) | 1000);
}

#[test]
fn test_name_empty() {
    assert_eq!(Name::EMPTY.shard(), 0);
    assert_eq!(Name::EMPTY.local(), 0);
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn test_name_ord() {
    let a = Name::new(0, 1);
    let b = Name::new(0, 2);
    assert!(a < b);
}
