use super::*;
use pretty_assertions::assert_eq;

fn sp(start: u32, end: u32) -> Span {
    Span::new(start, end, 1, start + 1)
}

fn name(local: u32) -> Name {
    Name::new(1, local)
}

#[test]
fn test_strip_groups() {
    // (i32)!((Error))
    let ty = TypeExpr::error_union(
        TypeExpr::grouped(TypeExpr::named(name(1), sp(1, 4)), sp(0, 5)),
        TypeExpr::grouped(
            TypeExpr::grouped(TypeExpr::named(name(2), sp(8, 13)), sp(7, 14)),
            sp(6, 15),
        ),
        sp(0, 15),
    );

    let stripped = ty.strip_groups();
    assert_eq!(
        stripped,
        TypeExpr::error_union(
            TypeExpr::named(name(1), sp(1, 4)),
            TypeExpr::named(name(2), sp(8, 13)),
            sp(0, 15),
        )
    );
}

#[test]
fn test_depth() {
    let leaf = TypeExpr::named(name(1), sp(0, 3));
    assert_eq!(leaf.depth(), 1);

    let opt = TypeExpr::optional(leaf.clone(), sp(3, 4), sp(0, 4));
    assert_eq!(opt.depth(), 2);

    let union = TypeExpr::error_union(leaf, opt, sp(0, 9));
    assert_eq!(union.depth(), 3);
}

#[test]
fn test_unit_leaf() {
    let unit = TypeExpr::unit(Span::point(0, 1, 1));
    assert!(unit.is_unit());
    assert!(unit.is_named());
    assert!(unit.span.is_empty());
    assert!(!TypeExpr::named(name(1), sp(0, 1)).is_unit());
}

#[test]
fn test_for_each_name_order() {
    let ty = TypeExpr::optional(
        TypeExpr::error_union(
            TypeExpr::named(name(1), sp(0, 3)),
            TypeExpr::named(name(2), sp(4, 9)),
            sp(0, 9),
        ),
        sp(9, 10),
        sp(0, 10),
    );
    let mut seen = Vec::new();
    ty.for_each_name(&mut |n, span| seen.push((n, span.start)));
    assert_eq!(seen, vec![(name(1), 0), (name(2), 4)]);
}
