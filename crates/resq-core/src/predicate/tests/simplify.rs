use crate::{
    config::QueryConfig,
    predicate::{CompareOp, Predicate, Simplifier, simplify},
    test_support::supported,
};

fn eq(property: &str, value: i64) -> Predicate {
    Predicate::eq(property, value)
}

#[test]
fn supported_equality_is_pushed_down() {
    let props = supported(&["a"]);
    assert_eq!(simplify(&eq("a", 1), &props), vec![eq("a", 1)]);
}

#[test]
fn unsupported_equality_widens_to_true() {
    let props = supported(&["b"]);
    assert_eq!(simplify(&eq("a", 1), &props), vec![Predicate::True]);
}

#[test]
fn non_equality_widens_to_true_even_when_supported() {
    let props = supported(&["a"]);

    for op in [
        CompareOp::Ne,
        CompareOp::Lt,
        CompareOp::Lte,
        CompareOp::Gt,
        CompareOp::Gte,
        CompareOp::Contains,
    ] {
        let predicate = Predicate::compare("a", op, 1);
        assert_eq!(simplify(&predicate, &props), vec![Predicate::True], "{op:?}");
    }
}

#[test]
fn and_without_or_children_stays_and() {
    let props = supported(&["a", "b"]);
    let predicate = eq("a", 1) & eq("b", 2);

    assert_eq!(simplify(&predicate, &props), vec![eq("a", 1) & eq("b", 2)]);
}

#[test]
fn top_level_or_unwraps_into_entries() {
    let props = supported(&["a", "b"]);
    let predicate = eq("a", 1) | eq("b", 2);

    assert_eq!(simplify(&predicate, &props), vec![eq("a", 1), eq("b", 2)]);
}

#[test]
fn and_distributes_over_or() {
    let props = supported(&["a", "b", "c"]);
    let predicate = eq("a", 1) & (eq("b", 2) | eq("c", 3));

    assert_eq!(
        simplify(&predicate, &props),
        vec![eq("a", 1) & eq("b", 2), eq("a", 1) & eq("c", 3)]
    );
}

#[test]
fn or_on_the_left_distributes_in_operand_order() {
    let props = supported(&["a", "b", "c"]);
    let predicate = (eq("b", 2) | eq("c", 3)) & eq("a", 1);

    assert_eq!(
        simplify(&predicate, &props),
        vec![eq("b", 2) & eq("a", 1), eq("c", 3) & eq("a", 1)]
    );
}

#[test]
fn unsupported_branch_inside_distribution_folds_away() {
    let props = supported(&["a", "c"]);
    let predicate = eq("a", 1) & (Predicate::gt("b", 5) | eq("c", 3));

    assert_eq!(
        simplify(&predicate, &props),
        vec![eq("a", 1), eq("a", 1) & eq("c", 3)]
    );
}

#[test]
fn literal_distribution_keeps_true_operands_without_folding() {
    let props = supported(&["a", "c"]);
    let simplifier =
        Simplifier::new(&props).with_config(QueryConfig::default().with_fold_always_true(false));
    let predicate = eq("a", 1) & (Predicate::gt("b", 5) | eq("c", 3));

    assert_eq!(
        simplifier.simplify(&predicate),
        vec![eq("a", 1) & Predicate::True, eq("a", 1) & eq("c", 3)]
    );
}

#[test]
fn three_way_and_distributes_pairwise_in_index_order() {
    let props = supported(&["a", "b", "c", "d"]);
    let predicate = Predicate::And(vec![eq("a", 1), eq("b", 2) | eq("c", 3), eq("d", 4)]);

    assert_eq!(
        simplify(&predicate, &props),
        vec![
            // (0, 1)
            eq("a", 1) & eq("b", 2),
            eq("a", 1) & eq("c", 3),
            // (0, 2)
            eq("a", 1) & eq("d", 4),
            // (1, 2)
            eq("b", 2) & eq("d", 4),
            eq("c", 3) & eq("d", 4),
        ]
    );
}

#[test]
fn identical_pairs_collapse_during_distribution() {
    let props = supported(&["a", "b"]);
    let predicate = eq("a", 1) & (eq("a", 1) | eq("b", 2));

    assert_eq!(
        simplify(&predicate, &props),
        vec![eq("a", 1), eq("a", 1) & eq("b", 2)]
    );
}

#[test]
fn nested_distribution_is_flattened_into_the_root() {
    let props = supported(&["a", "b", "c", "d"]);
    let predicate = eq("d", 4) | (eq("a", 1) & (eq("b", 2) | eq("c", 3)));

    assert_eq!(
        simplify(&predicate, &props),
        vec![
            eq("d", 4),
            eq("a", 1) & eq("b", 2),
            eq("a", 1) & eq("c", 3),
        ]
    );
}

#[test]
fn not_passes_through_unchanged() {
    let props = supported(&["a"]);
    let negated = Predicate::not(eq("a", 1) | Predicate::gt("b", 2));

    assert_eq!(simplify(&negated, &props), vec![negated.clone()]);
    assert_eq!(
        simplify(&(eq("a", 2) & negated.clone()), &props),
        vec![eq("a", 2) & negated]
    );
}

#[test]
fn sentinels_pass_through() {
    let props = supported(&[]);
    assert_eq!(simplify(&Predicate::True, &props), vec![Predicate::True]);
    assert_eq!(simplify(&Predicate::False, &props), vec![Predicate::False]);
}

#[test]
fn absent_root_yields_no_predicates() {
    let props = supported(&["a"]);
    assert!(Simplifier::new(&props).run(None).is_empty());
}

#[test]
fn empty_combinators_use_identity_elements() {
    let props = supported(&["a"]);
    assert_eq!(
        simplify(&Predicate::And(vec![]), &props),
        vec![Predicate::True]
    );
    assert!(simplify(&Predicate::Or(vec![]), &props).is_empty());
}

#[test]
fn single_child_and_is_rewrapped() {
    let props = supported(&["a"]);
    assert_eq!(
        simplify(&Predicate::And(vec![eq("a", 1)]), &props),
        vec![Predicate::And(vec![eq("a", 1)])]
    );
}

#[test]
fn single_or_child_of_and_is_not_dropped() {
    let props = supported(&["a", "b"]);
    let predicate = Predicate::And(vec![eq("a", 1) | eq("b", 2)]);

    assert_eq!(simplify(&predicate, &props), vec![eq("a", 1), eq("b", 2)]);
}

#[test]
fn and_with_empty_or_matches_nothing() {
    let props = supported(&["a"]);
    let predicate = eq("a", 1) & Predicate::Or(vec![]);

    assert!(simplify(&predicate, &props).is_empty());
}

#[test]
fn input_tree_is_not_mutated() {
    let props = supported(&["a", "b", "c"]);
    let predicate = eq("a", 1) & (eq("b", 2) | Predicate::lt("c", 3));
    let before = predicate.clone();

    let _ = simplify(&predicate, &props);
    assert_eq!(predicate, before);
}

#[test]
fn one_simplifier_handles_many_trees_independently() {
    let props = supported(&["a", "b"]);
    let simplifier = Simplifier::new(&props);

    let first = simplifier.simplify(&(eq("a", 1) | eq("b", 2)));
    let second = simplifier.simplify(&eq("a", 3));

    assert_eq!(first, vec![eq("a", 1), eq("b", 2)]);
    assert_eq!(second, vec![eq("a", 3)]);
}
