//! Shared fixtures and proptest strategies for unit tests.

use crate::{
    predicate::{CompareOp, Predicate},
    resource::{PropertyId, Resource},
    value::Value,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

pub(crate) const PROPERTIES: [&str; 4] = ["a", "b", "c", "d"];

pub(crate) fn supported(ids: &[&str]) -> BTreeSet<PropertyId> {
    ids.iter().map(|id| PropertyId::from(*id)).collect()
}

pub(crate) fn arb_property() -> impl Strategy<Value = PropertyId> {
    prop::sample::select(PROPERTIES.to_vec()).prop_map(PropertyId::from)
}

// Small domain so generated equalities actually collide with resources.
pub(crate) fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0i64..3).prop_map(Value::Int),
        (0u64..2).prop_map(Value::Uint),
        prop::sample::select(vec!["x", "y", "xy"]).prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

pub(crate) fn arb_compare_op() -> impl Strategy<Value = CompareOp> {
    prop_oneof![
        4 => Just(CompareOp::Eq),
        1 => Just(CompareOp::Ne),
        1 => Just(CompareOp::Lt),
        1 => Just(CompareOp::Lte),
        1 => Just(CompareOp::Gt),
        1 => Just(CompareOp::Gte),
        1 => Just(CompareOp::Contains),
    ]
}

pub(crate) fn arb_predicate() -> impl Strategy<Value = Predicate> {
    let leaf = prop_oneof![
        1 => Just(Predicate::True),
        1 => Just(Predicate::False),
        8 => (arb_property(), arb_compare_op(), arb_value())
            .prop_map(|(property, op, value)| Predicate::compare(property, op, value)),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            3 => prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::And),
            3 => prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::Or),
            1 => inner.prop_map(Predicate::not),
        ]
    })
}

pub(crate) fn arb_supported() -> impl Strategy<Value = BTreeSet<PropertyId>> {
    prop::sample::subsequence(PROPERTIES.to_vec(), 0..=PROPERTIES.len())
        .prop_map(|ids| supported(&ids))
}

pub(crate) fn arb_resource() -> impl Strategy<Value = Resource> {
    prop::collection::vec(prop::option::of(arb_value()), PROPERTIES.len()).prop_map(|values| {
        let mut resource = Resource::new("Test");
        for (id, value) in PROPERTIES.iter().zip(values) {
            if let Some(value) = value {
                resource.set_property(*id, value);
            }
        }
        resource
    })
}

/// Whether a predicate holds an OR anywhere outside a NOT.
pub(crate) fn has_visible_or(predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Or(_) => true,
        Predicate::And(children) => children.iter().any(has_visible_or),
        Predicate::True | Predicate::False | Predicate::Not(_) | Predicate::Compare(_) => false,
    }
}
