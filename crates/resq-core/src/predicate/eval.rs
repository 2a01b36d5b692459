use crate::{
    predicate::{CompareOp, ComparePredicate, Predicate},
    resource::{PropertyPresence, PropertySource},
    value::{self, Value},
};
use std::cmp::Ordering;

///
/// Evaluate a predicate against a single resource.
///
/// This function performs **pure runtime evaluation**:
/// - no knowledge of backend-supported properties
/// - no simplification
///
/// Comparisons against a missing property, or between incomparable values,
/// evaluate to `false`.
///
#[must_use]
pub fn eval<S: PropertySource + ?Sized>(source: &S, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(source, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(source, child)),
        Predicate::Not(inner) => !eval(source, inner),

        Predicate::Compare(cmp) => eval_compare(source, cmp),
    }
}

fn eval_compare<S: PropertySource + ?Sized>(source: &S, cmp: &ComparePredicate) -> bool {
    let ComparePredicate {
        property,
        op,
        value,
    } = cmp;

    let PropertyPresence::Present(actual) = source.property(property) else {
        return false;
    };

    match op {
        CompareOp::Eq => actual == value,
        CompareOp::Ne => actual != value,

        CompareOp::Lt => order(actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => order(actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => order(actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => order(actual, value).is_some_and(Ordering::is_ge),

        CompareOp::Contains => value::contains(actual, value),
    }
}

fn order(actual: &Value, expected: &Value) -> Option<Ordering> {
    value::compare_order(actual, expected)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;

    fn host() -> Resource {
        Resource::new("Host")
            .with_property("prop1", "foo")
            .with_property("prop2", "bar")
            .with_property("cpu", 8)
            .with_property("rack", Value::Null)
    }

    #[test]
    fn missing_property_never_matches_a_comparison() {
        let resource = host();
        assert!(!eval(&resource, &Predicate::eq("absent", "foo")));
        assert!(!eval(&resource, &Predicate::ne("absent", "foo")));
        assert!(eval(&resource, &Predicate::not(Predicate::eq("absent", "foo"))));
    }

    #[test]
    fn null_is_a_present_value() {
        let resource = host();
        assert!(eval(&resource, &Predicate::eq("rack", Value::Null)));
        assert!(!eval(&resource, &Predicate::gt("rack", 1)));
    }

    #[test]
    fn ordering_comparisons_use_numeric_widening() {
        let resource = host();
        assert!(eval(&resource, &Predicate::gt("cpu", 4u64)));
        assert!(eval(&resource, &Predicate::lte("cpu", 8)));
        assert!(!eval(&resource, &Predicate::lt("cpu", "9")));
    }

    #[test]
    fn and_binds_before_or_in_nested_trees() {
        let resource = host();

        // (prop1 = foo AND prop2 = bat) OR prop3 = cat
        let predicate = (Predicate::eq("prop1", "foo") & Predicate::eq("prop2", "bat"))
            | Predicate::eq("prop3", "cat");
        assert!(!eval(&resource, &predicate));

        // prop1 = foo AND NOT (prop2 = bat OR prop3 = car)
        let predicate = Predicate::eq("prop1", "foo")
            & Predicate::not(Predicate::eq("prop2", "bat") | Predicate::eq("prop3", "car"));
        assert!(eval(&resource, &predicate));
    }

    #[test]
    fn empty_combinators_follow_identity_elements() {
        let resource = host();
        assert!(eval(&resource, &Predicate::And(vec![])));
        assert!(!eval(&resource, &Predicate::Or(vec![])));
    }
}
