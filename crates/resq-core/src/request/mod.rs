//! Module: request
//! Responsibility: turn simplified predicates into backend equality requests.
//! Does not own: simplification or backend I/O.
//! Boundary: consumes `Simplifier` output, feeds `ResourceBackend::fetch`.

use crate::{
    predicate::{CompareOp, Predicate},
    resource::PropertyId,
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use std::collections::BTreeMap;
use tracing::trace;

///
/// PropertyRequest
///
/// Set of property/value equality constraints for one backend call.
/// An empty request is unconstrained and asks for every resource.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct PropertyRequest(BTreeMap<PropertyId, Value>);

impl PropertyRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.0.is_empty()
    }

    // False when the property is already pinned to a different value.
    fn constrain(&mut self, property: &PropertyId, value: &Value) -> bool {
        match self.0.get(property) {
            Some(existing) => existing == value,
            None => {
                self.0.insert(property.clone(), value.clone());
                true
            }
        }
    }
}

impl FromIterator<(PropertyId, Value)> for PropertyRequest {
    fn from_iter<I: IntoIterator<Item = (PropertyId, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// Build one request per simplified predicate.
///
/// Rules:
/// - TRUE                         → unconstrained request
/// - p = v                        → { p: v }
/// - AND(..)                      → merged constraints of every child
/// - NOT(..), OR(..), non-equality → no constraint (left to the post-filter)
/// - FALSE, OR(), p = v AND p = w  → no request (cannot match)
///
/// Duplicate requests are dropped, keeping first-occurrence order. Any
/// unconstrained request subsumes the rest and is returned alone.
///
#[must_use]
pub fn request_maps(simplified: &[Predicate]) -> Vec<PropertyRequest> {
    let mut out: Vec<PropertyRequest> = Vec::with_capacity(simplified.len());

    for predicate in simplified {
        let mut request = PropertyRequest::new();
        if !collect_constraints(predicate, &mut request) {
            trace!(predicate = %predicate, "predicate cannot match; no request issued");
            continue;
        }

        if request.is_unconstrained() {
            return vec![request];
        }
        if !out.contains(&request) {
            out.push(request);
        }
    }

    out
}

// Returns false when the predicate can never match.
fn collect_constraints(predicate: &Predicate, request: &mut PropertyRequest) -> bool {
    match predicate {
        Predicate::True | Predicate::Not(_) => true,
        Predicate::False => false,

        // No single branch can be pinned; fetch unconstrained and let the
        // post-filter decide. An empty OR matches nothing.
        Predicate::Or(children) => !children.is_empty(),

        Predicate::And(children) => children
            .iter()
            .all(|child| collect_constraints(child, request)),

        Predicate::Compare(cmp) => match cmp.op {
            CompareOp::Eq => request.constrain(&cmp.property, &cmp.value),
            _ => true,
        },
    }
}

///
/// TESTS
///
