//! Core runtime for resq: property values, resources, predicates, the
//! equality-pushdown simplifier, backend request extraction, and the
//! resource query dispatcher.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod obs;
pub mod predicate;
pub mod provider;
pub mod request;
pub mod resource;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, backends, or sinks are re-exported here.
///

pub mod prelude {
    pub use crate::{
        predicate::{CompareOp, ComparePredicate, Predicate, PredicateBuilder},
        resource::{PropertyId, Resource},
        value::Value,
    };
}
