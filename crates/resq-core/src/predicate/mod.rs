//! Module: predicate
//! Responsibility: predicate AST, evaluation, fluent construction, and
//! equality-pushdown simplification.
//! Does not own: backend request encoding or dispatch.
//! Boundary: everything downstream consumes `Predicate` values from here.

mod ast;
mod builder;
mod eval;
mod simplify;
mod support;

#[cfg(test)]
mod tests;

pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use builder::{PredicateBuilder, PropertyComparison};
pub use eval::eval;
pub use simplify::{Simplifier, simplify};
pub use support::SupportedProperties;
