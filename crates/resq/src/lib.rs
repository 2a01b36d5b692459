//! ## Crate layout
//! - `core`: values, resources, predicates, the equality-pushdown
//!   simplifier, request extraction, dispatch, config, and observability.
//! - `error`: public error type with a stable kind taxonomy.
//! - `logging`: `tracing` subscriber setup (behind the `logging` feature).
//!
//! The `prelude` module mirrors the surface resource providers use to build
//! and answer queries.

pub use resq_core as core;

pub mod error;
pub mod logging;

pub use error::{Error, ErrorKind};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Provider Prelude
///

pub mod prelude {
    pub use crate::core::{
        config::QueryConfig,
        predicate::{
            CompareOp, ComparePredicate, Predicate, PredicateBuilder, Simplifier,
            SupportedProperties, eval, simplify,
        },
        provider::{MemoryBackend, ResourceBackend, ResourceQuery},
        request::{PropertyRequest, request_maps},
        resource::{PropertyId, Resource},
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}
