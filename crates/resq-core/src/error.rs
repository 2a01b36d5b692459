use thiserror::Error as ThisError;

///
/// QueryError
///
/// Failure surfaced by `ResourceQuery::execute`.
/// Simplification itself is total; only the backend can fail a query.
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("backend request failed: {0}")]
    Backend(#[from] BackendError),
}

///
/// BackendError
///
/// Opaque failure reported by a `ResourceBackend` implementation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// BuilderError
///
/// Misuse of the fluent `PredicateBuilder`.
/// Only the first error encountered is reported.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum BuilderError {
    #[error("predicate builder is empty")]
    Empty,

    #[error("expected a property comparison or block")]
    ExpectedOperand,

    #[error("expected `and`/`or` between operands")]
    ExpectedOperator,

    #[error("`end` without a matching `begin`")]
    UnmatchedEnd,

    #[error("{0} block(s) opened with `begin` were never closed")]
    UnclosedBlock(usize),

    #[error("`not` must be followed by an operand or block")]
    DanglingNot,
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid query config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_branches must be greater than zero")]
    ZeroMaxBranches,
}
