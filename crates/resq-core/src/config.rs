//! Module: config
//! Responsibility: tunables for simplification and query dispatch.
//! Does not own: backend connection settings.
//! Boundary: parsed once by the caller, passed by value into queries.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default cap on the number of branches one AND node may distribute into.
pub const DEFAULT_MAX_BRANCHES: usize = 256;

///
/// QueryConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Fold `AND(x, TRUE)` down to `x` while distributing.
    pub fold_always_true: bool,

    /// Upper bound on distributed branches for a single AND node.
    /// Exceeding it widens that node to `TRUE`.
    pub max_branches: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            fold_always_true: true,
            max_branches: DEFAULT_MAX_BRANCHES,
        }
    }
}

impl QueryConfig {
    /// Parse and validate a config from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_branches == 0 {
            return Err(ConfigError::ZeroMaxBranches);
        }

        Ok(())
    }

    #[must_use]
    pub const fn with_fold_always_true(mut self, fold: bool) -> Self {
        self.fold_always_true = fold;
        self
    }

    #[must_use]
    pub const fn with_max_branches(mut self, max_branches: usize) -> Self {
        self.max_branches = max_branches;
        self
    }
}

///
/// TESTS
///
