//! Resolution options for the configuration store.
//!
//! Responsibilities:
//! - Hold the two switches that control precedence (`use_environment`, `immutable`).
//! - Load those switches from environment variables or an inline JSON object.
//!
//! Does NOT handle:
//! - Applying the switches during lookups (see store/mod.rs).
//!
//! Invariants:
//! - Both switches default to true.
//! - Empty or whitespace-only variables are treated as unset.
//! - Unrecognized boolean spellings return `ConfigError::InvalidValue`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IMMUTABLE, DEFAULT_USE_ENVIRONMENT, ENV_IMMUTABLE, ENV_USE_ENVIRONMENT,
};
use crate::env::{EnvSource, env_var_or_none, non_blank};
use crate::error::ConfigError;

/// Switches controlling how a [`ConfigStore`](crate::ConfigStore) resolves keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Consult the environment source at all. When false, only the public map is used.
    pub use_environment: bool,
    /// Keep environment-backed values when a caller writes the same key.
    pub immutable: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            use_environment: DEFAULT_USE_ENVIRONMENT,
            immutable: DEFAULT_IMMUTABLE,
        }
    }
}

impl StoreOptions {
    /// Load options from the process environment, starting from defaults.
    ///
    /// Reads `LAYERED_CONFIG_USE_ENVIRONMENT` and `LAYERED_CONFIG_IMMUTABLE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_vars(env_var_or_none)
    }

    /// Override fields from variables in `source` that are set and non-blank.
    pub fn apply_env<E: EnvSource>(self, source: &E) -> Result<Self, ConfigError> {
        self.apply_vars(|key| source.var(key).and_then(non_blank))
    }

    /// `read` must return trimmed values and `None` for blank ones.
    fn apply_vars(mut self, read: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = read(ENV_USE_ENVIRONMENT) {
            self.use_environment = parse_bool(ENV_USE_ENVIRONMENT, &raw)?;
        }
        if let Some(raw) = read(ENV_IMMUTABLE) {
            self.immutable = parse_bool(ENV_IMMUTABLE, &raw)?;
        }
        Ok(self)
    }

    /// Parse options from an inline JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_use_environment(mut self, use_environment: bool) -> Self {
        self.use_environment = use_environment;
        self
    }

    pub fn with_immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => {
            tracing::warn!(var, "Invalid boolean option");
            Err(ConfigError::InvalidValue {
                var: var.to_string(),
                message: "must be true or false".to_string(),
            })
        }
    }
}
