//! The layered configuration store.
//!
//! Responsibilities:
//! - Hold the public map and the environment-shadow map.
//! - Resolve reads and writes against an [`EnvSource`] according to [`StoreOptions`].
//! - Provide dot-notation lookups across both maps.
//! - Expose an optional process-wide default instance (see global.rs).
//!
//! Does NOT handle:
//! - Loading options from the environment (see options.rs).
//! - Persisting values anywhere. The store lives in memory only.
//!
//! Invariants:
//! - With `use_environment` off, reads and writes touch the public map only.
//! - With `use_environment` on, reads check the shadow map, then the source,
//!   then the public map.
//! - In immutable mode a shadow entry is never replaced by an explicit write.
//! - Lookups never fail; absence is `None` or the caller's default.
//! - Values are never logged.

mod global;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::env::{EnvSource, SystemEnv};
use crate::error::ConfigError;
use crate::options::StoreOptions;
use crate::path;

pub use global::{get_instance, with_global};

/// Where a call to [`ConfigStore::set`] stored its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Written to the public map.
    Public,
    /// The caller's value replaced or created a shadow entry.
    ShadowOverride,
    /// An existing shadow entry was kept; the caller's value was dropped.
    ShadowKept,
    /// The environment's value was captured into the shadow map instead of the caller's.
    EnvironmentPinned,
}

impl SetOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SetOutcome::Public => "public",
            SetOutcome::ShadowOverride => "shadow_override",
            SetOutcome::ShadowKept => "shadow_kept",
            SetOutcome::EnvironmentPinned => "environment_pinned",
        }
    }
}

/// Copy of both maps, for introspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigSnapshot {
    pub public: BTreeMap<String, Value>,
    pub env: BTreeMap<String, Value>,
}

/// Configuration values resolved from explicit writes and an environment source.
#[derive(Debug, Clone)]
pub struct ConfigStore<E = SystemEnv> {
    public: BTreeMap<String, Value>,
    env: BTreeMap<String, Value>,
    options: StoreOptions,
    source: E,
}

impl ConfigStore<SystemEnv> {
    /// Create an empty store reading the process environment with default options.
    pub fn new() -> Self {
        Self::with_env(SystemEnv)
    }
}

impl Default for ConfigStore<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> ConfigStore<E> {
    /// Create an empty store over a custom environment source.
    pub fn with_env(source: E) -> Self {
        Self::with_options(source, StoreOptions::default())
    }

    pub fn with_options(source: E, options: StoreOptions) -> Self {
        Self {
            public: BTreeMap::new(),
            env: BTreeMap::new(),
            options,
            source,
        }
    }

    pub fn env_source(&self) -> &E {
        &self.source
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn set_options(&mut self, options: StoreOptions) {
        self.options = options;
    }

    pub fn use_environment(&self) -> bool {
        self.options.use_environment
    }

    pub fn set_use_environment(&mut self, use_environment: bool) {
        self.options.use_environment = use_environment;
    }

    pub fn immutable(&self) -> bool {
        self.options.immutable
    }

    pub fn set_immutable(&mut self, immutable: bool) {
        self.options.immutable = immutable;
    }

    /// Snapshot both maps.
    pub fn all(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            public: self.public.clone(),
            env: self.env.clone(),
        }
    }

    /// Write each entry through [`set`](Self::set), so every key goes through
    /// the same environment-aware resolution as a single write.
    pub fn set_many<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in values {
            self.set(key, value);
        }
    }

    /// Write into the public map, bypassing environment resolution.
    pub fn set_public(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.public.insert(key.into(), value.into());
    }

    /// Serialize `value` and write it into the public map.
    ///
    /// Struct fields become object fields reachable with dot-notation keys.
    pub fn set_public_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), ConfigError> {
        let value = serde_json::to_value(value)?;
        self.set_public(key, value);
        Ok(())
    }

    pub fn get_public(&self, key: &str) -> Option<&Value> {
        self.public.get(key)
    }

    pub fn contains_public(&self, key: &str) -> bool {
        self.public.contains_key(key)
    }

    /// Resolve `key`.
    ///
    /// With `use_environment` off only the public map is read. Otherwise the
    /// shadow map is read first, then the environment source, then the
    /// public map. Environment values are returned as strings.
    pub fn get(&self, key: &str) -> Option<Value> {
        if !self.options.use_environment {
            tracing::trace!(key, source = "public", "Resolved configuration read");
            return self.public.get(key).cloned();
        }

        if let Some(value) = self.env.get(key) {
            tracing::trace!(key, source = "shadow", "Resolved configuration read");
            return Some(value.clone());
        }

        if let Some(value) = self.source.var(key) {
            tracing::trace!(key, source = "environment", "Resolved configuration read");
            return Some(Value::String(value));
        }

        tracing::trace!(key, source = "public", "Resolved configuration read");
        self.public.get(key).cloned()
    }

    /// Resolve `key` like [`get`](Self::get) and deserialize the result.
    ///
    /// Absence is `Ok(None)`. A value of the wrong shape is
    /// `ConfigError::TypeMismatch`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.get(key)
            .map(|value| {
                serde_json::from_value(value).map_err(|e| ConfigError::TypeMismatch {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Write `key`, letting the environment take precedence as configured.
    ///
    /// - `use_environment` off: the value goes to the public map.
    /// - Key already shadowed: the shadow entry is replaced unless immutable.
    /// - Key set in the environment: a shadow entry is created holding the
    ///   environment's value when immutable, or `value` otherwise.
    /// - Anything else goes to the public map.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> SetOutcome {
        let key = key.into();
        let value = value.into();

        let outcome = if !self.options.use_environment {
            self.public.insert(key.clone(), value);
            SetOutcome::Public
        } else if let Some(existing) = self.env.get_mut(&key) {
            if self.options.immutable {
                SetOutcome::ShadowKept
            } else {
                *existing = value;
                SetOutcome::ShadowOverride
            }
        } else {
            match self.source.var(&key) {
                None => {
                    self.public.insert(key.clone(), value);
                    SetOutcome::Public
                }
                Some(from_env) if self.options.immutable => {
                    self.env.insert(key.clone(), Value::String(from_env));
                    SetOutcome::EnvironmentPinned
                }
                Some(_) => {
                    self.env.insert(key.clone(), value);
                    SetOutcome::ShadowOverride
                }
            }
        };

        tracing::debug!(
            key = %key,
            outcome = outcome.as_str(),
            "Resolved configuration write"
        );
        outcome
    }

    /// Serialize `value` and write it through [`set`](Self::set).
    pub fn set_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<SetOutcome, ConfigError> {
        let value = serde_json::to_value(value)?;
        Ok(self.set(key, value))
    }

    /// Resolve a dot-notation `key` across the shadow map, then the public map.
    pub fn lookup_path(&self, key: &str) -> Option<&Value> {
        path::lookup(&self.env, key).or_else(|| path::lookup(&self.public, key))
    }

    /// Resolve a dot-notation `key`, returning `default` when no map has it.
    ///
    /// Each map is tried in turn. An exact top-level match is returned as-is;
    /// a segment walk only wins if its result differs from `default`. Only the
    /// two maps are searched; the environment source is not consulted.
    pub fn get_by_key(&self, key: &str, default: impl Into<Value>) -> Value {
        let default = default.into();
        for map in [&self.env, &self.public] {
            if let Some(value) = map.get(key) {
                return value.clone();
            }
            if let Some(value) = path::walk(map, key)
                && *value != default
            {
                return value.clone();
            }
        }
        default
    }
}
