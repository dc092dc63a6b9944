//! Environment variable sources.
//!
//! Responsibilities:
//! - Define the [`EnvSource`] seam between the store and the process environment.
//! - Provide the process-backed [`SystemEnv`] and the map-backed [`InMemoryEnv`].
//! - Provide [`env_var_or_none`] for reading option variables with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Precedence between environment and explicit values (see store/mod.rs).
//!
//! Invariants:
//! - Lookups are by exact, case-sensitive name.
//! - Sources never fail: an unreadable or invalid name is reported as unset.
//! - Store resolution sees raw values; only [`env_var_or_none`] trims.

use std::cell::RefCell;
use std::collections::HashMap;

/// Read-only access to a table of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns true if `key` is set, even to an empty string.
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Reads the environment of the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Names the platform cannot represent are never set.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability so variables can be changed while a
/// store holds the source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            vars: RefCell::new(vars),
        }
    }
}

impl EnvSource for InMemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }
}

/// Trim `value`, returning None if it is empty or whitespace-only.
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        // No trimming needed, return original to avoid allocation
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    SystemEnv.var(key).and_then(non_blank)
}
