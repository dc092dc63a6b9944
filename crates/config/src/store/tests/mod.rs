//! Tests for the configuration store.
//!
//! Responsibilities:
//! - Test read precedence across the shadow map, environment source, and public map.
//! - Test write precedence under each combination of resolution switches.
//! - Test dot-notation lookups and snapshots.
//!
//! Invariants:
//! - Tests use `InMemoryEnv` and never touch the process environment.

use crate::env::InMemoryEnv;
use crate::options::StoreOptions;
use crate::store::ConfigStore;


/// Build a store over an in-memory environment holding `vars`.
pub fn store_with<const N: usize>(
    vars: [(&str, &str); N],
    options: StoreOptions,
) -> ConfigStore<InMemoryEnv> {
    ConfigStore::with_options(InMemoryEnv::from_iter(vars), options)
}

pub fn mutable() -> StoreOptions {
    StoreOptions::default().with_immutable(false)
}

pub fn env_disabled() -> StoreOptions {
    StoreOptions::default().with_use_environment(false)
}
