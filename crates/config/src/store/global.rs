//! Process-wide default store.
//!
//! Components that can take a `ConfigStore` by reference should do so. This
//! instance exists for call sites that have no natural owner to thread one
//! through.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::ConfigStore;
use crate::env::SystemEnv;

static INSTANCE: OnceLock<Mutex<ConfigStore<SystemEnv>>> = OnceLock::new();

impl ConfigStore<SystemEnv> {
    /// Return the process-wide store, creating it on first call.
    pub fn global() -> &'static Mutex<ConfigStore<SystemEnv>> {
        INSTANCE.get_or_init(|| {
            tracing::debug!("Initializing process-wide configuration store");
            Mutex::new(ConfigStore::new())
        })
    }

    /// Lock the process-wide store, recovering it if a previous holder panicked.
    pub fn lock_global() -> MutexGuard<'static, ConfigStore<SystemEnv>> {
        Self::global()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Alias for [`ConfigStore::global`].
pub fn get_instance() -> &'static Mutex<ConfigStore<SystemEnv>> {
    ConfigStore::global()
}

/// Run `f` against the locked process-wide store.
pub fn with_global<R>(f: impl FnOnce(&mut ConfigStore<SystemEnv>) -> R) -> R {
    let mut store = ConfigStore::lock_global();
    f(&mut store)
}
