//! Layered configuration store.
//!
//! This crate resolves key/value settings from three places behind a single
//! lookup interface: explicitly assigned public values, an environment-shadow
//! map, and the process environment. Nested values can be reached with
//! dot-notation keys such as `database.primary.host`.

pub mod constants;
mod env;
mod error;
mod options;
mod path;
mod store;

pub use env::{EnvSource, InMemoryEnv, SystemEnv, env_var_or_none};
pub use error::ConfigError;
pub use options::StoreOptions;
pub use path::{descend, lookup, walk};
pub use serde_json::{Map, Value, json};
pub use store::{ConfigSnapshot, ConfigStore, SetOutcome, get_instance, with_global};
