//! Tests for the structured events emitted by the store.
//!
//! Writes are logged at DEBUG with the key and the resolution outcome. Values
//! must never appear in log output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use layered_config::{ConfigStore, InMemoryEnv, StoreOptions, constants};

/// Shared in-memory buffer used as a `tracing_subscriber` writer.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("lock poisoned")).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn test_set_logs_key_and_outcome() {
    let env = InMemoryEnv::from_iter([("DB_PASSWORD", "hunter2")]);
    let logs = capture_logs(|| {
        let mut store = ConfigStore::with_options(env, StoreOptions::default());
        store.set("DB_PASSWORD", "s3cr3t-override");
        store.set("region", "eu-west-1");
    });

    assert!(logs.contains("Resolved configuration write"), "logs: {logs}");
    assert!(logs.contains("environment_pinned"), "logs: {logs}");
    assert!(logs.contains("outcome=\"public\"") || logs.contains("outcome=public"));
    assert!(logs.contains("DB_PASSWORD"));
}

#[test]
fn test_values_never_logged() {
    let env = InMemoryEnv::from_iter([("API_TOKEN", "env-token-value")]);
    let logs = capture_logs(|| {
        let mut store =
            ConfigStore::with_options(env, StoreOptions::default().with_immutable(false));
        store.set("API_TOKEN", "explicit-token-value");
        store.set_public("plain", "public-value");
        let _ = store.get("API_TOKEN");
        let _ = store.get("plain");
    });

    assert!(!logs.contains("env-token-value"), "logs: {logs}");
    assert!(!logs.contains("explicit-token-value"), "logs: {logs}");
    assert!(!logs.contains("public-value"), "logs: {logs}");
}

#[test]
fn test_get_logs_resolved_source() {
    let env = InMemoryEnv::from_iter([("FROM_ENV", "x")]);
    let logs = capture_logs(|| {
        let store = ConfigStore::with_env(env);
        let _ = store.get("FROM_ENV");
    });

    assert!(logs.contains("Resolved configuration read"), "logs: {logs}");
    assert!(logs.contains("environment"), "logs: {logs}");
}

#[test]
fn test_invalid_option_logged_before_error() {
    let env = InMemoryEnv::from_iter([(constants::ENV_IMMUTABLE, "sometimes")]);
    let mut result = None;
    let logs = capture_logs(|| {
        result = Some(StoreOptions::default().apply_env(&env));
    });

    assert!(matches!(result, Some(Err(_))));
    assert!(logs.contains("Invalid boolean option"), "logs: {logs}");
    assert!(logs.contains(constants::ENV_IMMUTABLE), "logs: {logs}");
    assert!(!logs.contains("sometimes"), "logs: {logs}");
}
