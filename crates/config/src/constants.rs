//! Centralized constants for the layered configuration store.

// =============================================================================
// Resolution Defaults
// =============================================================================

/// Whether the process environment is consulted by default.
pub const DEFAULT_USE_ENVIRONMENT: bool = true;

/// Whether environment-backed values win over explicit writes by default.
pub const DEFAULT_IMMUTABLE: bool = true;

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Overrides [`StoreOptions::use_environment`](crate::StoreOptions).
pub const ENV_USE_ENVIRONMENT: &str = "LAYERED_CONFIG_USE_ENVIRONMENT";

/// Overrides [`StoreOptions::immutable`](crate::StoreOptions).
pub const ENV_IMMUTABLE: &str = "LAYERED_CONFIG_IMMUTABLE";

// =============================================================================
// Key Paths
// =============================================================================

/// Separator between segments of a dot-notation key.
pub const PATH_SEPARATOR: char = '.';
