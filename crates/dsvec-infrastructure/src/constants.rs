//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Environment variable prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "DSVEC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dsvec.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dsvec";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "DSVEC_LOG";

/// File stem for rolling log files
pub const LOG_FILE_STEM: &str = "dsvec";

// ============================================================================
// QUERY DEFAULTS
// ============================================================================

/// Result limit used when neither the caller nor the config sets one
pub const DEFAULT_QUERY_LIMIT: u32 = 10;
