//! Configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_QUERY_LIMIT};
use dsvec_domain::DistanceMeasure;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults applied to nearest-neighbor requests
    #[serde(default)]
    pub query: QueryDefaultsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for nearest-neighbor requests
///
/// Used for any parameter a caller leaves unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaultsConfig {
    /// Result limit
    pub limit: u32,

    /// Distance measure
    pub distance_measure: DistanceMeasure,

    /// Output field for computed distances
    pub distance_result_field: Option<String>,

    /// Distance cutoff, applied in the measure's direction
    pub distance_threshold: Option<f64>,
}

impl Default for QueryDefaultsConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_QUERY_LIMIT,
            distance_measure: DistanceMeasure::default(),
            distance_result_field: None,
            distance_threshold: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
