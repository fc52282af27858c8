//! Nearest-neighbor request construction
//!
//! Fills unset request parameters from [`QueryDefaultsConfig`] and builds a
//! validated [`FindNearest`] fragment.

use crate::config::{AppConfig, QueryDefaultsConfig};
use dsvec_domain::error::Result;
use dsvec_domain::{DistanceMeasure, FindNearest, QueryVector, VectorQueryOptions};
use tracing::{debug, warn};

/// Per-request parameters; `None` falls back to the configured default
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearestQueryOverrides {
    /// Result limit
    pub limit: Option<u32>,
    /// Distance measure
    pub distance_measure: Option<DistanceMeasure>,
    /// Output field for computed distances
    pub distance_result_field: Option<String>,
    /// Distance cutoff
    pub distance_threshold: Option<f64>,
}

/// Builds nearest-neighbor requests against configured defaults
///
/// # Example
///
/// ```rust
/// use dsvec_domain::Vector;
/// use dsvec_infrastructure::{NearestQueryOverrides, NearestQueryService, QueryDefaultsConfig};
///
/// let service = NearestQueryService::new(QueryDefaultsConfig::default());
/// let request = service
///     .build("embedding", Vector::new([0.5, 0.5]), &NearestQueryOverrides::default())
///     .unwrap();
/// assert_eq!(request.limit.value, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestQueryService {
    defaults: QueryDefaultsConfig,
}

impl NearestQueryService {
    /// Create a service using the given defaults
    pub fn new(defaults: QueryDefaultsConfig) -> Self {
        Self { defaults }
    }

    /// Create a service from the `query` section of the app config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.query.clone())
    }

    /// Configured defaults
    pub fn defaults(&self) -> &QueryDefaultsConfig {
        &self.defaults
    }

    /// Resolve overrides against the defaults without validating
    pub fn options(
        &self,
        vector_field: impl Into<String>,
        query_vector: impl Into<QueryVector>,
        overrides: &NearestQueryOverrides,
    ) -> VectorQueryOptions {
        let measure = overrides
            .distance_measure
            .unwrap_or(self.defaults.distance_measure);

        if overrides.distance_threshold.is_some() && overrides.distance_measure.is_none() {
            warn!(
                measure = %measure,
                "distance threshold given without a measure; direction follows the configured default"
            );
        }

        VectorQueryOptions {
            vector_field: vector_field.into(),
            query_vector: query_vector.into(),
            limit: overrides.limit.unwrap_or(self.defaults.limit),
            distance_measure: measure,
            distance_result_field: overrides
                .distance_result_field
                .clone()
                .or_else(|| self.defaults.distance_result_field.clone()),
            distance_threshold: overrides
                .distance_threshold
                .or_else(|| self.inherited_threshold(measure)),
        }
    }

    /// Configured threshold, kept only while its measure is in effect
    ///
    /// A threshold cuts in the direction of the measure it was configured
    /// for, so it is dropped when the caller picks a different measure.
    fn inherited_threshold(&self, measure: DistanceMeasure) -> Option<f64> {
        let threshold = self.defaults.distance_threshold?;
        if measure == self.defaults.distance_measure {
            return Some(threshold);
        }
        warn!(
            configured_measure = %self.defaults.distance_measure,
            measure = %measure,
            threshold,
            "dropping configured distance threshold; it was set for a different measure"
        );
        None
    }

    /// Resolve, validate and build the request fragment
    pub fn build(
        &self,
        vector_field: impl Into<String>,
        query_vector: impl Into<QueryVector>,
        overrides: &NearestQueryOverrides,
    ) -> Result<FindNearest> {
        let options = self.options(vector_field, query_vector, overrides);
        let request = FindNearest::try_from(&options).inspect_err(|err| {
            warn!(field = %options.vector_field, error = %err, "rejected nearest-neighbor options");
        })?;

        debug!(
            field = %options.vector_field,
            dimensions = options.query_vector.len(),
            limit = options.limit,
            measure = %options.distance_measure,
            threshold = ?options.distance_threshold,
            "built nearest-neighbor request"
        );
        Ok(request)
    }
}
