//! Nearest-neighbor request service tests

use dsvec_domain::{DistanceMeasure, Error, Vector};
use dsvec_infrastructure::{AppConfig, NearestQueryOverrides, NearestQueryService, QueryDefaultsConfig};

fn service() -> NearestQueryService {
    NearestQueryService::new(QueryDefaultsConfig {
        limit: 20,
        distance_measure: DistanceMeasure::Cosine,
        distance_result_field: Some("distance".to_string()),
        distance_threshold: None,
    })
}

#[test]
fn test_defaults_fill_unset_parameters() {
    let request = service()
        .build("embedding", Vector::new([1, 0]), &NearestQueryOverrides::default())
        .unwrap();

    assert_eq!(request.vector_property.name, "embedding");
    assert_eq!(request.limit.value, 20);
    assert_eq!(request.distance_measure, DistanceMeasure::Cosine);
    assert_eq!(request.distance_result_property.as_deref(), Some("distance"));
    assert!(request.distance_threshold.is_none());
}

#[test]
fn test_overrides_take_precedence() {
    let overrides = NearestQueryOverrides {
        limit: Some(5),
        distance_measure: Some(DistanceMeasure::DotProduct),
        distance_result_field: Some("score".to_string()),
        distance_threshold: Some(0.9),
    };
    let request = service()
        .build("embedding", vec![0.1, 0.2], &overrides)
        .unwrap();

    assert_eq!(request.limit.value, 5);
    assert_eq!(request.distance_measure, DistanceMeasure::DotProduct);
    assert_eq!(request.distance_result_property.as_deref(), Some("score"));
    assert_eq!(request.distance_threshold.map(|t| t.value), Some(0.9));
}

#[test]
fn test_options_resolution_without_validation() {
    let overrides = NearestQueryOverrides {
        limit: Some(0),
        ..NearestQueryOverrides::default()
    };
    let options = service().options("embedding", Vec::<f64>::new(), &overrides);
    assert_eq!(options.limit, 0);
    assert_eq!(options.distance_measure, DistanceMeasure::Cosine);
}

#[test]
fn test_invalid_request_is_rejected() {
    let overrides = NearestQueryOverrides {
        limit: Some(2000),
        ..NearestQueryOverrides::default()
    };
    let result = service().build("embedding", Vector::new([1]), &overrides);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_from_app_config() {
    let mut config = AppConfig::default();
    config.query.limit = 3;
    let service = NearestQueryService::from_config(&config);
    assert_eq!(service.defaults().limit, 3);
    assert_eq!(service.defaults().distance_measure, DistanceMeasure::Euclidean);
}

#[test]
fn test_configured_threshold_dropped_when_measure_changes() {
    let service = NearestQueryService::new(QueryDefaultsConfig {
        distance_measure: DistanceMeasure::Euclidean,
        distance_threshold: Some(0.5),
        ..QueryDefaultsConfig::default()
    });
    let overrides = NearestQueryOverrides {
        distance_measure: Some(DistanceMeasure::DotProduct),
        ..NearestQueryOverrides::default()
    };

    let request = service
        .build("embedding", Vector::new([1, 2]), &overrides)
        .unwrap();
    assert_eq!(request.distance_measure, DistanceMeasure::DotProduct);
    assert!(request.distance_threshold.is_none());
}

#[test]
fn test_configured_threshold_kept_for_same_measure() {
    let service = NearestQueryService::new(QueryDefaultsConfig {
        distance_measure: DistanceMeasure::Cosine,
        distance_threshold: Some(0.3),
        ..QueryDefaultsConfig::default()
    });
    let overrides = NearestQueryOverrides {
        distance_measure: Some(DistanceMeasure::Cosine),
        ..NearestQueryOverrides::default()
    };

    let options = service.options("embedding", vec![1.0], &overrides);
    assert_eq!(options.distance_threshold, Some(0.3));

    let inherited = service.options("embedding", vec![1.0], &NearestQueryOverrides::default());
    assert_eq!(inherited.distance_threshold, Some(0.3));
}

#[test]
fn test_explicit_threshold_survives_measure_change() {
    let service = NearestQueryService::new(QueryDefaultsConfig {
        distance_measure: DistanceMeasure::Euclidean,
        distance_threshold: Some(0.5),
        ..QueryDefaultsConfig::default()
    });
    let overrides = NearestQueryOverrides {
        distance_measure: Some(DistanceMeasure::DotProduct),
        distance_threshold: Some(0.9),
        ..NearestQueryOverrides::default()
    };

    let options = service.options("embedding", vec![1.0], &overrides);
    assert_eq!(options.distance_threshold, Some(0.9));
}
