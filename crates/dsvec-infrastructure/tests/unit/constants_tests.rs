//! Infrastructure constants tests

use dsvec_infrastructure::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILENAME, DEFAULT_LOG_LEVEL,
    DEFAULT_QUERY_LIMIT, LOG_FILTER_ENV,
};

#[test]
fn test_config_constants() {
    assert_eq!(CONFIG_ENV_PREFIX, "DSVEC");
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
}

#[test]
fn test_defaults_are_valid() {
    assert_eq!(DEFAULT_LOG_LEVEL, "info");
    assert!(LOG_FILTER_ENV.starts_with(CONFIG_ENV_PREFIX));
    assert!((dsvec_domain::MIN_NEAREST_LIMIT..=dsvec_domain::MAX_NEAREST_LIMIT)
        .contains(&DEFAULT_QUERY_LIMIT));
}
