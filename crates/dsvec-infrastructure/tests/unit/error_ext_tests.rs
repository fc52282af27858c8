//! Error extension tests

use dsvec_domain::Error;
use dsvec_infrastructure::ErrorContext;
use std::io;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let error = failing_io().context("opening input").unwrap_err();
    match error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "opening input: denied");
            assert!(source.is_some());
        }
        _ => panic!("Expected Infrastructure error"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let error = failing_io()
        .with_context(|| format!("reading {}", "wire.json"))
        .unwrap_err();
    assert!(error.to_string().contains("reading wire.json: denied"));
}

#[test]
fn test_io_context() {
    let error = failing_io().io_context("reading stdin").unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_config_context() {
    let error = failing_io().config_context("loading dsvec.toml").unwrap_err();
    match error {
        Error::Configuration { message, .. } => assert!(message.starts_with("loading dsvec.toml")),
        _ => panic!("Expected Configuration error"),
    }
}
