//! Error construction and classification tests

use digistore_domain::Error;

#[test]
fn not_found_carries_resource_name() {
    let err = Error::not_found("Product abc123");
    assert_eq!(err.to_string(), "Not found: Product abc123");
    assert!(err.is_client_error());
}

#[test]
fn validation_is_a_client_error() {
    let err = Error::validation("You have already given the review");
    assert!(err.is_client_error());
    assert!(err.to_string().contains("already given"));
}

#[test]
fn upstream_errors_are_not_client_errors() {
    assert!(!Error::payment_ledger("price create failed").is_client_error());
    assert!(!Error::media_host("upload failed").is_client_error());
    assert!(!Error::database("write failed").is_client_error());
}

#[test]
fn source_errors_are_preserved() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let err = Error::payment_ledger_with_source("request failed", io);
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert!(source.to_string().contains("timed out"));
}
