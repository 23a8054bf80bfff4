// crates/shared-kernel/tests/error_context.rs
use std::io;

use confdiff_shared_kernel::{ConfdiffError, DomainError, ErrorContext};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(ConfdiffError::from)
        .context("reading leaf1.txt")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading leaf1.txt"));
    assert!(display.contains("I/O failure: root-io"));
}

#[test]
fn with_context_is_lazy_and_keeps_domain_source() {
    let result: std::result::Result<(), DomainError> =
        Err(DomainError::InvertedRange { min: 4, max: 2 });
    let err = result.with_context(|| "resolving count range".to_string()).unwrap_err();

    match err {
        ConfdiffError::Context { context, source } => {
            assert_eq!(context, "resolving count range");
            assert!(matches!(*source, ConfdiffError::Domain(DomainError::InvertedRange { .. })));
        }
        other => panic!("unexpected error shape: {other:?}"),
    }
}
