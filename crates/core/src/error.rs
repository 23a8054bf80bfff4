//! Re-export error types from the shared kernel crate.

pub use confdiff_shared_kernel::{
    ApplicationError, ApplicationResult, ConfdiffError, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, PresentationResult, Result,
};
