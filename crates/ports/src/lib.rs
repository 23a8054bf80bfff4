//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`document_source`]: loading configuration dumps from files or directories
//! - [`progress`]: progress reporting while documents are loaded
//!
//! The use case layer only sees these traits, never a concrete adapter.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod document_source;
pub mod progress;

pub use document_source::{DocumentDto, DocumentSource, LoadFailure, LoadPlan, LoadedDocuments};
pub use progress::{NoProgress, ProgressSink};
