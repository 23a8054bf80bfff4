//! # confdiff core
//!
//! Application facade over the stanza engine: CLI parsing, run
//! configuration, wiring of the filesystem adapter into the use case, and
//! output formatting.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use bootstrap::{RunStatus, run, run_with_config};
pub use config::{OutputFormat, RunConfig, RunConfigBuilder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
