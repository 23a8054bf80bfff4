// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;

pub use filesystem::FsDocumentSource;
pub use persistence::{FileReader, FileWriter};
pub use progress::TracingProgress;
