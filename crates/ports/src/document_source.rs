// crates/ports/src/document_source.rs
use std::path::PathBuf;

use confdiff_shared_kernel::{DeviceId, Result};
use serde::{Deserialize, Serialize};

/// Input parameters controlling which documents get loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadPlan {
    /// Files are loaded as given; directories contribute their direct children.
    pub inputs: Vec<PathBuf>,
    /// Globs matched against file names found in directories. Empty means all.
    pub include: Vec<String>,
    /// A file naming one input per line, appended after `inputs`.
    pub files_from: Option<PathBuf>,
    pub include_hidden: bool,
}

/// One configuration dump read from an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDto {
    pub device: DeviceId,
    pub path: PathBuf,
    pub text: String,
}

/// An input that could not be turned into a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    pub input: PathBuf,
    pub reason: String,
}

impl LoadFailure {
    pub fn new(input: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self { input: input.into(), reason: reason.into() }
    }
}

/// Documents in input order, plus every input that failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadedDocuments {
    pub documents: Vec<DocumentDto>,
    pub failures: Vec<LoadFailure>,
}

/// Port for loading configuration documents.
///
/// A failure on one input is recorded in [`LoadedDocuments::failures`];
/// `Err` is reserved for problems with the plan itself.
pub trait DocumentSource: Send + Sync {
    fn load(&self, plan: &LoadPlan) -> Result<LoadedDocuments>;
}
