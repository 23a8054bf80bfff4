// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Any failure a confdiff run can report, grouped by the layer that raised it.
#[derive(Debug, Error)]
pub enum ConfdiffError {
    /// A layer error annotated with what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ConfdiffError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, ConfdiffError>;

/// Rejected analysis settings or corpus shape.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid count bound '{value}': expected a number, 'all' or 'none'")]
    InvalidCountBound { value: String },

    #[error("invalid count range: min {min} is greater than max {max}")]
    InvertedRange { min: usize, max: usize },

    #[error("invalid mask '{pattern}': {details}")]
    InvalidMask { pattern: String, details: String },

    #[error("device '{device}' appears more than once in the corpus")]
    DuplicateDevice { device: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("corpus incomplete: {reason}")]
    DocumentLoadFailed {
        reason: String,
        #[source]
        source: Option<Box<ConfdiffError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Filesystem and encoding failures.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("cannot read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 text")]
    NotText { path: PathBuf },

    #[error("cannot encode report as {format}: {details}")]
    Encode { format: &'static str, details: String },

    #[error("invalid include pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("cannot list '{path}': {details}")]
    Walk { path: PathBuf, details: String },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Bad command-line input or an output the build cannot produce.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("{flag} {value}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    ConfigBuildFailed(String),

    #[error("output format '{0}' is not available in this build")]
    UnsupportedFormat(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for ConfdiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<serde_json::Error> for ConfdiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Infrastructure(InfrastructureError::Encode { format: "JSON", details: err.to_string() })
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ConfdiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Infrastructure(InfrastructureError::Encode { format: "YAML", details: err.to_string() })
    }
}

/// Attach a description of the failed step to any layer error.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context(self, f: impl FnOnce() -> String) -> Result<T>;
}

impl<T, E: Into<ConfdiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context(self, f: impl FnOnce() -> String) -> Result<T> {
        self.map_err(|err| ConfdiffError::Context { context: f(), source: Box::new(err.into()) })
    }
}
