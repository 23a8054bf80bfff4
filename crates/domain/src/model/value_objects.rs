//! Result types handed to presenters.

pub mod outcome;

pub use outcome::{AnalysisOutcome, AnalysisSummary, CommonStanza, Findings, Residual, UniqueLine};
