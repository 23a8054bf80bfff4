pub mod entities;
pub mod value_objects;

pub use entities::{ConfigDocument, Corpus, Stanza};
pub use value_objects::{AnalysisOutcome, AnalysisSummary, CommonStanza, Findings, Residual, UniqueLine};
