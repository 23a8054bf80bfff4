//! # Domain
//!
//! The stanza engine. Everything in this crate is a pure function of its
//! inputs: no I/O, no logging, no shared state.
//!
//! - [`codec`]: reversible escaping of boundary markers that must not split
//! - [`normalize`]: noise stripping and boundary repair for one document
//! - [`split`]: partitioning normalized text into stanzas
//! - [`analytics`]: frequency table, classifier and line attributor
//! - [`pipeline`]: the full corpus analysis

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod codec;
pub mod config;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod split;

pub use analytics::{Classifier, FrequencyTable, LineAttributor};
pub use config::{AnalysisConfig, AnalysisMode, CountBound, CountRange, Mask, ResolvedRange};
pub use model::{
    AnalysisOutcome, AnalysisSummary, CommonStanza, ConfigDocument, Corpus, Findings, Residual, Stanza,
    UniqueLine,
};
pub use normalize::{NormalizedDocument, Normalizer};
pub use pipeline::{PreparedCorpus, analyze, prepare};
