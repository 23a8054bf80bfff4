pub mod config;

pub use config::{AnalysisConfig, AnalysisMode};
