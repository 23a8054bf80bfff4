use confdiff_domain::AnalysisOutcome;
use confdiff_ports::LoadFailure;
use serde::Serialize;

/// Result of one run: the analysis plus every input that was left out.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
    pub skipped: Vec<LoadFailure>,
}

impl AnalysisReport {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
