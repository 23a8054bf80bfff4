// crates/domain/src/model/value_objects/outcome.rs
use confdiff_shared_kernel::{DeviceId, StanzaCount};
use serde::Serialize;

use crate::{config::ResolvedRange, model::Stanza};

/// A stanza selected in common mode, with its corpus count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonStanza {
    pub text: String,
    pub count: StanzaCount,
}

/// A device's stanzas that were not classified common, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Residual {
    pub device: DeviceId,
    pub stanzas: Vec<Stanza>,
}

impl Residual {
    pub fn is_empty(&self) -> bool {
        self.stanzas.is_empty()
    }
}

/// A line that occurs exactly once across all residual stanzas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniqueLine {
    pub device: DeviceId,
    pub line: String,
    pub peers: Vec<DeviceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Findings {
    Common {
        range: ResolvedRange,
        stanzas: Vec<CommonStanza>,
    },
    Diffs {
        threshold: Option<usize>,
        residuals: Vec<Residual>,
        unique_lines: Vec<UniqueLine>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub documents: usize,
    pub stanzas: StanzaCount,
    pub distinct_stanzas: usize,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisOutcome {
    pub devices: Vec<DeviceId>,
    pub summary: AnalysisSummary,
    /// Distinct `!!` comment lines seen in the corpus, sorted.
    pub comments: Vec<String>,
    pub findings: Findings,
}

impl AnalysisOutcome {
    /// True when the run found nothing to report.
    pub fn is_empty(&self) -> bool {
        match &self.findings {
            Findings::Common { stanzas, .. } => stanzas.is_empty(),
            Findings::Diffs { residuals, unique_lines, .. } => {
                unique_lines.is_empty() && residuals.iter().all(Residual::is_empty)
            }
        }
    }
}
