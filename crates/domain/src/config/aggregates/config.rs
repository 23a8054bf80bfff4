// crates/domain/src/config/aggregates/config.rs
use confdiff_shared_kernel::DomainResult;

use crate::config::value_objects::{CountBound, CountRange, Mask};

/// Which classification the analysis produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Stanzas whose corpus count lies in the inclusive range.
    Common(CountRange),
    /// Stanzas seen more than `threshold` times are common; the rest are
    /// residual per device and go through line attribution.
    Diffs { threshold: CountBound },
}

impl AnalysisMode {
    pub fn common() -> Self {
        Self::Common(CountRange::all())
    }

    pub fn diffs() -> Self {
        Self::Diffs { threshold: CountBound::Exact(1) }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Common(_) => "common",
            Self::Diffs { .. } => "diffs",
        }
    }
}

impl Default for AnalysisMode {
    fn default() -> Self {
        Self::common()
    }
}

/// Everything the engine needs to know about one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub mode: AnalysisMode,
    pub mask: Option<Mask>,
}

impl AnalysisConfig {
    pub fn new(mode: AnalysisMode) -> Self {
        Self { mode, mask: None }
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Checks that do not depend on the corpus.
    pub fn validate(&self) -> DomainResult<()> {
        match &self.mode {
            AnalysisMode::Common(range) => range.check(),
            AnalysisMode::Diffs { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behaviour() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Common(CountRange::all()));
        assert_eq!(AnalysisMode::diffs(), AnalysisMode::Diffs { threshold: CountBound::Exact(1) });
    }

    #[test]
    fn validate_rejects_inverted_numeric_range() {
        let config = AnalysisConfig::new(AnalysisMode::Common(CountRange::new(
            CountBound::Exact(3),
            CountBound::Exact(1),
        )));
        assert!(config.validate().is_err());
    }

    #[test]
    fn with_mask_sets_mask() {
        let config = AnalysisConfig::new(AnalysisMode::diffs()).with_mask(Mask::new("description").unwrap());
        assert_eq!(config.mask.as_ref().map(Mask::keyword), Some("description"));
        assert_eq!(config.mode.name(), "diffs");
    }
}
