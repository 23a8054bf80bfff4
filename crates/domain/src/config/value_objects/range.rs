// crates/domain/src/config/value_objects/range.rs
use confdiff_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

use super::CountBound;

/// Inclusive count range as configured, before the corpus size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: CountBound,
    pub max: CountBound,
}

impl CountRange {
    pub fn new(min: CountBound, max: CountBound) -> Self {
        Self { min, max }
    }

    pub fn exactly(count: usize) -> Self {
        Self::new(CountBound::Exact(count), CountBound::Exact(count))
    }

    /// Present once in every document.
    pub fn all() -> Self {
        Self::new(CountBound::All, CountBound::All)
    }

    /// Reject ranges that are inverted regardless of corpus size.
    pub fn check(&self) -> DomainResult<()> {
        match (self.min, self.max) {
            (CountBound::Exact(min), CountBound::Exact(max)) if min > max => {
                Err(DomainError::InvertedRange { min, max })
            }
            _ => Ok(()),
        }
    }

    pub fn resolve(&self, corpus_size: usize) -> DomainResult<ResolvedRange> {
        let min = self.min.resolve_lower(corpus_size);
        let max = self.max.resolve_upper(corpus_size);
        match max {
            Some(max) if min > max => Err(DomainError::InvertedRange { min, max }),
            _ => Ok(ResolvedRange { min, max }),
        }
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self::all()
    }
}

/// Inclusive range with concrete bounds; `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    pub min: usize,
    pub max: Option<usize>,
}

impl ResolvedRange {
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        value >= self.min && self.max.is_none_or(|m| value <= m)
    }
}
