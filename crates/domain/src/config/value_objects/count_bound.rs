// crates/domain/src/config/value_objects/count_bound.rs
use std::{fmt, str::FromStr};

use confdiff_shared_kernel::DomainError;

/// One end of a count range, possibly symbolic until the corpus size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBound {
    Exact(usize),
    /// The number of documents in the corpus.
    All,
    /// No constraint: 0 as a lower bound, unbounded as an upper bound.
    Unbounded,
}

impl CountBound {
    pub fn resolve_lower(self, corpus_size: usize) -> usize {
        match self {
            Self::Exact(n) => n,
            Self::All => corpus_size,
            Self::Unbounded => 0,
        }
    }

    pub fn resolve_upper(self, corpus_size: usize) -> Option<usize> {
        match self {
            Self::Exact(n) => Some(n),
            Self::All => Some(corpus_size),
            Self::Unbounded => None,
        }
    }
}

impl FromStr for CountBound {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if value.eq_ignore_ascii_case("none") {
            return Ok(Self::Unbounded);
        }
        value
            .parse::<usize>()
            .map(Self::Exact)
            .map_err(|_| DomainError::InvalidCountBound { value: s.to_string() })
    }
}

impl fmt::Display for CountBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::All => f.write_str("all"),
            Self::Unbounded => f.write_str("none"),
        }
    }
}
