// crates/shared-kernel/src/value_objects/counts.rs
use std::{iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// Number of times a stanza (or line) was seen across the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StanzaCount(usize);

impl StanzaCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Increment in place, saturating at `usize::MAX`.
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for StanzaCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for StanzaCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<usize> for StanzaCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<StanzaCount> for usize {
    fn from(value: StanzaCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for StanzaCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Sum for StanzaCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a StanzaCount> for StanzaCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

mod display {
    use std::fmt;

    use super::StanzaCount;

    impl fmt::Display for StanzaCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
