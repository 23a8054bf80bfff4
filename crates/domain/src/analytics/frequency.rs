// crates/domain/src/analytics/frequency.rs
use confdiff_shared_kernel::StanzaCount;
use hashbrown::HashMap;

use crate::model::Stanza;

/// Corpus-wide occurrence count per exact stanza text.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<Stanza, StanzaCount>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every stanza of every sequence, intra-document repeats included.
    pub fn from_sequences<'a, I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = &'a [Stanza]>,
    {
        let mut table = Self::new();
        for sequence in sequences {
            table.record_all(sequence);
        }
        table
    }

    pub fn record(&mut self, stanza: &Stanza) {
        if let Some(count) = self.counts.get_mut(stanza) {
            count.bump();
        } else {
            self.counts.insert(stanza.clone(), StanzaCount::new(1));
        }
    }

    pub fn record_all(&mut self, sequence: &[Stanza]) {
        for stanza in sequence {
            self.record(stanza);
        }
    }

    /// Count for `text` (encoded form); zero when never seen.
    pub fn count(&self, text: &str) -> StanzaCount {
        self.counts.get(text).copied().unwrap_or_default()
    }

    /// Number of distinct stanza texts.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the total number of stanzas recorded.
    pub fn total(&self) -> StanzaCount {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Stanza, StanzaCount)> {
        self.counts.iter().map(|(stanza, count)| (stanza, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stanzas(texts: &[&str]) -> Vec<Stanza> {
        texts.iter().copied().map(Stanza::new).collect()
    }

    #[test]
    fn counts_across_and_within_documents() {
        let a = stanzas(&["vlan 10", "vlan 20", "vlan 10"]);
        let b = stanzas(&["vlan 10", ""]);
        let table = FrequencyTable::from_sequences([a.as_slice(), b.as_slice()]);

        assert_eq!(table.count("vlan 10"), 3usize);
        assert_eq!(table.count("vlan 20"), 1usize);
        assert_eq!(table.count(""), 1usize);
        assert!(table.count("vlan 30").is_zero());
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5usize);
    }

    #[test]
    fn independent_of_document_order() {
        let a = stanzas(&["x", "y"]);
        let b = stanzas(&["y", "z", "y"]);
        let forward = FrequencyTable::from_sequences([a.as_slice(), b.as_slice()]);
        let backward = FrequencyTable::from_sequences([b.as_slice(), a.as_slice()]);

        for text in ["x", "y", "z"] {
            assert_eq!(forward.count(text), backward.count(text));
        }
    }

    #[test]
    fn empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert!(table.total().is_zero());
    }
}
