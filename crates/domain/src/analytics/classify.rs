// crates/domain/src/analytics/classify.rs
use confdiff_shared_kernel::DeviceId;

use crate::{
    analytics::FrequencyTable,
    config::ResolvedRange,
    model::{CommonStanza, Residual, Stanza},
};

/// Labels stanzas common or residual from their corpus counts.
pub struct Classifier;

impl Classifier {
    /// Non-blank stanzas whose count lies in `range`, ascending by text.
    pub fn common(table: &FrequencyTable, range: ResolvedRange) -> Vec<CommonStanza> {
        let mut selected: Vec<(&Stanza, _)> = table
            .iter()
            .filter(|(stanza, count)| !stanza.is_blank() && range.contains(count.value()))
            .collect();
        selected.sort_by(|(a, _), (b, _)| a.display_text().cmp(&b.display_text()).then_with(|| a.cmp(b)));

        selected
            .into_iter()
            .map(|(stanza, count)| CommonStanza { text: stanza.display_text().into_owned(), count })
            .collect()
    }

    /// Whether `stanza` counts as common in diff mode.
    #[inline]
    pub fn is_common(table: &FrequencyTable, stanza: &Stanza, threshold: Option<usize>) -> bool {
        threshold.is_some_and(|max| table.count(stanza.as_str()).value() > max)
    }

    /// Per device, the non-blank stanzas not seen more than `threshold` times,
    /// in document order. `threshold == None` means nothing is common.
    pub fn residuals<'a, I>(table: &FrequencyTable, documents: I, threshold: Option<usize>) -> Vec<Residual>
    where
        I: IntoIterator<Item = (&'a DeviceId, &'a [Stanza])>,
    {
        documents
            .into_iter()
            .map(|(device, sequence)| Residual {
                device: device.clone(),
                stanzas: sequence
                    .iter()
                    .filter(|stanza| !stanza.is_blank() && !Self::is_common(table, stanza, threshold))
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(texts: &[&str]) -> Vec<Stanza> {
        texts.iter().copied().map(Stanza::new).collect()
    }

    #[test]
    fn common_respects_inclusive_range_and_skips_blanks() {
        let a = seq(&["", "b", "a", "only-a"]);
        let b = seq(&["", "a", "b"]);
        let table = FrequencyTable::from_sequences([a.as_slice(), b.as_slice()]);

        let common = Classifier::common(&table, ResolvedRange { min: 2, max: Some(2) });
        let texts: Vec<_> = common.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
        assert!(common.iter().all(|c| c.count == 2usize));
    }

    #[test]
    fn common_output_is_decoded_and_sorted_by_visible_text() {
        let a = seq(&["z", "x\u{E000}"]);
        let table = FrequencyTable::from_sequences([a.as_slice()]);
        let common = Classifier::common(&table, ResolvedRange { min: 1, max: None });
        let texts: Vec<_> = common.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["x!", "z"]);
    }

    #[test]
    fn residuals_keep_order_and_drop_common_and_blank() {
        let r1 = DeviceId::from("r1");
        let r2 = DeviceId::from("r2");
        let a = seq(&["hostname r1", "", "shared", "ntp server 1"]);
        let b = seq(&["hostname r2", "shared", ""]);
        let table = FrequencyTable::from_sequences([a.as_slice(), b.as_slice()]);

        let residuals = Classifier::residuals(&table, [(&r1, a.as_slice()), (&r2, b.as_slice())], Some(1));
        assert_eq!(residuals[0].stanzas, seq(&["hostname r1", "ntp server 1"]));
        assert_eq!(residuals[1].stanzas, seq(&["hostname r2"]));
    }

    #[test]
    fn unbounded_threshold_leaves_everything_residual() {
        let r1 = DeviceId::from("r1");
        let a = seq(&["x", "x"]);
        let table = FrequencyTable::from_sequences([a.as_slice()]);
        let residuals = Classifier::residuals(&table, [(&r1, a.as_slice())], None);
        assert_eq!(residuals[0].stanzas.len(), 2);
    }
}
