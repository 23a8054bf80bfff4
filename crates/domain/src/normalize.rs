//! Per-document normalization.
//!
//! Steps run in a fixed order and never reorder lines:
//! comment harvesting, hostname fix-up, noise stripping, boundary escaping,
//! then optional masking.

pub mod rules;

use serde::Serialize;

use crate::{
    codec::{self, BOUNDARY},
    config::{AnalysisConfig, Mask},
};

/// Cleaned text plus the `!!` comments found in the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDocument {
    pub text: String,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    mask: Option<Mask>,
}

impl Normalizer {
    pub fn new(mask: Option<Mask>) -> Self {
        Self { mask }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.mask.clone())
    }

    pub fn normalize(&self, raw: &str) -> NormalizedDocument {
        let comments = harvest_comments(raw);
        let fixed = fix_hostname(raw);
        let stripped = strip_noise(&fixed);
        let escaped = codec::encode(&stripped);
        let text = match &self.mask {
            Some(mask) => mask.apply(&escaped).into_owned(),
            None => escaped.into_owned(),
        };
        NormalizedDocument { text, comments }
    }
}

/// Split a `split_inclusive('\n')` segment into line body and terminator.
pub(crate) fn split_line(segment: &str) -> (&str, &str) {
    let body = segment.trim_end_matches(['\n', '\r']).len();
    segment.split_at(body)
}

/// Collect every double-marker comment line. The text itself is untouched.
pub fn harvest_comments(raw: &str) -> Vec<String> {
    raw.split_inclusive('\n')
        .map(|segment| split_line(segment).0)
        .filter(|line| rules::is_comment(line))
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Insert a boundary line after every `hostname <value>` line unless the next
/// surviving line already is one.
pub fn fix_hostname(raw: &str) -> String {
    let segments: Vec<&str> = raw.split_inclusive('\n').collect();
    let mut out = String::with_capacity(raw.len() + 8);

    for (idx, segment) in segments.iter().enumerate() {
        out.push_str(segment);
        let (line, terminator) = split_line(segment);
        if !rules::is_hostname(line) {
            continue;
        }

        let next_is_boundary = segments[idx + 1..]
            .iter()
            .map(|next| split_line(next).0)
            .find(|next| !rules::is_noise(next))
            .is_some_and(codec::is_boundary_line);
        if next_is_boundary {
            continue;
        }

        if terminator.is_empty() {
            out.push('\n');
            out.push(BOUNDARY);
        } else {
            out.push(BOUNDARY);
            out.push_str(terminator);
        }
    }
    out
}

/// Drop every line matched by a noise rule, terminator included.
pub fn strip_noise(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|segment| !rules::is_noise(split_line(segment).0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> String {
        Normalizer::default().normalize(raw).text
    }

    #[test]
    fn harvests_comments_without_removing_them() {
        let raw = "!! owner: netops\nhostname R1\n   !! temp fix  \n!\n";
        let comments = harvest_comments(raw);
        assert_eq!(comments, vec!["!! owner: netops".to_string(), "   !! temp fix".to_string()]);
    }

    #[test]
    fn hostname_fixup_inserts_boundary() {
        let raw = "hostname R1\nip name-server vrf mgmt 10.0.0.53\n!\n";
        assert_eq!(fix_hostname(raw), "hostname R1\n!\nip name-server vrf mgmt 10.0.0.53\n!\n");
    }

    #[test]
    fn hostname_fixup_respects_existing_boundary() {
        let raw = "hostname R1\n!\ninterface Eth1\n";
        assert_eq!(fix_hostname(raw), raw);
    }

    #[test]
    fn hostname_fixup_looks_past_noise_lines() {
        let raw = "hostname R1\n!! note\n!\n";
        assert_eq!(fix_hostname(raw), raw);
    }

    #[test]
    fn hostname_fixup_on_last_line_without_newline() {
        assert_eq!(fix_hostname("hostname R1"), "hostname R1\n!");
    }

    #[test]
    fn hostname_fixup_keeps_crlf_terminators() {
        assert_eq!(fix_hostname("hostname R1\r\nvlan 10\r\n"), "hostname R1\r\n!\r\nvlan 10\r\n");
    }

    #[test]
    fn strips_noise_lines_entirely() {
        let raw = "! Command: show running-config\n!RANCID-CONTENT-TYPE: arista\n! boot system flash:EOS.swi\n> show run\nvlan 10\n!\nend\n";
        assert_eq!(strip_noise(raw), "vlan 10\n!\n");
    }

    #[test]
    fn full_normalization_of_a_small_dump() {
        let raw = "! Command: show running-config\nhostname R1\n!! audit note\nip routing\n!\nrouter bgp 1\n   !\n   neighbor 10.0.0.1 remote-as 2\n!\nend\n";
        let doc = Normalizer::default().normalize(raw);
        assert_eq!(
            doc.text,
            "hostname R1\n!\nip routing\n!\nrouter bgp 1\n   \u{E000}\n   neighbor 10.0.0.1 remote-as 2\n!\n"
        );
        assert_eq!(doc.comments, vec!["!! audit note".to_string()]);
    }

    #[test]
    fn masking_is_applied_last() {
        let mask = Mask::new("description").expect("valid mask");
        let doc = Normalizer::new(Some(mask)).normalize("interface Eth1\n   Description Uplink to spine!\n");
        assert_eq!(doc.text, "interface Eth1\n   <masked>\n");
    }

    #[test]
    fn normalization_is_idempotent_on_sample() {
        let raw = "hostname R1\n! boot system flash:x\nvlan 10\n   name web!\n!\nend";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}
