// crates/domain/src/analytics/attribution.rs
use confdiff_shared_kernel::DeviceId;
use hashbrown::HashMap;

use crate::{
    codec,
    model::{Residual, UniqueLine},
};

/// Pinpoints lines that exist in exactly one place across all residual stanzas.
pub struct LineAttributor;

impl LineAttributor {
    /// Occurrences of every non-blank residual line, across all devices.
    pub fn line_counts(residuals: &[Residual]) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for line in residuals.iter().flat_map(|r| r.stanzas.iter()).flat_map(|s| s.lines()) {
            if line.trim().is_empty() {
                continue;
            }
            *counts.entry(line).or_insert(0) += 1;
        }
        counts
    }

    /// Lines with a global count of exactly one, ordered by device (as in
    /// `devices`) and then by position. Peers are every other device.
    pub fn attribute(residuals: &[Residual], devices: &[DeviceId]) -> Vec<UniqueLine> {
        let counts = Self::line_counts(residuals);
        let mut unique = Vec::new();

        for residual in residuals {
            let peers: Vec<DeviceId> =
                devices.iter().filter(|device| **device != residual.device).cloned().collect();
            for line in residual.stanzas.iter().flat_map(|s| s.lines()) {
                if counts.get(line).copied() == Some(1) {
                    unique.push(UniqueLine {
                        device: residual.device.clone(),
                        line: codec::decode(line).into_owned(),
                        peers: peers.clone(),
                    });
                }
            }
        }
        unique
    }
}
