// crates/infra/src/progress.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use confdiff_ports::ProgressSink;
use confdiff_shared_kernel::{DeviceId, Result};

/// Reports loading progress through `tracing` events.
#[derive(Debug, Default)]
pub struct TracingProgress {
    seen: AtomicUsize,
}

impl TracingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn seen(&self) -> usize {
        self.seen.load(Ordering::Relaxed)
    }
}

impl ProgressSink for TracingProgress {
    fn on_document(&self, device: &DeviceId) -> Result<()> {
        let n = self.seen.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(device = %device, n, "document accepted");
        Ok(())
    }

    fn on_complete(&self, loaded: usize) -> Result<()> {
        tracing::info!(loaded, "corpus assembled");
        Ok(())
    }
}
