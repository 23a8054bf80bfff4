// crates/ports/src/progress.rs
use confdiff_shared_kernel::{DeviceId, Result};

pub trait ProgressSink: Send + Sync {
    fn on_document(&self, device: &DeviceId) -> Result<()>;
    fn on_complete(&self, loaded: usize) -> Result<()>;
}

/// Sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_document(&self, _device: &DeviceId) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _loaded: usize) -> Result<()> {
        Ok(())
    }
}
