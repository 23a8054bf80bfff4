// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod device;

pub use counts::StanzaCount;
pub use device::DeviceId;
