// crates/shared-kernel/src/value_objects/device.rs
use std::{borrow::Borrow, fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Identity of one device in the corpus (hostname or file stem).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an identity from a config dump path: the file stem when there is one,
    /// otherwise the whole path as written.
    pub fn from_path(path: &Path) -> Self {
        path.file_stem()
            .or_else(|| path.file_name())
            .map(|s| Self(s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| Self(path.to_string_lossy().into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
