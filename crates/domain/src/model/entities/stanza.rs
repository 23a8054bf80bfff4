// crates/domain/src/model/entities/stanza.rs
use std::{borrow::Borrow, borrow::Cow, fmt};

use serde::{Serialize, Serializer};

use crate::codec;

/// A configuration block between two top-level boundary markers.
///
/// Holds the encoded text (escaped markers still as placeholders) with the
/// line breaks around the boundary trimmed. Equality is text equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stanza(String);

impl Stanza {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build from a raw split chunk, dropping the surrounding line terminators.
    pub fn from_chunk(chunk: &str) -> Self {
        Self(chunk.trim_matches(['\r', '\n']).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Lines of the stanza, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
    }

    /// Text with escaped markers restored, for output.
    pub fn display_text(&self) -> Cow<'_, str> {
        codec::decode(&self.0)
    }
}

impl Borrow<str> for Stanza {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl Serialize for Stanza {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display_text())
    }
}
