//! Stanza splitting on the top-level boundary marker.

use crate::{
    codec::{BOUNDARY, BOUNDARY_STR},
    model::Stanza,
};

/// Raw chunks between markers, blanks included. `join_chunks` inverts this exactly.
pub fn split_chunks(text: &str) -> Vec<&str> {
    text.split(BOUNDARY).collect()
}

pub fn join_chunks(chunks: &[&str]) -> String {
    chunks.join(BOUNDARY_STR)
}

/// Ordered stanza sequence for one normalized document.
pub fn split_stanzas(text: &str) -> Vec<Stanza> {
    text.split(BOUNDARY).map(Stanza::from_chunk).collect()
}
