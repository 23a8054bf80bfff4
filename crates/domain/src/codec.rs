//! Reversible escaping of boundary markers.
//!
//! Only a marker at the top level delimits stanzas. A marker indented under a
//! block, or glued to the end of a word, is rewritten to [`PLACEHOLDER`] before
//! splitting and restored by [`decode`] when text leaves the engine.
//! Split chunks never contain a raw marker, so decoding a chunk is injective and
//! counts taken on encoded text equal counts on decoded text.

use std::{borrow::Cow, sync::OnceLock};

use regex::{Captures, Regex};

/// Top-level stanza delimiter.
pub const BOUNDARY: char = '!';

/// Same as [`BOUNDARY`], for `join`.
pub const BOUNDARY_STR: &str = "!";

/// Private-use code point standing in for an escaped marker.
pub const PLACEHOLDER: char = '\u{E000}';

fn nested_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^([ \t]+)!").expect("nested marker pattern is valid"))
}

fn word_terminal_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w)!").expect("word-terminal marker pattern is valid"))
}

fn keep_prefix(caps: &Captures<'_>) -> String {
    format!("{}{PLACEHOLDER}", &caps[1])
}

/// Escape nested and word-terminal markers. Idempotent.
pub fn encode(text: &str) -> Cow<'_, str> {
    match nested_marker().replace_all(text, keep_prefix) {
        Cow::Borrowed(_) => word_terminal_marker().replace_all(text, keep_prefix),
        Cow::Owned(nested) => {
            Cow::Owned(word_terminal_marker().replace_all(&nested, keep_prefix).into_owned())
        }
    }
}

/// Restore every placeholder to the original marker.
pub fn decode(text: &str) -> Cow<'_, str> {
    if text.contains(PLACEHOLDER) {
        Cow::Owned(text.replace(PLACEHOLDER, BOUNDARY_STR))
    } else {
        Cow::Borrowed(text)
    }
}

/// A line that starts a new top-level stanza (`!` or `! text`, not `!!`).
pub fn is_boundary_line(line: &str) -> bool {
    line.starts_with(BOUNDARY) && !line.starts_with("!!")
}
