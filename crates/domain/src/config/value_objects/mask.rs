// crates/domain/src/config/value_objects/mask.rs
use std::borrow::Cow;

use confdiff_shared_kernel::{DomainError, DomainResult};
use regex::{Regex, RegexBuilder};

/// Replacement for the masked tail of a line.
pub const MASK_MARKER: &str = "<masked>";

/// Case-insensitive keyword whose line tail is blanked out before comparison,
/// e.g. `description` so free text does not defeat otherwise identical blocks.
#[derive(Debug, Clone)]
pub struct Mask {
    keyword: String,
    pattern: Regex,
}

impl Mask {
    pub fn new(keyword: impl Into<String>) -> DomainResult<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(DomainError::InvalidMask {
                pattern: keyword,
                details: "mask must not be empty".to_string(),
            });
        }
        let pattern = RegexBuilder::new(&regex::escape(&keyword))
            .case_insensitive(true)
            .build()
            .map_err(|err| DomainError::InvalidMask { pattern: keyword.clone(), details: err.to_string() })?;
        Ok(Self { keyword, pattern })
    }

    /// Replace everything from the first match to end of line with [`MASK_MARKER`].
    ///
    /// A trailing marker is not searched, so a keyword that occurs inside
    /// the marker does not mask an already masked line again.
    pub fn apply_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let searchable = line.strip_suffix(MASK_MARKER).unwrap_or(line);
        match self.pattern.find(searchable) {
            Some(found) => Cow::Owned(format!("{}{MASK_MARKER}", &line[..found.start()])),
            None => Cow::Borrowed(line),
        }
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.pattern.is_match(text) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        for segment in text.split_inclusive('\n') {
            let (line, terminator) = crate::normalize::split_line(segment);
            out.push_str(&self.apply_line(line));
            out.push_str(terminator);
        }
        Cow::Owned(out)
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.keyword == other.keyword
    }
}

impl Eq for Mask {}
