// crates/domain/src/normalize/rules.rs
use std::sync::OnceLock;

use regex::Regex;

/// One line-removal rule. Rules are evaluated in declaration order.
#[derive(Debug)]
pub struct NoiseRule {
    pub name: &'static str,
    pattern: Regex,
}

impl NoiseRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self { name, pattern: Regex::new(pattern).expect("noise rule pattern is valid") }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

pub fn noise_rules() -> &'static [NoiseRule] {
    static RULES: OnceLock<Vec<NoiseRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            NoiseRule::new("comment-or-echo", r"^\s*!!|^>|^end\s*$"),
            NoiseRule::new("command-echo", r"^\s*!?\s*Command:"),
            NoiseRule::new("content-type-banner", r"(?i)RANCID-CONTENT-TYPE:\s*\S+"),
            NoiseRule::new("boot-system", r"^!?\s*boot\s+system\s"),
        ]
    })
}

/// Name of the first rule that drops `line`, if any.
pub fn matching_rule(line: &str) -> Option<&'static str> {
    noise_rules().iter().find(|rule| rule.matches(line)).map(|rule| rule.name)
}

pub fn is_noise(line: &str) -> bool {
    matching_rule(line).is_some()
}

pub fn is_comment(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*!!").expect("comment pattern is valid")).is_match(line)
}

pub fn is_hostname(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^hostname\s+\S").expect("hostname pattern is valid")).is_match(line)
}
