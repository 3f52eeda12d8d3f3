use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;

/// Horizontal rule: a line that is only three or more `*`, `-` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        cached_regex(&RE, r"^(\*{3,}|-{3,}|_{3,})$").is_match(line.trim())
    }
}
