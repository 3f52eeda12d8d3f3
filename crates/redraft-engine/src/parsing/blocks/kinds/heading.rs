use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;

/// ATX heading (`#` to `######` followed by whitespace and text).
pub struct Heading;

impl Heading {
    /// Parses a heading line into `(level, text)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex(&RE, r"^(#{1,6})\s+(.+)$").captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        Some((level, caps.get(2)?.as_str()))
    }
}
