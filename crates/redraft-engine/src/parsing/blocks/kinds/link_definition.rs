use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;

/// Reference link definition (`[label]: target`). Opaque: never rewritten.
pub struct LinkDefinition;

impl LinkDefinition {
    /// Parses a definition line into `(label, target)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex(&RE, r"^\[([^\]]+)\]:\s*(.+)$").captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}
