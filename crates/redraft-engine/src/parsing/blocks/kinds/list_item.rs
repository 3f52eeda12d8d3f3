use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;

/// Ordered list item (`1. text`). The marker is captured verbatim.
pub struct OrderedItem;

impl OrderedItem {
    /// Parses a line into `(marker, text)`, e.g. `("12.", "text")`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex(&RE, r"^(\d+\.)\s+(.+)$").captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

/// Unordered list item (`-`, `*` or `+` followed by whitespace and text).
pub struct UnorderedItem;

impl UnorderedItem {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Parses a line into `(marker, text)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex(&RE, r"^([*+-])\s+(.+)$").captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

/// Renders rewritten item text behind its original marker.
pub fn render(marker: &str, text: &str) -> String {
    format!("{marker} {text}")
}
