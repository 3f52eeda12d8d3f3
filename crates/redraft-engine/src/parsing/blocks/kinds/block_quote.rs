use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;

/// Blockquote block type with owned delimiter constant.
///
/// Only single-line `> text` quotes are recognised; the inner text is what
/// gets rewritten and the marker is re-applied as `"> "` on reassembly.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the inner text of a `> text` line.
    pub fn parse(line: &str) -> Option<&str> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex(&RE, r"^>\s+(.+)$").captures(line)?;
        Some(caps.get(1)?.as_str())
    }

    /// Renders rewritten inner text back into a quote line.
    pub fn render(text: &str) -> String {
        format!("{} {text}", Self::PREFIX)
    }
}
