/// Fenced code block with owned delimiter constant.
///
/// Fences are raw zones: every line from the opener up to and including the
/// closer is captured verbatim and never classified further.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if `line` opens a fence (backticks at the trimmed start).
    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// True if `line` closes an open fence. Any fence-looking line closes,
    /// regardless of info string.
    pub fn closes(line: &str) -> bool {
        Self::opens(line)
    }
}
