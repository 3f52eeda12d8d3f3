use super::span::Span;

/// A reference to a single line of the source with its byte span.
///
/// Lines are produced by splitting on `\n`; the newline itself belongs to no
/// line, so a trailing newline yields a final empty line. This is what makes
/// joining element texts with `\n` lossless.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the source (newline excluded).
    pub span: Span,
    /// The line text.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    source.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        LineRef {
            span: Span {
                start,
                end: start + line.len(),
            },
            text: line,
        }
    })
}
