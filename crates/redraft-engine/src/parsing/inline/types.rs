use crate::parsing::text::Span;

/// A scanned inline node with byte spans into the scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// An inline link `[label](url)`.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        /// Span of the display text.
        label: Span,
        /// Span of the target URL.
        url: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::Link { full, .. } => *full,
        }
    }
}

/// An inline construct the scanner can recognise. The order of a construct
/// list passed to the scanner is its precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineConstruct {
    CodeSpan,
    Link,
}
