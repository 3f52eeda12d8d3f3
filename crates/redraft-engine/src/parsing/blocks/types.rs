use serde::Serialize;

use crate::parsing::text::Span;

use super::kinds::{BlockQuote, list_item};

/// The kind of a document element, with its kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// ATX heading. Never rewritten.
    Heading {
        /// Number of leading `#` (1-6).
        level: u8,
        /// Text after the marker and whitespace.
        text: String,
    },
    /// Fenced code block spanning one or more lines, fences included.
    CodeBlock {
        /// False when the input ended before a closing fence.
        closed: bool,
    },
    /// `---`, `***` or `___` style rule.
    HorizontalRule,
    /// `[label]: target` reference definition.
    LinkDefinition { label: String, target: String },
    /// `> text` quote line.
    BlockQuote {
        /// Text after the `>` marker and whitespace.
        text: String,
    },
    /// `1. text` list item.
    OrderedListItem { marker: String, text: String },
    /// `- text`, `* text` or `+ text` list item.
    UnorderedListItem { marker: String, text: String },
    /// Any other non-blank line.
    Paragraph,
    /// Empty or whitespace-only line.
    Blank,
}

impl ElementKind {
    /// Short label used in logs and parse listings.
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Heading { .. } => "heading",
            ElementKind::CodeBlock { .. } => "code_block",
            ElementKind::HorizontalRule => "horizontal_rule",
            ElementKind::LinkDefinition { .. } => "link_definition",
            ElementKind::BlockQuote { .. } => "blockquote",
            ElementKind::OrderedListItem { .. } => "ordered_list_item",
            ElementKind::UnorderedListItem { .. } => "unordered_list_item",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Blank => "blank",
        }
    }
}

/// One line (or one fenced multi-line code block) of a parsed document.
///
/// Elements are immutable once parsed. Joining every `raw_text` in position
/// order with `\n` reproduces the source byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentElement {
    /// Kind and kind-specific attributes.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Exact original surface text.
    pub raw_text: String,
    /// 0-based index in the parsed sequence.
    pub position: usize,
    /// Byte span of `raw_text` in the source.
    pub span: Span,
}

impl DocumentElement {
    /// True for paragraphs, list items and blockquotes.
    pub fn is_rewritable(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Paragraph
                | ElementKind::BlockQuote { .. }
                | ElementKind::OrderedListItem { .. }
                | ElementKind::UnorderedListItem { .. }
        )
    }

    /// The text sent onward for rewriting: the full line for paragraphs, the
    /// marker-stripped text for list items and quotes, `None` otherwise.
    pub fn processable_text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Paragraph => Some(&self.raw_text),
            ElementKind::BlockQuote { text }
            | ElementKind::OrderedListItem { text, .. }
            | ElementKind::UnorderedListItem { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Renders rewritten payload text with this element's surface syntax.
    ///
    /// Returns `None` for elements that are never rewritten.
    pub fn render_rewritten(&self, rewritten: &str) -> Option<String> {
        match &self.kind {
            ElementKind::Paragraph => Some(rewritten.to_string()),
            ElementKind::OrderedListItem { marker, .. }
            | ElementKind::UnorderedListItem { marker, .. } => {
                Some(list_item::render(marker, rewritten))
            }
            ElementKind::BlockQuote { .. } => Some(BlockQuote::render(rewritten)),
            _ => None,
        }
    }
}
