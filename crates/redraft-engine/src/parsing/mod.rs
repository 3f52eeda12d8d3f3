//! # Document Parsing
//!
//! Line-oriented markdown structure parsing plus the inline preservation
//! layer used around a rewrite.
//!
//! - **`text`**: byte spans and line iteration over `&str`
//! - **`blocks`**: element classification and the single-pass builder
//! - **`inline`**: inline scanning and the preserve/restore ledger
//! - **`reassemble`**: rebuilding a document from elements and rewrites
//! - **`snapshot`**: stable summaries and invariant checks for tests

pub mod blocks;
pub mod inline;
pub mod reassemble;
pub mod snapshot;
pub mod text;

use serde::Serialize;

use blocks::{DocumentElement, ElementBuilder, ElementKind};
use text::lines_with_spans;

pub use reassemble::reconstruct;

/// A recoverable problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// A code fence was opened but the input ended before it closed. The
    /// remaining lines were captured verbatim as one code block.
    UnclosedFence { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub elements: Vec<DocumentElement>,
}

/// Parses a document into one element per line (one per fenced block).
pub fn parse_document(source: &str) -> ParsedDoc {
    let mut builder = ElementBuilder::new(source);

    for lr in lines_with_spans(source) {
        builder.push(&lr);
    }

    let doc = ParsedDoc {
        elements: builder.finish(),
    };
    log::info!(
        "Parsed {} elements ({} rewritable)",
        doc.elements.len(),
        doc.elements.iter().filter(|e| e.is_rewritable()).count()
    );
    for warning in doc.warnings() {
        log::warn!("{warning:?}");
    }
    doc
}

impl ParsedDoc {
    /// Position and payload text of every rewritable element, in order.
    pub fn extract_processable(&self) -> Vec<(usize, String)> {
        self.elements
            .iter()
            .filter_map(|el| {
                el.processable_text()
                    .map(|text| (el.position, text.to_string()))
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<ParseWarning> {
        self.elements
            .iter()
            .filter(|el| matches!(el.kind, ElementKind::CodeBlock { closed: false }))
            .map(|el| ParseWarning::UnclosedFence {
                position: el.position,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn every_line_maps_to_one_element() {
        let src = "# H\n\npara\n- a\n- b\n";
        let doc = parse_document(src);
        assert_eq!(doc.elements.len(), src.split('\n').count());
        for (i, el) in doc.elements.iter().enumerate() {
            assert_eq!(el.position, i);
            assert_eq!(el.span.slice(src), el.raw_text);
        }
    }

    #[test]
    fn processable_text_strips_markers() {
        let doc = parse_document("# Heading\nPlain para.\n- bullet text\n2. second\n> quote\n[x]: http://x");
        assert_eq!(
            doc.extract_processable(),
            vec![
                (1, "Plain para.".to_string()),
                (2, "bullet text".to_string()),
                (3, "second".to_string()),
                (4, "quote".to_string()),
            ]
        );
    }

    #[test]
    fn unclosed_fence_is_captured_and_reported() {
        let src = "before\n```rust\nfn main() {}\n- not a list";
        let doc = parse_document(src);
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.elements[1].kind, ElementKind::CodeBlock { closed: false });
        assert_eq!(doc.elements[1].raw_text, "```rust\nfn main() {}\n- not a list");
        assert_eq!(doc.warnings(), vec![ParseWarning::UnclosedFence { position: 1 }]);
        assert_eq!(reconstruct(&doc.elements, &HashMap::new()), src);
    }

    #[test]
    fn closed_fence_has_no_warning() {
        let doc = parse_document("```\n# not a heading\n```\nafter");
        assert!(doc.warnings().is_empty());
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.elements[1].kind, ElementKind::Paragraph);
    }

    #[test]
    fn empty_document_is_one_blank_line() {
        let doc = parse_document("");
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].kind, ElementKind::Blank);
        assert!(doc.extract_processable().is_empty());
    }
}
