use crate::parsing::text::{LineRef, Span};

use super::{
    classify::MarkdownLineClassifier,
    kinds::CodeFence,
    types::{DocumentElement, ElementKind},
};

#[derive(Debug, Clone, Copy)]
enum FenceState {
    None,
    Open { start: Span, last_line_end: usize },
}

/// Single forward pass over source lines, emitting one element per line and
/// one element per fenced code block.
pub struct ElementBuilder<'a> {
    source: &'a str,
    classifier: MarkdownLineClassifier,
    fence: FenceState,
    out: Vec<DocumentElement>,
}

impl<'a> ElementBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            classifier: MarkdownLineClassifier,
            fence: FenceState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, lr: &LineRef<'_>) {
        if let FenceState::Open { start, .. } = self.fence {
            self.fence = FenceState::Open {
                start,
                last_line_end: lr.span.end,
            };
            if CodeFence::closes(lr.text) {
                self.flush_fence(true);
            }
            return;
        }

        if CodeFence::opens(lr.text) {
            self.fence = FenceState::Open {
                start: lr.span,
                last_line_end: lr.span.end,
            };
            return;
        }

        let kind = self.classifier.classify(lr.text);
        self.emit(kind, lr.span);
    }

    pub fn finish(mut self) -> Vec<DocumentElement> {
        // EOF flush: an unterminated fence is captured as-is
        self.flush_fence(false);
        self.out
    }

    fn emit(&mut self, kind: ElementKind, span: Span) {
        self.out.push(DocumentElement {
            kind,
            raw_text: span.slice(self.source).to_string(),
            position: self.out.len(),
            span,
        });
    }

    fn flush_fence(&mut self, closed: bool) {
        let prev = std::mem::replace(&mut self.fence, FenceState::None);
        if let FenceState::Open {
            start,
            last_line_end,
        } = prev
        {
            let span = Span {
                start: start.start,
                end: last_line_end,
            };
            self.emit(ElementKind::CodeBlock { closed }, span);
        }
    }
}
