use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Link},
    types::{InlineConstruct, InlineNode},
};

/// Scans inline content into a sequence of [`InlineNode`]s.
///
/// Only the constructs listed in `constructs` are recognised, tried in list
/// order at every position (earlier entries take precedence). Text between
/// constructs is emitted as `InlineNode::Text`, so the nodes cover the whole
/// input.
pub fn parse_inline(s: &str, constructs: &[InlineConstruct]) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    'scan: while !cur.eof() {
        for construct in constructs {
            let node = match construct {
                InlineConstruct::CodeSpan => try_parse_code_span(&mut cur),
                InlineConstruct::Link => try_parse_link(&mut cur),
            };
            if let Some(node) = node {
                flush_text(&mut out, text_start, node.span().start);
                text_start = node.span().end;
                out.push(node);
                continue 'scan;
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it isn't
/// closed. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    if !cur.eat_until(CodeSpan::TICK) || cur.pos() == inner_start {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse an inline link starting at the current position.
///
/// The label runs to the first `]`, which must be followed directly by `(`;
/// the URL runs to the first `)`. Both must be non-empty. On failure, cursor
/// position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let label_start = cur.pos();

    let label_closed = cur.eat_until(Link::LABEL_CLOSE);
    let label_end = cur.pos();
    if !label_closed || label_end == label_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    if cur.bump() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    let url_start = cur.pos();
    let url_closed = cur.eat_until(Link::URL_CLOSE);
    let url_end = cur.pos();
    if !url_closed || url_end == url_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        label: Span {
            start: label_start,
            end: label_end,
        },
        url: Span {
            start: url_start,
            end: url_end,
        },
    })
}
