//! Reversible extraction of inline constructs around a rewrite.
//!
//! [`preserve`] walks the text forward and records every extracted construct
//! in a [`Ledger`]; [`restore`] walks that ledger in reverse so that
//! reinjecting a later construct never shifts the anchor of an earlier one.

use std::ops::Range;

use serde::Serialize;

use super::{
    kinds::{CodeSpan, Link},
    parser::parse_inline,
    types::{InlineConstruct, InlineNode},
};

/// What kind of construct a ledger entry preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreservedKind {
    /// An inline code span, replaced by a unique placeholder token.
    InlineCode,
    /// A link, reduced to its display text.
    Link {
        target_url: String,
        /// Byte offset of the label in the rewrite-safe text.
        anchor_offset: usize,
    },
}

/// One inline construct extracted before rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreservedSpan {
    /// Exact original substring (the whole `` `code` `` or `[label](url)`).
    pub original_form: String,
    /// Text left behind in the rewrite-safe text.
    pub anchor: String,
    pub kind: PreservedKind,
}

/// Ordered record of one extraction pass: code spans first, then links, each
/// in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    entries: Vec<PreservedSpan>,
}

impl Ledger {
    pub fn entries(&self) -> &[PreservedSpan] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of [`restore`]: the final text plus every construct that could not
/// be reinjected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub text: String,
    pub lost: Vec<PreservedSpan>,
}

/// Extracts inline code and links, returning rewrite-safe text and the ledger.
///
/// The safe text exposes no URLs and no raw code: code spans become
/// `INLINECODE{n}PLACEHOLDER` tokens and links become their label.
pub fn preserve(text: &str) -> (String, Ledger) {
    let mut ledger = Ledger::default();

    // Pass 1: code spans, replaced at their own position so identical spans
    // each get an independent placeholder.
    let mut placeholdered = String::with_capacity(text.len());
    for node in parse_inline(text, &[InlineConstruct::CodeSpan]) {
        let full = node.span();
        match node {
            InlineNode::CodeSpan { .. } => {
                let placeholder = CodeSpan::placeholder(ledger.len());
                placeholdered.push_str(&placeholder);
                ledger.entries.push(PreservedSpan {
                    original_form: full.slice(text).to_string(),
                    anchor: placeholder,
                    kind: PreservedKind::InlineCode,
                });
            }
            _ => placeholdered.push_str(full.slice(text)),
        }
    }

    // Pass 2: links in the placeholdered text, reduced to their label.
    let mut safe = String::with_capacity(placeholdered.len());
    for node in parse_inline(&placeholdered, &[InlineConstruct::Link]) {
        match node {
            InlineNode::Link { full, label, url } => {
                let label_text = label.slice(&placeholdered);
                ledger.entries.push(PreservedSpan {
                    original_form: full.slice(&placeholdered).to_string(),
                    anchor: label_text.to_string(),
                    kind: PreservedKind::Link {
                        target_url: url.slice(&placeholdered).to_string(),
                        anchor_offset: safe.len(),
                    },
                });
                safe.push_str(label_text);
            }
            other => safe.push_str(other.span().slice(&placeholdered)),
        }
    }

    (safe, ledger)
}

/// Reinjects preserved constructs into rewritten text.
///
/// Entries are processed in reverse extraction order:
/// - code: the placeholder's first occurrence is replaced by the original span;
/// - link: among verbatim occurrences of the label not already inside a
///   restored link, the one nearest its recorded offset is wrapped as
///   `[label](url)`.
///
/// A construct whose anchor no longer appears (the rewriter changed it) is
/// left out of the text and reported in [`Restored::lost`]. There is no fuzzy
/// matching.
pub fn restore(rewritten: &str, ledger: &Ledger) -> Restored {
    let mut text = rewritten.to_string();
    let mut claimed: Vec<Range<usize>> = vec![];
    let mut lost = vec![];

    for entry in ledger.entries.iter().rev() {
        match &entry.kind {
            PreservedKind::InlineCode => match text.find(&entry.anchor) {
                Some(at) => text.replace_range(at..at + entry.anchor.len(), &entry.original_form),
                None => {
                    log::warn!(
                        "Code placeholder {} not found in rewritten text, {} is lost",
                        entry.anchor,
                        entry.original_form
                    );
                    lost.push(entry.clone());
                }
            },
            PreservedKind::Link {
                target_url,
                anchor_offset,
            } => match nearest_unclaimed(
                &text,
                &entry.anchor,
                *anchor_offset,
                &claimed,
                &placeholder_ranges(&text, ledger),
            ) {
                Some(at) => {
                    let end = at + entry.anchor.len();
                    let wrapped = Link::render(&entry.anchor, target_url);
                    let growth = wrapped.len() - entry.anchor.len();
                    text.replace_range(at..end, &wrapped);
                    for r in claimed.iter_mut().filter(|r| r.start >= end) {
                        r.start += growth;
                        r.end += growth;
                    }
                    claimed.push(at..at + wrapped.len());
                }
                None => {
                    log::warn!(
                        "Link text '{}' not found in processed text, link may be lost",
                        entry.anchor
                    );
                    lost.push(entry.clone());
                }
            },
        }
    }

    Restored { text, lost }
}

/// Byte ranges of the code placeholders still present in `text`.
fn placeholder_ranges(text: &str, ledger: &Ledger) -> Vec<Range<usize>> {
    ledger
        .entries
        .iter()
        .filter(|entry| entry.kind == PreservedKind::InlineCode)
        .flat_map(move |entry| {
            text.match_indices(entry.anchor.as_str())
                .map(|(at, anchor)| at..at + anchor.len())
        })
        .collect()
}

/// Finds the occurrence of `needle` closest to `offset` that does not overlap
/// an already restored link and does not cut into a code placeholder. An
/// occurrence may contain whole placeholders. Ties go to the earlier
/// occurrence.
fn nearest_unclaimed(
    text: &str,
    needle: &str,
    offset: usize,
    claimed: &[Range<usize>],
    placeholders: &[Range<usize>],
) -> Option<usize> {
    text.match_indices(needle)
        .map(|(at, _)| at)
        .filter(|&at| {
            let end = at + needle.len();
            let disjoint = |r: &Range<usize>| end <= r.start || at >= r.end;
            claimed.iter().all(disjoint)
                && placeholders
                    .iter()
                    .all(|r| disjoint(r) || (at <= r.start && r.end <= end))
        })
        .min_by_key(|&at| at.abs_diff(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roundtrip(text: &str) -> String {
        let (safe, ledger) = preserve(text);
        restore(&safe, &ledger).text
    }

    #[test]
    fn plain_text_is_untouched() {
        let (safe, ledger) = preserve("Nothing special here.");
        assert_eq!(safe, "Nothing special here.");
        assert!(ledger.is_empty());
    }

    #[test]
    fn code_and_links_are_hidden() {
        let (safe, ledger) = preserve("Run `cargo test` and read [the guide](https://x.io/guide).");
        assert_eq!(safe, "Run INLINECODE0PLACEHOLDER and read the guide.");
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[0].original_form, "`cargo test`");
        assert_eq!(
            ledger.entries()[1].kind,
            PreservedKind::Link {
                target_url: "https://x.io/guide".into(),
                anchor_offset: 36,
            }
        );
    }

    #[test]
    fn identical_code_spans_get_independent_placeholders() {
        let (safe, ledger) = preserve("`x` then `x` again");
        assert_eq!(safe, "INLINECODE0PLACEHOLDER then INLINECODE1PLACEHOLDER again");
        assert_eq!(ledger.len(), 2);
        assert_eq!(roundtrip("`x` then `x` again"), "`x` then `x` again");
    }

    #[test]
    fn unchanged_rewrite_restores_exactly() {
        for text in [
            "Use `a` with [docs](http://a) and [docs](http://b).",
            "docs: see [docs](u) for details",
            "[`code` label](https://x.io) leads",
            "A [link](u) then the word link again.",
        ] {
            assert_eq!(roundtrip(text), text);
        }
    }

    #[test]
    fn link_survives_rewrite_that_keeps_label() {
        let (_, ledger) = preserve("Read [the guide](https://x.io) first.");
        let restored = restore("First, please read the guide.", &ledger);
        assert_eq!(restored.text, "First, please read [the guide](https://x.io).");
        assert!(restored.lost.is_empty());
    }

    #[test]
    fn link_is_lost_when_label_changes() {
        let (_, ledger) = preserve("Read [the guide](https://x.io) first.");
        let restored = restore("Read the manual first.", &ledger);
        assert_eq!(restored.text, "Read the manual first.");
        assert_eq!(restored.lost.len(), 1);
        assert_eq!(restored.lost[0].anchor, "the guide");
    }

    #[test]
    fn missing_placeholder_is_reported() {
        let (_, ledger) = preserve("Call `f()` now.");
        let restored = restore("Call it now.", &ledger);
        assert_eq!(restored.text, "Call it now.");
        assert_eq!(restored.lost[0].kind, PreservedKind::InlineCode);
    }

    #[test]
    fn link_label_is_never_matched_inside_a_placeholder() {
        let (_, ledger) = preserve("[1](http://r) uses `a` and `b`.");
        let restored = restore(
            "It uses INLINECODE0PLACEHOLDER and INLINECODE1PLACEHOLDER, per 1.",
            &ledger,
        );
        assert_eq!(restored.text, "It uses `a` and `b`, per [1](http://r).");
        assert!(restored.lost.is_empty());
    }

    #[test]
    fn dropped_label_leaves_placeholders_intact() {
        let (_, ledger) = preserve("Use `a` or `b` per [1](http://r).");
        let restored = restore("Use INLINECODE0PLACEHOLDER or INLINECODE1PLACEHOLDER.", &ledger);
        assert_eq!(restored.text, "Use `a` or `b`.");
        assert_eq!(restored.lost.len(), 1);
        assert_eq!(restored.lost[0].anchor, "1");
    }

    #[test]
    fn placeholder_words_in_labels_are_matched_outside_tokens() {
        let (_, ledger) = preserve("See `x` in [CODE](u).");
        let restored = restore("INLINECODE0PLACEHOLDER is in CODE.", &ledger);
        assert_eq!(restored.text, "`x` is in [CODE](u).");
        assert!(restored.lost.is_empty());
    }

    #[test]
    fn restored_link_is_not_wrapped_twice() {
        let (_, ledger) = preserve("[a](u1) and [a](u2)");
        let restored = restore("a and a", &ledger);
        assert_eq!(restored.text, "[a](u1) and [a](u2)");
    }
}
