//! Sentence splitting, chunking and the generation length budget.
//!
//! Sentence boundaries are naive: a whitespace run preceded by `.`, `!` or
//! `?`. Abbreviations such as "e.g. this" therefore split.

use std::ops::Range;

use crate::rewrite::Mode;

/// Upper bound on any generation length budget.
pub const MAX_GENERATION_LENGTH: usize = 1024;

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits trimmed text into sentences. The separating whitespace is consumed;
/// text without terminal punctuation is a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

/// Byte ranges of the sentences [`split_sentences`] returns, relative to the
/// untrimmed `text`. Everything outside the ranges is whitespace.
pub fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let offset = text.len() - text.trim_start().len();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return vec![];
    }

    let mut out = vec![];
    let mut start = 0usize;
    let mut prev: Option<char> = None;
    let mut in_gap = false;

    for (i, c) in trimmed.char_indices() {
        if in_gap {
            if c.is_whitespace() {
                continue;
            }
            start = i;
            in_gap = false;
        } else if c.is_whitespace() && prev.is_some_and(|p| TERMINATORS.contains(&p)) {
            out.push(offset + start..offset + i);
            in_gap = true;
        }
        prev = Some(c);
    }
    out.push(offset + start..offset + trimmed.len());
    out
}

/// Groups sentences into consecutive chunks of `max_sentences`, each joined
/// with a single space. A `max_sentences` of 0 is treated as 1.
pub fn chunk_text(text: &str, max_sentences: usize) -> Vec<String> {
    split_sentences(text)
        .chunks(max_sentences.max(1))
        .map(|group| group.join(" "))
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Rough token count: whitespace words divided by 0.75.
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count() * 4 / 3
}

/// Maximum generation length for a unit, never below `base` and never above
/// [`MAX_GENERATION_LENGTH`].
pub fn calculate_max_length(text: &str, mode: Mode, base: usize) -> usize {
    let tokens = estimate_tokens(text);
    let calculated = match mode {
        Mode::Paraphrase => tokens * 3 / 2 + 50,
        Mode::Expand => tokens * 3 + 100,
    };
    calculated.max(base).min(MAX_GENERATION_LENGTH)
}

/// Minimum generation length for a unit, kept at least 10 below `max_length`.
pub fn calculate_min_length(text: &str, mode: Mode, max_length: usize) -> usize {
    let tokens = estimate_tokens(text);
    let calculated = match mode {
        Mode::Paraphrase => tokens * 4 / 5,
        Mode::Expand => tokens * 3 / 2,
    };
    calculated.min(max_length.saturating_sub(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn chunks_group_sentences() {
        assert_eq!(
            chunk_text("The cat sat. The cat ran. The dog slept.", 2),
            vec!["The cat sat. The cat ran.", "The dog slept."]
        );
    }

    #[rstest]
    #[case("", 0)]
    #[case("   \n\t ", 0)]
    #[case("no terminal punctuation here", 1)]
    #[case("One. Two! Three? Four", 4)]
    #[case("Wait... what?", 2)]
    #[case("e.g. this splits", 2)]
    #[case("version 1.5 stays whole.", 1)]
    fn sentence_counts(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(split_sentences(text).len(), expected);
    }

    #[test]
    fn whitespace_runs_are_consumed() {
        assert_eq!(split_sentences("  A.   B!\n\nC  "), vec!["A.", "B!", "C"]);
    }

    #[test]
    fn sentence_spans_index_the_untrimmed_text() {
        assert_eq!(sentence_spans("  A.   B!\n\nC  "), vec![2..4, 7..9, 11..12]);
        assert!(sentence_spans(" \t ").is_empty());
    }

    #[test]
    fn zero_chunk_size_means_one() {
        assert_eq!(chunk_text("A. B.", 0), vec!["A.", "B."]);
    }

    #[test]
    fn chunking_loses_no_words() {
        let text = "Alpha beta. Gamma delta! Epsilon? Zeta eta theta.";
        let rejoined = chunk_text(text, 3).join(" ");
        assert_eq!(rejoined, text);
    }

    #[rstest]
    #[case("", 0)]
    #[case("one two three", 4)]
    #[case("a b c d e f", 8)]
    fn token_estimate(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(estimate_tokens(text), expected);
    }

    #[test]
    fn length_budget_respects_base_and_cap() {
        let short = "one two three";
        assert_eq!(calculate_max_length(short, Mode::Paraphrase, 256), 256);
        assert_eq!(calculate_max_length(short, Mode::Expand, 50), 112);

        let long = "word ".repeat(600);
        assert_eq!(calculate_max_length(&long, Mode::Expand, 256), MAX_GENERATION_LENGTH);
    }

    #[test]
    fn min_length_stays_below_max() {
        let text = "word ".repeat(30);
        assert_eq!(calculate_min_length(&text, Mode::Paraphrase, 256), 32);
        assert_eq!(calculate_min_length(&text, Mode::Expand, 40), 30);
        assert_eq!(calculate_min_length(&text, Mode::Expand, 5), 0);
    }
}
