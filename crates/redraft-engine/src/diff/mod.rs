//! # Change Accounting
//!
//! Word-level alignment of an original and a rewritten text and the
//! statistics derived from it.
//!
//! Words are whitespace-separated tokens with punctuation left attached, so
//! `"jumps."` and `"leaps."` form the substitution pair for a sentence-final
//! change.
//!
//! - **`align`**: longest-matching-block alignment into tagged ops
//! - **`stats`**: counters, percentages and substitution pairs
//! - **`render`**: HTML highlighting of both sides

pub mod align;
pub mod render;
pub mod stats;

use serde::Serialize;

pub use align::{AlignmentOp, OpTag, align};
pub use render::{HighlightedDiff, highlight};
pub use stats::{ChangeStatistics, SUBSTITUTION_CAP, statistics};

/// Full result of comparing two texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub original_words: Vec<String>,
    pub rewritten_words: Vec<String>,
    pub ops: Vec<AlignmentOp>,
    pub statistics: ChangeStatistics,
}

/// Splits both texts into words, aligns them and derives statistics.
pub fn compare(original: &str, rewritten: &str) -> Comparison {
    let original_words: Vec<String> = original.split_whitespace().map(str::to_string).collect();
    let rewritten_words: Vec<String> = rewritten.split_whitespace().map(str::to_string).collect();
    let ops = align(&original_words, &rewritten_words);
    let statistics = statistics(&ops, &original_words, &rewritten_words);
    log::debug!(
        "Compared {} -> {} words in {} ops",
        original_words.len(),
        rewritten_words.len(),
        ops.len()
    );

    Comparison {
        original_words,
        rewritten_words,
        ops,
        statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentence_final_substitution_keeps_punctuation() {
        let cmp = compare("The quick fox jumps.", "The quick fox leaps.");
        let replaces: Vec<_> = cmp.ops.iter().filter(|op| op.tag == OpTag::Replace).collect();
        assert_eq!(replaces.len(), 1);
        assert_eq!(cmp.statistics.changed, 1);
        assert_eq!(cmp.statistics.unchanged, 3);
        assert_eq!(
            cmp.statistics.substitutions,
            vec![("jumps.".to_string(), "leaps.".to_string())]
        );
    }

    #[test]
    fn whitespace_differences_are_not_changes() {
        let cmp = compare("a  b\n c", "a b c");
        assert_eq!(cmp.statistics.percentage_unchanged, 100.0);
    }
}
