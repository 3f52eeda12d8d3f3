use serde::Serialize;

use super::align::{AlignmentOp, OpTag};

/// Maximum number of substitution pairs reported.
pub const SUBSTITUTION_CAP: usize = 10;

/// Word-level change counters derived from an alignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeStatistics {
    pub original_words: usize,
    pub generated_words: usize,
    pub unchanged: usize,
    /// Sum of `max(original_len, rewritten_len)` over replace ops.
    pub changed: usize,
    pub added: usize,
    pub deleted: usize,
    pub percentage_changed: f64,
    pub percentage_unchanged: f64,
    /// `(original, new)` pairs from one-word-for-one-word replacements, in
    /// order of occurrence.
    pub substitutions: Vec<(String, String)>,
}

/// Derives change statistics from ops produced by aligning `original` with
/// `rewritten`.
pub fn statistics<S: AsRef<str>>(
    ops: &[AlignmentOp],
    original: &[S],
    rewritten: &[S],
) -> ChangeStatistics {
    let (mut unchanged, mut changed, mut added, mut deleted) = (0, 0, 0, 0);
    let mut substitutions = vec![];

    for op in ops {
        let (a_len, b_len) = (op.original.len(), op.rewritten.len());
        match op.tag {
            OpTag::Equal => unchanged += a_len,
            OpTag::Replace => {
                changed += a_len.max(b_len);
                if a_len == 1 && b_len == 1 && substitutions.len() < SUBSTITUTION_CAP {
                    substitutions.push((
                        original[op.original.start].as_ref().to_string(),
                        rewritten[op.rewritten.start].as_ref().to_string(),
                    ));
                }
            }
            OpTag::Delete => deleted += a_len,
            OpTag::Insert => added += b_len,
        }
    }

    let denominator = original.len().max(1) as f64;
    ChangeStatistics {
        original_words: original.len(),
        generated_words: rewritten.len(),
        unchanged,
        changed,
        added,
        deleted,
        percentage_changed: (changed + added + deleted) as f64 / denominator * 100.0,
        percentage_unchanged: unchanged as f64 / denominator * 100.0,
        substitutions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::align::align;
    use pretty_assertions::assert_eq;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn identical_text_is_fully_unchanged() {
        let w = words("one two three four");
        let stats = statistics(&align(&w, &w), &w, &w);
        assert_eq!(stats.unchanged, 4);
        assert_eq!(stats.percentage_changed, 0.0);
        assert_eq!(stats.percentage_unchanged, 100.0);
        assert!(stats.substitutions.is_empty());
    }

    #[test]
    fn multi_word_replace_counts_longer_side() {
        let a = words("we went home");
        let b = words("we travelled back to the house");
        let stats = statistics(&align(&a, &b), &a, &b);
        assert_eq!(stats.unchanged, 1);
        assert_eq!(stats.changed, 5);
        assert!(stats.substitutions.is_empty());
    }

    #[test]
    fn empty_original_uses_unit_denominator() {
        let a: Vec<&str> = vec![];
        let b = words("brand new");
        let stats = statistics(&align(&a, &b), &a, &b);
        assert_eq!(stats.added, 2);
        assert_eq!(stats.percentage_changed, 200.0);
        assert_eq!(stats.percentage_unchanged, 0.0);
    }

    #[test]
    fn substitutions_are_capped() {
        let a: Vec<String> = (0..15).flat_map(|i| [format!("k{i}"), format!("a{i}")]).collect();
        let b: Vec<String> = (0..15).flat_map(|i| [format!("k{i}"), format!("b{i}")]).collect();
        let stats = statistics(&align(&a, &b), &a, &b);
        assert_eq!(stats.changed, 15);
        assert_eq!(stats.substitutions.len(), SUBSTITUTION_CAP);
        assert_eq!(stats.substitutions[0], ("a0".to_string(), "b0".to_string()));
    }
}
