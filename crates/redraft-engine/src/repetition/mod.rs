//! # Repetition Analysis
//!
//! Reports over-used word stems across a text (global repetition) and stems
//! that recur within a short distance of each other (local repetition).
//!
//! Tokens are lowercase alphanumeric runs; stopwords and purely numeric
//! tokens are dropped and the rest are reduced with the English Snowball
//! (Porter2) stemmer, so "use", "used" and "using" count together.

pub mod stopwords;

use std::collections::HashMap;

use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

pub use stopwords::is_stopword;

/// Default proximity window, in content words.
pub const DEFAULT_WINDOW: usize = 50;

/// Maximum number of global repetitions reported.
pub const TOP_N: usize = 5;

/// One over-used stem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalRepetition {
    /// Most frequent surface form of the stem (first seen wins ties).
    pub word: String,
    pub stem: String,
    pub count: usize,
    /// `count` divided by the number of content words.
    pub ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepetitionReport {
    /// At most [`TOP_N`] entries, by descending count.
    pub top_global_repetitions: Vec<GlobalRepetition>,
    /// `min(1, 10 * local_events / max(1, content_words))`.
    pub local_repetition_score: f64,
    /// Local events plus the counts of every reported global repetition.
    pub total_repetitions_found: usize,
    pub content_word_count: usize,
}

/// Lowercased alphanumeric tokens that are neither numbers nor stopwords.
pub fn content_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|tok| !tok.is_empty())
        .filter(|tok| !tok.chars().all(char::is_numeric))
        .filter(|tok| !is_stopword(tok))
        .map(str::to_string)
        .collect()
}

/// Analyzes `text` for repeated stems. Each content word looks ahead
/// `window / 5` positions for the same stem; every hit is one local event,
/// so a pair inside the look-ahead is counted from its first word only.
pub fn analyze(text: &str, window: usize) -> RepetitionReport {
    let words = content_words(text);
    if words.is_empty() {
        return RepetitionReport::default();
    }

    let stemmer = Stemmer::create(Algorithm::English);
    let stems: Vec<String> = words.iter().map(|w| stemmer.stem(w).into_owned()).collect();
    let n = stems.len();

    let top_global_repetitions = global_repetitions(&words, &stems);

    let lookahead = window / 5;
    let local_events: usize = (0..n)
        .map(|i| {
            stems[i + 1..n.min(i + 1 + lookahead)]
                .iter()
                .filter(|s| **s == stems[i])
                .count()
        })
        .sum();

    let report = RepetitionReport {
        local_repetition_score: (10.0 * local_events as f64 / n as f64).min(1.0),
        total_repetitions_found: local_events
            + top_global_repetitions.iter().map(|g| g.count).sum::<usize>(),
        top_global_repetitions,
        content_word_count: n,
    };
    log::debug!(
        "Repetition: {} content words, {} local events, {} global stems",
        n,
        local_events,
        report.top_global_repetitions.len()
    );
    report
}

fn global_repetitions(words: &[String], stems: &[String]) -> Vec<GlobalRepetition> {
    struct Tally<'a> {
        stem: &'a str,
        count: usize,
        // surface forms in first-seen order
        forms: Vec<(&'a str, usize)>,
    }

    let mut order: Vec<Tally> = vec![];
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (word, stem) in words.iter().zip(stems) {
        let slot = *index.entry(stem).or_insert_with(|| {
            order.push(Tally {
                stem,
                count: 0,
                forms: vec![],
            });
            order.len() - 1
        });
        let tally = &mut order[slot];
        tally.count += 1;
        match tally.forms.iter_mut().find(|(form, _)| *form == word.as_str()) {
            Some((_, seen)) => *seen += 1,
            None => tally.forms.push((word.as_str(), 1)),
        }
    }

    let n = words.len();
    let threshold = 3usize.max((0.05 * n as f64).round() as usize);

    // stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| b.count.cmp(&a.count));
    order
        .into_iter()
        .take(TOP_N)
        .filter(|t| t.count >= threshold)
        .map(|t| {
            let word = t
                .forms
                .iter()
                .fold(None::<(&str, usize)>, |best, &(form, seen)| match best {
                    Some((_, top)) if top >= seen => best,
                    _ => Some((form, seen)),
                })
                .map_or(t.stem, |(form, _)| form);
            GlobalRepetition {
                word: word.to_string(),
                stem: t.stem.to_string(),
                count: t.count,
                ratio: t.count as f64 / n as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_stopword_only_text_is_zero() {
        assert_eq!(analyze("", DEFAULT_WINDOW), RepetitionReport::default());
        assert_eq!(
            analyze("the and it was, 42 1999!", DEFAULT_WINDOW),
            RepetitionReport::default()
        );
    }

    #[test]
    fn dominant_word_is_reported() {
        let text = format!("{} task performance key", "model ".repeat(8));
        let report = analyze(&text, DEFAULT_WINDOW);
        assert_eq!(report.content_word_count, 11);
        assert_eq!(report.top_global_repetitions.len(), 1);
        let top = &report.top_global_repetitions[0];
        assert_eq!(top.word, "model");
        assert_eq!(top.count, 8);
        assert_eq!(top.ratio, 8.0 / 11.0);
        // 7 + 6 + ... + 0 forward hits among the eight repeats
        assert_eq!(report.total_repetitions_found, 28 + 8);
        assert_eq!(report.local_repetition_score, 1.0);
    }

    #[test]
    fn morphological_variants_share_a_stem() {
        let report = analyze("using tools, used tools, uses tools", DEFAULT_WINDOW);
        let stems: Vec<_> = report
            .top_global_repetitions
            .iter()
            .map(|g| (g.word.as_str(), g.count))
            .collect();
        assert_eq!(stems, vec![("using", 3), ("tools", 3)]);
    }

    #[test]
    fn most_frequent_surface_form_is_shown() {
        let report = analyze("running runs runs", DEFAULT_WINDOW);
        assert_eq!(report.top_global_repetitions[0].word, "runs");
    }

    #[test]
    fn lookahead_is_a_fifth_of_the_window() {
        // the two "alpha"s are four positions apart
        let text = "alpha beta gamma delta alpha";
        assert_eq!(analyze(text, 15).total_repetitions_found, 0);
        assert_eq!(analyze(text, 20).total_repetitions_found, 1);
    }

    #[test]
    fn below_threshold_is_not_global() {
        let report = analyze("apple apple pear plum", DEFAULT_WINDOW);
        assert!(report.top_global_repetitions.is_empty());
        assert_eq!(report.total_repetitions_found, 1);
        assert_eq!(report.local_repetition_score, 1.0);
    }
}
