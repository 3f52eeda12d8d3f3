//! # Quality Signals
//!
//! The [`QualityOracle`] boundary and a built-in [`SurfaceOracle`] that
//! scores text from surface features only: word-bag similarity, adjacent
//! sentence overlap as a flow signal, and Flesch reading ease.

mod readability;

use std::{collections::HashMap, fmt};

use serde::Serialize;
use thiserror::Error;

use crate::repetition::{self, RepetitionReport};

pub use readability::{flesch_reading_ease, syllables_in_word};

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Quality oracle unavailable: {0}")]
    Unavailable(String),
    #[error("Quality oracle failed: {0}")]
    Failed(String),
}

/// Flesch reading-ease band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityLabel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ReadabilityLabel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for ReadabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-text quality record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub grammar_issues: usize,
    pub punctuation_issues: usize,
    pub logical_flow: f64,
    pub readability_score: f64,
    pub readability_label: ReadabilityLabel,
    pub repetition: RepetitionReport,
}

impl QualityMetrics {
    /// Metrics for empty text, also used when an oracle fails.
    pub fn neutral() -> Self {
        Self {
            grammar_issues: 0,
            punctuation_issues: 0,
            logical_flow: 0.0,
            readability_score: 0.0,
            readability_label: ReadabilityLabel::NotApplicable,
            repetition: RepetitionReport::default(),
        }
    }
}

/// External judge of text quality.
pub trait QualityOracle {
    /// Semantic similarity of two texts in `[0, 1]`.
    fn similarity(&self, a: &str, b: &str) -> Result<f64, OracleError>;

    fn evaluate(&self, text: &str) -> Result<QualityMetrics, OracleError>;
}

/// Oracle built from surface features only. Reports no grammar or
/// punctuation issues.
#[derive(Debug, Clone)]
pub struct SurfaceOracle {
    pub window: usize,
}

impl Default for SurfaceOracle {
    fn default() -> Self {
        Self {
            window: repetition::DEFAULT_WINDOW,
        }
    }
}

impl SurfaceOracle {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl QualityOracle for SurfaceOracle {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, OracleError> {
        Ok(bag_cosine(a, b))
    }

    fn evaluate(&self, text: &str) -> Result<QualityMetrics, OracleError> {
        if text.trim().is_empty() {
            return Ok(QualityMetrics::neutral());
        }
        let readability_score = flesch_reading_ease(text);
        Ok(QualityMetrics {
            grammar_issues: 0,
            punctuation_issues: 0,
            logical_flow: logical_flow(text),
            readability_score,
            readability_label: ReadabilityLabel::from_score(readability_score),
            repetition: repetition::analyze(text, self.window),
        })
    }
}

fn word_bag(text: &str) -> HashMap<String, f64> {
    let mut bag = HashMap::new();
    for tok in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        *bag.entry(tok.to_string()).or_insert(0.0) += 1.0;
    }
    bag
}

/// Cosine similarity of lowercase word counts. Two empty texts are
/// identical; one empty text shares nothing.
pub fn bag_cosine(a: &str, b: &str) -> f64 {
    let (bag_a, bag_b) = (word_bag(a), word_bag(b));
    match (bag_a.is_empty(), bag_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }
    let dot: f64 = bag_a
        .iter()
        .filter_map(|(w, x)| bag_b.get(w).map(|y| x * y))
        .sum();
    let norm_sq = |bag: &HashMap<String, f64>| bag.values().map(|v| v * v).sum::<f64>();
    dot / (norm_sq(&bag_a) * norm_sq(&bag_b)).sqrt()
}

/// Mean similarity of adjacent `.`-separated sentences; 1.0 for a single
/// sentence.
pub fn logical_flow(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if sentences.len() < 2 {
        return 1.0;
    }
    let total: f64 = sentences
        .windows(2)
        .map(|pair| bag_cosine(pair[0], pair[1]))
        .sum();
    total / (sentences.len() - 1) as f64
}
