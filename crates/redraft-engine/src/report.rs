//! Per-document reporting: change statistics, similarity and quality of the
//! input and output, plus the flat record appended to the results log.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::{
    diff::{AlignmentOp, ChangeStatistics, HighlightedDiff, compare, highlight},
    quality::{QualityMetrics, QualityOracle},
    rewrite::Mode,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub created_at: NaiveDateTime,
    pub mode: Mode,
    pub model: String,
    pub statistics: ChangeStatistics,
    pub ops: Vec<AlignmentOp>,
    pub similarity: f64,
    pub input_quality: QualityMetrics,
    pub output_quality: QualityMetrics,
    pub highlighted: HighlightedDiff,
    /// Oracle failures that were replaced by neutral values.
    pub warnings: Vec<String>,
}

impl DocumentReport {
    pub fn build(
        original: &str,
        refined: &str,
        oracle: &dyn QualityOracle,
        mode: Mode,
        model: &str,
    ) -> Self {
        let mut warnings = vec![];

        let comparison = compare(original, refined);
        let highlighted = highlight(&comparison);

        let similarity = oracle.similarity(original, refined).unwrap_or_else(|e| {
            log::warn!("Similarity unavailable: {e}");
            warnings.push(e.to_string());
            0.0
        });
        let mut evaluate = |text: &str| {
            oracle.evaluate(text).unwrap_or_else(|e| {
                log::warn!("Quality metrics unavailable: {e}");
                warnings.push(e.to_string());
                QualityMetrics::neutral()
            })
        };
        let input_quality = evaluate(original);
        let output_quality = evaluate(refined);

        log::info!(
            "Processing complete: {} -> {} words, similarity: {similarity:.4}",
            comparison.statistics.original_words,
            comparison.statistics.generated_words
        );

        Self {
            created_at: Local::now().naive_local(),
            mode,
            model: model.to_string(),
            statistics: comparison.statistics,
            ops: comparison.ops,
            similarity,
            input_quality,
            output_quality,
            highlighted,
            warnings,
        }
    }

    /// Flattens the report into one results-log row, scored on the output.
    pub fn to_log_record(&self) -> LogRecord {
        LogRecord {
            timestamp: self.created_at.format(TIMESTAMP_FORMAT).to_string(),
            mode: self.mode.to_string(),
            model: self.model.clone(),
            input_words: self.statistics.original_words,
            output_words: self.statistics.generated_words,
            similarity: round_to(self.similarity, 4),
            change_percent: round_to(self.statistics.percentage_changed, 2),
            grammar_issues: self.output_quality.grammar_issues,
            punctuation_issues: self.output_quality.punctuation_issues,
            logical_flow: round_to(self.output_quality.logical_flow, 4),
            readability: round_to(self.output_quality.readability_score, 2),
        }
    }
}

/// One row of the results log. Field names are the CSV column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Mode")]
    pub mode: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Input Words")]
    pub input_words: usize,
    #[serde(rename = "Output Words")]
    pub output_words: usize,
    #[serde(rename = "Similarity")]
    pub similarity: f64,
    #[serde(rename = "Change %")]
    pub change_percent: f64,
    #[serde(rename = "Grammar Issues")]
    pub grammar_issues: usize,
    #[serde(rename = "Punctuation Issues")]
    pub punctuation_issues: usize,
    #[serde(rename = "Logical Flow Score")]
    pub logical_flow: f64,
    #[serde(rename = "Readability Score")]
    pub readability: f64,
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
