pub mod diff;
pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod quality;
pub mod repetition;
pub mod report;
pub mod rewrite;
pub mod segment;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use diff::{ChangeStatistics, Comparison, HighlightedDiff, compare, highlight};
pub use io::{CsvLog, IoError, read_markdown_file, save_markdown_file};
pub use parsing::{ParsedDoc, parse_document, reconstruct};
pub use pipeline::{RefineError, RefineSettings, Refined, Refiner, Warning};
pub use quality::{QualityMetrics, QualityOracle, SurfaceOracle};
pub use repetition::{RepetitionReport, analyze};
pub use report::{DocumentReport, LogRecord};
pub use rewrite::{
    CommandRewriter, GenerationParams, IdentityRewriter, Mode, ModelCatalog, Rewriter,
};
pub use segment::chunk_text;
