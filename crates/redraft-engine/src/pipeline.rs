//! # Refinement Pipeline
//!
//! Drives a [`Rewriter`] over plain text (sentence chunks) or a markdown
//! document (one unit per sentence of each rewritable element), keeping the
//! original text of any unit whose rewrite fails.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::{
    parsing::{
        ParseWarning,
        inline::{PreservedKind, preserve, restore},
        parse_document, reconstruct,
    },
    rewrite::{GenerationParams, Mode, ModelCatalog, ModelSpec, RewriteRequest, Rewriter},
    segment::{chunk_text, sentence_spans},
};

/// Default number of sentences per plain-text chunk.
pub const DEFAULT_MAX_SENTENCES: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct RefineSettings {
    pub mode: Mode,
    /// Model name; unknown or missing names resolve to the mode's default.
    pub model: Option<String>,
    pub params: GenerationParams,
    pub max_sentences: usize,
    /// Expansion target; passed through to the prompt.
    pub target_words: Option<usize>,
    /// Fail the whole document if any unit fell back to its original text.
    pub require_full_success: bool,
}

impl Default for RefineSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            model: None,
            params: GenerationParams::default(),
            max_sentences: DEFAULT_MAX_SENTENCES,
            target_words: None,
            require_full_success: false,
        }
    }
}

/// A recoverable problem met while refining one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    UnclosedFence { position: usize },
    /// The rewriter changed a link's display text; the link was dropped.
    LinkLost {
        position: usize,
        label: String,
        url: String,
    },
    /// The rewriter dropped a code placeholder; the code span was dropped.
    PlaceholderLost { position: usize, code: String },
    /// The rewriter failed on a unit, which was kept unchanged.
    RewriteFallback {
        unit: usize,
        position: Option<usize>,
        error: String,
    },
}

impl From<ParseWarning> for Warning {
    fn from(w: ParseWarning) -> Self {
        match w {
            ParseWarning::UnclosedFence { position } => Warning::UnclosedFence { position },
        }
    }
}

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("{failed} of {units} units could not be rewritten")]
    Incomplete {
        failed: usize,
        units: usize,
        warnings: Vec<Warning>,
    },
}

/// Output of one refinement call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Refined {
    pub text: String,
    pub warnings: Vec<Warning>,
    /// Units sent to the rewriter.
    pub units: usize,
    /// Units whose rewrite was accepted.
    pub rewritten_units: usize,
    pub model: ModelSpec,
}

pub struct Refiner<'r> {
    rewriter: &'r dyn Rewriter,
    settings: RefineSettings,
    model: &'static ModelSpec,
}

/// Per-call accumulator.
struct Run {
    warnings: Vec<Warning>,
    units: usize,
    rewritten_units: usize,
}

impl<'r> Refiner<'r> {
    pub fn new(rewriter: &'r dyn Rewriter, settings: RefineSettings) -> Self {
        let model = ModelCatalog::resolve(settings.mode, settings.model.as_deref());
        Self {
            rewriter,
            settings,
            model,
        }
    }

    pub fn settings(&self) -> &RefineSettings {
        &self.settings
    }

    pub fn model(&self) -> &'static ModelSpec {
        self.model
    }

    /// Rewrites plain text chunk by chunk; chunks are rejoined with a blank
    /// line. Whitespace-only input is returned as-is.
    pub fn refine_text(&self, text: &str) -> Result<Refined, RefineError> {
        let chunks = chunk_text(text, self.settings.max_sentences);
        if chunks.is_empty() {
            log::warn!("No chunks created from input text");
            return self.finish(text.to_string(), Run::new());
        }

        log::info!(
            "Processing {} chunk(s) with {} sentences per chunk",
            chunks.len(),
            self.settings.max_sentences.max(1)
        );
        let mut run = Run::new();
        let out: Vec<String> = chunks
            .iter()
            .map(|chunk| self.rewrite_unit(chunk, None, &mut run))
            .collect();

        self.finish(out.join("\n\n"), run)
    }

    /// Rewrites a markdown document sentence by sentence inside each
    /// rewritable element, protecting inline code and links, and reassembles
    /// it with every other line untouched.
    pub fn refine_markdown(&self, doc: &str) -> Result<Refined, RefineError> {
        let parsed = parse_document(doc);
        let mut run = Run::new();
        run.warnings
            .extend(parsed.warnings().into_iter().map(Warning::from));

        let mut rewritten: HashMap<usize, String> = HashMap::new();
        for (position, text) in parsed.extract_processable() {
            let (safe, ledger) = preserve(&text);
            // whitespace between and around sentences is kept as written
            let mut joined = String::with_capacity(safe.len());
            let mut cursor = 0;
            for span in sentence_spans(&safe) {
                joined.push_str(&safe[cursor..span.start]);
                joined.push_str(&self.rewrite_unit(&safe[span.clone()], Some(position), &mut run));
                cursor = span.end;
            }
            joined.push_str(&safe[cursor..]);

            let restored = restore(&joined, &ledger);
            for span in restored.lost {
                run.warnings.push(match span.kind {
                    PreservedKind::Link { target_url, .. } => Warning::LinkLost {
                        position,
                        label: span.anchor,
                        url: target_url,
                    },
                    PreservedKind::InlineCode => Warning::PlaceholderLost {
                        position,
                        code: span.original_form,
                    },
                });
            }
            rewritten.insert(position, restored.text);
        }

        log::info!(
            "Rewrote {} of {} elements",
            rewritten.len(),
            parsed.elements.len()
        );
        self.finish(reconstruct(&parsed.elements, &rewritten), run)
    }

    fn rewrite_unit(&self, text: &str, position: Option<usize>, run: &mut Run) -> String {
        let unit = run.units;
        run.units += 1;

        let request = RewriteRequest::build(
            text,
            self.settings.mode,
            self.model,
            self.settings.params,
            self.settings.target_words,
        );
        match self.rewriter.rewrite(&request) {
            Ok(out) => {
                run.rewritten_units += 1;
                log::debug!(
                    "Unit {unit}: {} -> {} words",
                    text.split_whitespace().count(),
                    out.split_whitespace().count()
                );
                out
            }
            Err(e) => {
                log::warn!("Unit {unit} kept unchanged: {e}");
                run.warnings.push(Warning::RewriteFallback {
                    unit,
                    position,
                    error: e.to_string(),
                });
                text.to_string()
            }
        }
    }

    fn finish(&self, text: String, run: Run) -> Result<Refined, RefineError> {
        let failed = run.units - run.rewritten_units;
        if self.settings.require_full_success && failed > 0 {
            return Err(RefineError::Incomplete {
                failed,
                units: run.units,
                warnings: run.warnings,
            });
        }
        Ok(Refined {
            text,
            warnings: run.warnings,
            units: run.units,
            rewritten_units: run.rewritten_units,
            model: *self.model,
        })
    }
}

impl Run {
    fn new() -> Self {
        Self {
            warnings: vec![],
            units: 0,
            rewritten_units: 0,
        }
    }
}
