//! # Rewriter Boundary
//!
//! Everything the pipeline knows about the generative step: the two modes,
//! generation parameters, the model catalog, per-unit request building and
//! the [`Rewriter`] trait itself.
//!
//! The engine never runs a model. [`IdentityRewriter`] is a dry-run stand-in
//! and [`CommandRewriter`] delegates to an external program.

mod catalog;
mod command;
mod request;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{EXPANSION_MODELS, ModelCatalog, ModelSpec, PARAPHRASE_MODELS};
pub use command::CommandRewriter;
pub use request::{DEFAULT_TARGET_WORDS, Decoding, RewriteRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Paraphrase,
    Expand,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Paraphrase => "Paraphrase",
            Mode::Expand => "Expand",
        })
    }
}

#[derive(Debug, Error)]
#[error("Unknown mode '{0}', expected 'paraphrase' or 'expand'")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paraphrase" => Ok(Mode::Paraphrase),
            "expand" => Ok(Mode::Expand),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Caller-tunable generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    /// Base generation length; the per-unit budget never goes below it.
    pub max_length: usize,
    pub num_beams: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_length: 256,
            num_beams: 4,
        }
    }
}

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Failed to start rewriter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Rewriter I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rewriter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("Rewriter produced no output")]
    EmptyOutput,
    #[error("Rewriter output is not UTF-8")]
    InvalidOutput,
}

/// The generative step. Implementations may block; the pipeline performs
/// no retries or timeouts around them.
pub trait Rewriter: Send + Sync {
    fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError>;
}

/// Returns each unit unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRewriter;

impl Rewriter for IdentityRewriter {
    fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError> {
        Ok(request.text.clone())
    }
}
