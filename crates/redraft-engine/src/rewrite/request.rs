use serde::Serialize;

use crate::segment::{calculate_max_length, calculate_min_length, estimate_tokens};

use super::{GenerationParams, Mode, ModelSpec};

/// Expansion target used when the caller gives none.
pub const DEFAULT_TARGET_WORDS: usize = 300;

const PARAPHRASE_PREFIX: &str = "paraphrase: ";
const PARAPHRASE_SUFFIX: &str = " </s>";

/// Mode-dependent decoding settings passed through to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decoding {
    pub do_sample: bool,
    pub top_k: usize,
    pub no_repeat_ngram_size: usize,
    pub length_penalty: f64,
    pub repetition_penalty: f64,
}

impl Decoding {
    fn for_mode(mode: Mode, params: &GenerationParams) -> Self {
        match mode {
            Mode::Paraphrase => Self {
                do_sample: params.temperature > 0.0,
                top_k: 120,
                no_repeat_ngram_size: 2,
                length_penalty: 1.0,
                repetition_penalty: 1.2,
            },
            Mode::Expand => Self {
                do_sample: params.temperature > 0.0,
                top_k: 50,
                no_repeat_ngram_size: 3,
                length_penalty: 1.5,
                repetition_penalty: 1.2,
            },
        }
    }
}

/// One unit of work for a [`super::Rewriter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewriteRequest {
    /// The rewrite-safe unit text, without any prompt decoration.
    pub text: String,
    /// The full prompt sent to the model.
    pub prompt: String,
    pub mode: Mode,
    pub model: ModelSpec,
    pub params: GenerationParams,
    /// Per-unit generation budget.
    pub max_length: usize,
    pub min_length: usize,
    pub decoding: Decoding,
}

impl RewriteRequest {
    pub fn build(
        text: &str,
        mode: Mode,
        model: &ModelSpec,
        params: GenerationParams,
        target_words: Option<usize>,
    ) -> Self {
        let prompt = match mode {
            Mode::Paraphrase => {
                let prefix = if model.wants_task_prefix() {
                    PARAPHRASE_PREFIX
                } else {
                    ""
                };
                format!("{prefix}{text}{PARAPHRASE_SUFFIX}")
            }
            Mode::Expand => format!(
                "Expand the following text to approximately {} words, adding more details and context: {text}",
                target_words.unwrap_or(DEFAULT_TARGET_WORDS)
            ),
        };
        let max_length = calculate_max_length(text, mode, params.max_length);
        let min_length = calculate_min_length(text, mode, max_length);
        log::debug!(
            "Unit of ~{} tokens, budget {min_length}..{max_length}",
            estimate_tokens(text)
        );

        Self {
            text: text.to_string(),
            prompt,
            mode,
            model: *model,
            params,
            max_length,
            min_length,
            decoding: Decoding::for_mode(mode, &params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::ModelCatalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn paraphrase_prompt_for_t5() {
        let req = RewriteRequest::build(
            "Hello there.",
            Mode::Paraphrase,
            ModelCatalog::default_model(Mode::Paraphrase),
            GenerationParams::default(),
            None,
        );
        assert_eq!(req.prompt, "paraphrase: Hello there. </s>");
        assert_eq!(req.max_length, 256);
        assert_eq!(req.decoding.top_k, 120);
    }

    #[test]
    fn paraphrase_prompt_without_prefix() {
        let model = ModelSpec {
            name: "Pegasus",
            path: "x/pegasus",
        };
        let req = RewriteRequest::build(
            "Hi.",
            Mode::Paraphrase,
            &model,
            GenerationParams::default(),
            None,
        );
        assert_eq!(req.prompt, "Hi. </s>");
    }

    #[test]
    fn expand_prompt_uses_target() {
        let model = ModelCatalog::default_model(Mode::Expand);
        let params = GenerationParams::default();
        let req = RewriteRequest::build("Cats.", Mode::Expand, model, params, None);
        assert_eq!(
            req.prompt,
            "Expand the following text to approximately 300 words, adding more details and context: Cats."
        );
        let req = RewriteRequest::build("Cats.", Mode::Expand, model, params, Some(120));
        assert!(req.prompt.contains("approximately 120 words"));
        assert_eq!(req.decoding.no_repeat_ngram_size, 3);
    }

    #[test]
    fn zero_temperature_disables_sampling() {
        let params = GenerationParams {
            temperature: 0.0,
            ..GenerationParams::default()
        };
        let req = RewriteRequest::build(
            "x",
            Mode::Paraphrase,
            ModelCatalog::default_model(Mode::Paraphrase),
            params,
            None,
        );
        assert!(!req.decoding.do_sample);
    }
}
