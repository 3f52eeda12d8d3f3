use serde::Serialize;

use super::Mode;

/// A named model and the identifier the generative backend loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    pub name: &'static str,
    pub path: &'static str,
}

impl ModelSpec {
    /// T5-family paraphrasers expect a `paraphrase: ` task prefix.
    pub fn wants_task_prefix(&self) -> bool {
        self.name.contains("T5")
    }
}

pub const PARAPHRASE_MODELS: &[ModelSpec] = &[ModelSpec {
    name: "ChatGPT-Style-T5",
    path: "humarin/chatgpt_paraphraser_on_T5_base",
}];

pub const EXPANSION_MODELS: &[ModelSpec] = &[
    ModelSpec {
        name: "Flan-T5-Base",
        path: "google/flan-t5-base",
    },
    ModelSpec {
        name: "Flan-T5-Large",
        path: "google/flan-t5-large",
    },
];

/// Lookup of the models available to each mode.
pub struct ModelCatalog;

impl ModelCatalog {
    pub fn models(mode: Mode) -> &'static [ModelSpec] {
        match mode {
            Mode::Paraphrase => PARAPHRASE_MODELS,
            Mode::Expand => EXPANSION_MODELS,
        }
    }

    pub fn default_model(mode: Mode) -> &'static ModelSpec {
        &Self::models(mode)[0]
    }

    /// Finds `name` among the mode's models, falling back to the mode's
    /// default. An unknown name is logged; `None` silently picks the default.
    pub fn resolve(mode: Mode, name: Option<&str>) -> &'static ModelSpec {
        let Some(name) = name else {
            return Self::default_model(mode);
        };
        match Self::models(mode).iter().find(|m| m.name == name) {
            Some(spec) => spec,
            None => {
                let fallback = Self::default_model(mode);
                log::warn!(
                    "Model '{name}' not found for {mode}, using default: {}",
                    fallback.name
                );
                fallback
            }
        }
    }
}
