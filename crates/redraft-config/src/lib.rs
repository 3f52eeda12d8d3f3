use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "~/.local/share/redraft";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings. Every field is optional in the file; missing fields take
/// their defaults and command-line flags override whatever is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Append-only CSV results log.
    pub csv_log_path: PathBuf,
    /// Where refined markdown files are saved.
    pub results_dir: PathBuf,
    /// `paraphrase` or `expand`.
    pub mode: String,
    /// Model name; unset means the mode's default model.
    pub model: Option<String>,
    pub max_sentences: usize,
    /// Repetition proximity window, in content words.
    pub window: usize,
    pub target_words: usize,
    pub temperature: f64,
    pub top_p: f64,
    pub max_length: usize,
    pub num_beams: usize,
    /// External rewriter program and arguments.
    pub rewriter_command: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = PathBuf::from(shellexpand::tilde(DEFAULT_DATA_DIR).as_ref());
        Self {
            csv_log_path: data_dir.join("results.csv"),
            results_dir: data_dir.join("results"),
            mode: "paraphrase".to_string(),
            model: None,
            max_sentences: 4,
            window: 50,
            target_words: 300,
            temperature: 0.7,
            top_p: 0.9,
            max_length: 256,
            num_beams: 4,
            rewriter_command: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.csv_log_path =
            Self::expand_path(&config.csv_log_path).unwrap_or(config.csv_log_path);
        config.results_dir = Self::expand_path(&config.results_dir).unwrap_or(config.results_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/redraft");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
