//! File and log persistence: markdown input validation, timestamped result
//! files and the append-only CSV results log.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::report::LogRecord;

/// Largest markdown file accepted, in bytes.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid file type. Expected .md file, got '{0}'")]
    InvalidExtension(String),
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("File is empty: {0}")]
    Empty(PathBuf),
    #[error("File is not UTF-8 encoded: {0}")]
    Encoding(PathBuf),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a markdown file after checking that it exists, has an `.md`
/// extension (any case), is non-empty and no larger than [`MAX_FILE_SIZE`].
pub fn read_markdown_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    if !ext.eq_ignore_ascii_case("md") {
        return Err(IoError::InvalidExtension(ext));
    }

    let size = fs::metadata(path)?.len();
    if size > MAX_FILE_SIZE {
        return Err(IoError::TooLarge {
            size,
            max: MAX_FILE_SIZE,
        });
    }
    if size == 0 {
        return Err(IoError::Empty(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| IoError::Encoding(path.to_path_buf()))?;
    log::info!("Read markdown file: {} ({size} bytes)", path.display());
    Ok(content)
}

/// Filename-safe form of a file's stem: characters other than word
/// characters, whitespace and `-` are removed, the result is trimmed and
/// spaces become `_`.
pub fn sanitize_stem(original_name: &str) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let kept: String = stem
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    let cleaned = kept.trim().replace(' ', "_");
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

/// Writes `content` to `dir/{YYYYMMDD_HHMMSS}_{stem}.md`, creating `dir` if
/// needed, and returns the path written.
pub fn save_markdown_file(
    content: &str,
    original_name: &str,
    dir: &Path,
) -> Result<PathBuf, IoError> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{timestamp}_{}.md", sanitize_stem(original_name)));

    fs::create_dir_all(dir)?;
    fs::write(&path, content)?;
    log::info!("Saved file: {}", path.display());
    Ok(path)
}

/// Append-only CSV log with one row per processed document.
///
/// The header row is written when the file is created (or found empty).
/// Appends from multiple threads are serialised.
#[derive(Debug)]
pub struct CsvLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &LogRecord) -> Result<(), IoError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let needs_header = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        if needs_header {
            log::info!("Creating CSV log file: {}", self.path.display());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        log::debug!("Logged result to CSV: {}", self.path.display());
        Ok(())
    }
}
