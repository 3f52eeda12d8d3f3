use std::{
    io::{ErrorKind, Write},
    process::{Command, Stdio},
};

use super::{RewriteError, RewriteRequest, Rewriter};

/// Rewrites by running an external program once per unit.
///
/// The prompt is written to the program's stdin and its trimmed stdout is
/// the rewritten text. The unit text, mode, model and generation settings
/// are exposed as `REDRAFT_*` environment variables.
#[derive(Debug, Clone)]
pub struct CommandRewriter {
    program: String,
    args: Vec<String>,
}

impl CommandRewriter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds from an argv list; `None` when it is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    fn environment(request: &RewriteRequest) -> Vec<(&'static str, String)> {
        vec![
            ("REDRAFT_TEXT", request.text.clone()),
            ("REDRAFT_MODE", request.mode.to_string()),
            ("REDRAFT_MODEL", request.model.name.to_string()),
            ("REDRAFT_MODEL_PATH", request.model.path.to_string()),
            ("REDRAFT_TEMPERATURE", request.params.temperature.to_string()),
            ("REDRAFT_TOP_P", request.params.top_p.to_string()),
            ("REDRAFT_NUM_BEAMS", request.params.num_beams.to_string()),
            ("REDRAFT_MAX_LENGTH", request.max_length.to_string()),
            ("REDRAFT_MIN_LENGTH", request.min_length.to_string()),
            ("REDRAFT_DO_SAMPLE", request.decoding.do_sample.to_string()),
            ("REDRAFT_TOP_K", request.decoding.top_k.to_string()),
            (
                "REDRAFT_NO_REPEAT_NGRAM_SIZE",
                request.decoding.no_repeat_ngram_size.to_string(),
            ),
            (
                "REDRAFT_LENGTH_PENALTY",
                request.decoding.length_penalty.to_string(),
            ),
            (
                "REDRAFT_REPETITION_PENALTY",
                request.decoding.repetition_penalty.to_string(),
            ),
        ]
    }
}

impl Rewriter for CommandRewriter {
    fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .envs(Self::environment(request))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RewriteError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // a program may exit without reading its input
            if let Err(e) = stdin.write_all(request.prompt.as_bytes())
                && e.kind() != ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(RewriteError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| RewriteError::InvalidOutput)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(RewriteError::EmptyOutput);
        }
        Ok(text.to_string())
    }
}
