//! Markdown engine backed by a pandoc subprocess.
//!
//! Every call writes its input to a temp directory, runs pandoc with `-o`
//! pointing at a file in the same directory, and reads the result back.
//! Routing stdout and stderr through files keeps the child free of pipe
//! backpressure while the parent waits.
//!
//! Binary discovery order: explicit configuration, the `MDJSON_PANDOC_BIN`
//! environment variable, then `which("pandoc")`.
//!
//! Calls carry an explicit deadline. A child still running when it expires
//! is killed and the call fails; a non-zero exit or anything on stderr
//! fails the call with pandoc's own message. Failures abort only the call
//! in question, never a surrounding pipeline.

use crate::ast::{Ast, PANDOC_API_VERSION};
use crate::engine::MarkdownEngine;
use crate::error::ConvertError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use which::which;

/// Environment variable overriding pandoc binary discovery.
pub const PANDOC_BIN_ENV: &str = "MDJSON_PANDOC_BIN";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Engine implementation that shells out to pandoc.
#[derive(Debug, Clone)]
pub struct PandocEngine {
    binary: Option<PathBuf>,
    timeout: Duration,
}

impl PandocEngine {
    pub fn new() -> Self {
        PandocEngine {
            binary: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use an explicit pandoc binary instead of discovery.
    pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary = Some(path.into());
        self
    }

    /// Override the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn resolve_binary(&self) -> Result<PathBuf, ConvertError> {
        if let Some(path) = &self.binary {
            return Ok(path.clone());
        }

        if let Some(path) = env::var_os(PANDOC_BIN_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        which("pandoc").map_err(|_| {
            ConvertError::Engine(format!(
                "Unable to locate a pandoc binary. Install pandoc or set {PANDOC_BIN_ENV} to override the detection."
            ))
        })
    }

    /// Run pandoc over `input_path`, writing to `output_path`, and return
    /// the output file's contents.
    fn run(
        &self,
        args: &[&str],
        input_path: &Path,
        output_path: &Path,
        stderr_path: &Path,
    ) -> Result<String, ConvertError> {
        let binary = self.resolve_binary()?;
        let stderr_file =
            fs::File::create(stderr_path).map_err(|e| ConvertError::Engine(e.to_string()))?;

        let mut child = Command::new(&binary)
            .args(args)
            .arg(input_path)
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(stderr_file)
            .spawn()
            .map_err(|e| {
                ConvertError::Engine(format!("Failed to launch pandoc ({}): {e}", binary.display()))
            })?;

        let status = wait_with_deadline(&mut child, self.timeout)?;

        let stderr = fs::read_to_string(stderr_path).unwrap_or_default();
        if !status.success() {
            return Err(ConvertError::Engine(format!(
                "pandoc exited with {status}: {}",
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            return Err(ConvertError::Engine(format!(
                "pandoc reported: {}",
                stderr.trim()
            )));
        }

        fs::read_to_string(output_path).map_err(|e| ConvertError::Engine(e.to_string()))
    }
}

impl Default for PandocEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<ExitStatus, ConvertError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ConvertError::Engine(format!(
                        "pandoc did not finish within {}s",
                        timeout.as_secs()
                    )));
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
            Err(e) => return Err(ConvertError::Engine(e.to_string())),
        }
    }
}

impl MarkdownEngine for PandocEngine {
    fn parse(&self, source: &str) -> Result<Ast, ConvertError> {
        let dir = tempdir().map_err(|e| ConvertError::Engine(e.to_string()))?;
        let input = dir.path().join("input.md");
        fs::write(&input, source).map_err(|e| ConvertError::Engine(e.to_string()))?;

        let output = self.run(
            &["-f", "markdown", "-t", "json"],
            &input,
            &dir.path().join("output.json"),
            &dir.path().join("stderr.log"),
        )?;

        serde_json::from_str(&output)
            .map_err(|e| ConvertError::ParseError(format!("Unreadable pandoc AST: {e}")))
    }

    fn render(&self, ast: &Ast) -> Result<String, ConvertError> {
        // Pandoc rejects version markers it doesn't know, so restamp
        // whatever the AST carries before handing it over.
        let mut payload = ast.clone();
        payload.api_version = PANDOC_API_VERSION.to_vec();

        let dir = tempdir().map_err(|e| ConvertError::Engine(e.to_string()))?;
        let input = dir.path().join("input.json");
        let json =
            serde_json::to_string(&payload).map_err(|e| ConvertError::SerializationError(e.to_string()))?;
        fs::write(&input, json).map_err(|e| ConvertError::Engine(e.to_string()))?;

        self.run(
            &["-f", "json", "-t", "markdown", "--wrap=none"],
            &input,
            &dir.path().join("output.md"),
            &dir.path().join("stderr.log"),
        )
    }
}
