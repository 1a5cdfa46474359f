//! Invocation of the external MeCab analyzer.
//!
//! Morphological analysis itself is fully delegated: this module only knows
//! how to run `mecab -d <dicdir>`, feed it text on stdin, and hand back the
//! raw line-oriented output.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::AnalyzeError;

const DEFAULT_EXECUTABLE: &str = "mecab";

/// Produces raw morphological analysis for a text.
///
/// Both operations must return the same output for the same text; the async
/// variant suspends instead of blocking while the analyzer runs.
#[async_trait]
pub trait Tokenizer: Send + Sync {
    /// Blocking invocation
    fn tokenize_sync(&self, text: &str) -> Result<String, AnalyzeError>;

    /// Suspending invocation
    async fn tokenize(&self, text: &str) -> Result<String, AnalyzeError>;
}

/// Runs the `mecab` executable against a UniDic dictionary directory.
#[derive(Debug, Clone)]
pub struct MecabTokenizer {
    executable: PathBuf,
    dicdir: PathBuf,
}

impl MecabTokenizer {
    /// Create a tokenizer for the given dictionary directory, using `mecab`
    /// from `PATH`.
    pub fn new(dicdir: impl Into<PathBuf>) -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            dicdir: dicdir.into(),
        }
    }

    /// Override the MeCab executable path.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Dictionary directory passed to every invocation.
    pub fn dicdir(&self) -> &Path {
        &self.dicdir
    }

    fn collect_output(output: Output) -> Result<String, AnalyzeError> {
        if !output.status.success() {
            return Err(AnalyzeError::Mecab {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl Tokenizer for MecabTokenizer {
    fn tokenize_sync(&self, text: &str) -> Result<String, AnalyzeError> {
        use std::io::Write;

        tracing::debug!(
            "invoking {} -d {}",
            self.executable.display(),
            self.dicdir.display()
        );

        let mut child = std::process::Command::new(&self.executable)
            .arg("-d")
            .arg(&self.dicdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        Self::collect_output(output)
    }

    async fn tokenize(&self, text: &str) -> Result<String, AnalyzeError> {
        tracing::debug!(
            "invoking {} -d {}",
            self.executable.display(),
            self.dicdir.display()
        );

        let mut child = tokio::process::Command::new(&self.executable)
            .arg("-d")
            .arg(&self.dicdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;
        Self::collect_output(output)
    }
}
