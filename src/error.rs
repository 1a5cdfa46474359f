//! Error types for readability analysis.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced while analyzing a text.
///
/// No variant is recovered from internally; every failure is handed to the
/// caller as-is, with no retry and no fallback score.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Spawning or driving the MeCab process failed
    #[error("failed to invoke mecab: {0}")]
    Io(#[from] std::io::Error),

    /// MeCab ran but exited unsuccessfully (e.g. invalid dictionary path)
    #[error("mecab exited unsuccessfully ({status}): {stderr}")]
    Mecab {
        status: ExitStatus,
        stderr: String,
    },

    /// Analyzer output line without a tab between surface form and features
    #[error("malformed analyzer output: no tab separator in line {line:?}")]
    MissingSurface { line: String },

    /// Analyzer output line with too few comma-separated feature fields
    #[error("malformed analyzer output: expected at least 13 feature fields, found {found} in line {line:?}")]
    MissingFeatures { found: usize, line: String },

    /// The analyzer produced no tokens, so no proportions can be computed
    #[error("no tokens to analyze")]
    EmptyInput,

    /// No dictionary directory was configured
    #[error("no mecab dictionary directory configured")]
    MissingDictionary,
}
