//! The readability analysis pipeline.
//!
//! Wires the pieces together: external tokenization, token parsing, feature
//! extraction, and the regression model. Text flows strictly forward through
//! those stages; nothing is cached or shared between calls.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::AnalyzeError;
use crate::features;
use crate::score;
use crate::token;
use crate::tokenizer::{MecabTokenizer, Tokenizer};

/// Computes readability scores for Japanese text.
///
/// The analyzer owns its tokenizer, and with it the dictionary path, for its
/// whole lifetime. Calls are otherwise stateless and independent, so one
/// analyzer can serve any number of texts.
#[derive(Debug)]
pub struct ReadabilityAnalyzer<T = MecabTokenizer> {
    tokenizer: T,
}

impl ReadabilityAnalyzer<MecabTokenizer> {
    /// Create an analyzer running `mecab` with the given dictionary directory.
    pub fn new(dicdir: impl Into<PathBuf>) -> Self {
        Self {
            tokenizer: MecabTokenizer::new(dicdir),
        }
    }

    /// Create an analyzer from configuration.
    pub fn from_config(config: &Config) -> Result<Self, AnalyzeError> {
        let dicdir = config.get_dicdir().ok_or(AnalyzeError::MissingDictionary)?;
        let tokenizer = MecabTokenizer::new(dicdir).with_executable(config.get_executable());
        Ok(Self { tokenizer })
    }
}

impl<T: Tokenizer> ReadabilityAnalyzer<T> {
    /// Create an analyzer over a custom tokenizer implementation.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Score a text, suspending while the external analyzer runs.
    pub async fn analyze(&self, text: &str) -> Result<f64, AnalyzeError> {
        let raw = self.tokenizer.tokenize(text).await?;
        self.score_raw(&raw)
    }

    /// Score a text, blocking while the external analyzer runs.
    pub fn analyze_sync(&self, text: &str) -> Result<f64, AnalyzeError> {
        let raw = self.tokenizer.tokenize_sync(text)?;
        self.score_raw(&raw)
    }

    fn score_raw(&self, raw: &str) -> Result<f64, AnalyzeError> {
        let tokens = token::parse(raw)?;
        let features = features::extract(&tokens)?;
        let score = score::score(&features);

        tracing::debug!(
            "scored {} tokens (mean sentence length {:.2}): {:.3}",
            tokens.len(),
            features.average_sentence_length,
            score
        );

        Ok(score)
    }
}
