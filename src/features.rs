//! Lexical feature extraction from token sequences.
//!
//! The readability model consumes five statistics per text: the proportions
//! of Chinese-origin words (漢語), native Japanese words (和語), verbs, and
//! particles, plus the mean number of tokens per sentence.

use crate::error::AnalyzeError;
use crate::token::Token;

/// Word origin markers (語種)
const GOSHU_KANGO: &str = "漢";
const GOSHU_WAGO: &str = "和";

/// Part-of-speech tags
const POS_VERB: &str = "動詞";
const POS_PARTICLE: &str = "助詞";

/// Verb subcategory excluded from the verb count: bound-auxiliary-capable
/// forms such as the あり in あります behave like particles, not content verbs
const POS2_BOUND_AUXILIARY: &str = "非自立可能";

/// Sentence-terminating punctuation
const SENTENCE_TERMINATORS: [&str; 4] = ["。", "？", "！", "．"];

/// Lexical features of one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    /// Chinese-origin word proportion (漢語率), percent
    pub kango: f64,
    /// Native Japanese word proportion (和語率), percent
    pub wago: f64,
    /// Verb proportion (動詞率), percent
    pub verbs: f64,
    /// Particle proportion (助詞率), percent
    pub particles: f64,
    /// Mean tokens per sentence (平均文長)
    pub average_sentence_length: f64,
}

/// Compute the feature bundle for a token sequence.
///
/// Fails with [`AnalyzeError::EmptyInput`] for an empty sequence, since the
/// proportions are undefined without at least one token.
pub fn extract(tokens: &[Token]) -> Result<Features, AnalyzeError> {
    if tokens.is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }

    let mut kango = 0usize;
    let mut wago = 0usize;
    let mut verbs = 0usize;
    let mut particles = 0usize;

    for token in tokens {
        match token.goshu.as_str() {
            GOSHU_KANGO => kango += 1,
            GOSHU_WAGO => wago += 1,
            _ => {}
        }
        match token.pos1.as_str() {
            POS_VERB if token.pos2 != POS2_BOUND_AUXILIARY => verbs += 1,
            POS_PARTICLE => particles += 1,
            _ => {}
        }
    }

    let total = tokens.len() as f64;
    let sentences = split_sentences(tokens);
    let token_sum: usize = sentences.iter().map(|sentence| sentence.len()).sum();

    Ok(Features {
        kango: 100.0 * kango as f64 / total,
        wago: 100.0 * wago as f64 / total,
        verbs: 100.0 * verbs as f64 / total,
        particles: 100.0 * particles as f64 / total,
        average_sentence_length: token_sum as f64 / sentences.len() as f64,
    })
}

/// Split a token sequence into sentences.
///
/// A sentence ends at a token whose surface form is exactly one terminal
/// punctuation mark, inclusive of that token. Tokens after the last
/// terminator form one final sentence; a sequence with no terminator at all
/// is a single sentence.
pub fn split_sentences(tokens: &[Token]) -> Vec<&[Token]> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if SENTENCE_TERMINATORS.contains(&token.surface.as_str()) {
            sentences.push(&tokens[start..=i]);
            start = i + 1;
        }
    }
    if start < tokens.len() {
        sentences.push(&tokens[start..]);
    }

    sentences
}
