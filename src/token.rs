//! Parsing of raw MeCab output into tokens.
//!
//! MeCab emits one line per token in the form
//! `surface<TAB>comma,separated,features`, closing each analyzed input line
//! with an `EOS` sentinel. Only three of the UniDic feature fields matter
//! here: the two leading part-of-speech tags and the word origin.

use crate::error::AnalyzeError;

/// End-of-sentence sentinel emitted by MeCab
const EOS_MARKER: &str = "EOS";

/// UniDic feature field indices
const POS1_FIELD: usize = 0;
const POS2_FIELD: usize = 1;
const GOSHU_FIELD: usize = 12;

/// A single token from morphological analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form (表層形)
    pub surface: String,
    /// Part of speech (品詞大分類)
    pub pos1: String,
    /// Part of speech subcategory (品詞中分類)
    pub pos2: String,
    /// Word origin (語種): 漢, 和, or other
    pub goshu: String,
}

/// Parse raw MeCab output into an ordered token sequence.
///
/// `EOS` sentinel lines are dropped regardless of surrounding whitespace, as
/// are blank lines. Anything else must follow the tab/comma format above.
pub fn parse(raw: &str) -> Result<Vec<Token>, AnalyzeError> {
    raw.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && trimmed != EOS_MARKER
        })
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Result<Token, AnalyzeError> {
    let (surface, features) = line
        .split_once('\t')
        .ok_or_else(|| AnalyzeError::MissingSurface {
            line: line.to_string(),
        })?;

    let fields: Vec<&str> = features.split(',').collect();
    if fields.len() <= GOSHU_FIELD {
        return Err(AnalyzeError::MissingFeatures {
            found: fields.len(),
            line: line.to_string(),
        });
    }

    Ok(Token {
        surface: surface.to_string(),
        pos1: fields[POS1_FIELD].to_string(),
        pos2: fields[POS2_FIELD].to_string(),
        goshu: fields[GOSHU_FIELD].to_string(),
    })
}
