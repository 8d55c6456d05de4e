//! Compression level model
//!
//! A level names a tier of lossiness. Each tier activates a superset of the
//! stages active at the tier below it, so output length is (statistically)
//! monotonic in the level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChothaError;

/// One discrete, ordered transformation within the compaction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Collapse whitespace runs, trim ends
    Normalize,
    /// Long-form word/phrase to short abbreviation
    Abbreviate,
    /// Connective words/phrases to typographic symbols
    Symbolize,
    /// Drop articles, copulas, demonstrative/relative pronouns
    StopWords,
    /// Strip internal vowels from long words
    VowelElision,
    /// Strip common derivational suffixes
    SuffixStrip,
    /// Insert a line break after sentence-ending punctuation
    LineBreak,
    /// Wrap emphasis-worthy tokens in highlight markers
    Highlight,
}

impl Stage {
    /// All stages in pipeline application order
    pub const ORDER: [Stage; 8] = [
        Stage::Normalize,
        Stage::Abbreviate,
        Stage::Symbolize,
        Stage::StopWords,
        Stage::VowelElision,
        Stage::SuffixStrip,
        Stage::LineBreak,
        Stage::Highlight,
    ];
}

/// Named compression tier controlling which pipeline stages are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    /// Abbreviations, line breaks, highlighting only
    Low,
    /// Low plus symbolic substitution
    #[default]
    Medium,
    /// Medium plus stop-word removal
    High,
    /// High plus vowel elision and suffix stripping
    Extreme,
}

impl CompressionLevel {
    /// Whether `stage` runs at this level.
    ///
    /// Normalize, LineBreak, and Highlight run at every level; the lossy
    /// word-level stages switch on one tier at a time.
    pub fn is_active(self, stage: Stage) -> bool {
        match stage {
            Stage::Normalize | Stage::LineBreak | Stage::Highlight | Stage::Abbreviate => true,
            Stage::Symbolize => self >= CompressionLevel::Medium,
            Stage::StopWords => self >= CompressionLevel::High,
            Stage::VowelElision | Stage::SuffixStrip => self >= CompressionLevel::Extreme,
        }
    }

    /// The stages active at this level, in application order
    pub fn active_stages(self) -> Vec<Stage> {
        Stage::ORDER
            .iter()
            .copied()
            .filter(|s| self.is_active(*s))
            .collect()
    }

    /// All levels from least to most lossy
    pub fn all() -> [CompressionLevel; 4] {
        [
            CompressionLevel::Low,
            CompressionLevel::Medium,
            CompressionLevel::High,
            CompressionLevel::Extreme,
        ]
    }
}

impl FromStr for CompressionLevel {
    type Err = ChothaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(CompressionLevel::Low),
            "medium" => Ok(CompressionLevel::Medium),
            "high" => Ok(CompressionLevel::High),
            "extreme" => Ok(CompressionLevel::Extreme),
            other => Err(ChothaError::UnknownLevel(other.to_string())),
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionLevel::Low => write!(f, "low"),
            CompressionLevel::Medium => write!(f, "medium"),
            CompressionLevel::High => write!(f, "high"),
            CompressionLevel::Extreme => write!(f, "extreme"),
        }
    }
}

/// Configuration for one compaction run.
///
/// Explicit state passed into every engine call; the engine itself holds
/// nothing process-wide.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Active compression tier
    pub level: CompressionLevel,
}

impl CompressionConfig {
    /// Config at the given level
    pub fn new(level: CompressionLevel) -> Self {
        Self { level }
    }
}
