use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an analyzer treats an offending sentence: annotate only, annotate
/// for downstream warnings, or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Keep,
    Flag,
    Remove,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Mode::Keep),
            "flag" => Ok(Mode::Flag),
            "remove" => Ok(Mode::Remove),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be within [0.0, 1.0], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f32 },

    #[error("decay_factor must be within (0.0, 1.0], got {0}")]
    InvalidDecayFactor(f32),

    #[error("unknown mode {0:?} (expected \"keep\", \"flag\", or \"remove\")")]
    UnknownMode(String),
}

fn check_unit_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub enabled: bool,
    /// Applies to sentences carrying only unnamed-source language.
    pub unnamed_sources: Mode,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            enabled: true,
            unnamed_sources: Mode::Flag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerConfig {
    pub enabled: bool,
    /// Sentences shorter than this are dropped unless they carry entities
    /// or quote marks.
    pub min_word_count: usize,
    pub min_entity_density: f32,
}

impl Default for FillerConfig {
    fn default() -> Self {
        FillerConfig {
            enabled: true,
            min_word_count: 4,
            min_entity_density: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalConfig {
    pub enabled: bool,
    pub mode: Mode,
    pub threshold: f32,
    /// Whether superlatives count toward the emotional lexicon.
    pub track_superlatives: bool,
}

impl Default for EmotionalConfig {
    fn default() -> Self {
        EmotionalConfig {
            enabled: true,
            mode: Mode::Remove,
            threshold: 0.3,
            track_superlatives: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeculationConfig {
    pub enabled: bool,
    pub mode: Mode,
    pub threshold: f32,
    /// Marker-count override: more markers than this drops the sentence
    /// even when the normalized score stays under the threshold.
    pub max_hedges_per_sentence: usize,
}

impl Default for SpeculationConfig {
    fn default() -> Self {
        SpeculationConfig {
            enabled: true,
            mode: Mode::Remove,
            threshold: 0.5,
            max_hedges_per_sentence: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub enabled: bool,
    /// Circular quotes are always dropped; this only spares quotes that
    /// merely lack attribution.
    pub keep_unattributed: bool,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            enabled: true,
            keep_unattributed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimConfig {
    pub enabled: bool,
    pub min_confidence: f32,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        ClaimConfig {
            enabled: true,
            min_confidence: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoveltyConfig {
    pub enabled: bool,
    /// Positional decay applied as `decay_factor^(index / 10)`.
    pub decay_factor: f32,
}

impl Default for NoveltyConfig {
    fn default() -> Self {
        NoveltyConfig {
            enabled: true,
            decay_factor: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepetitionConfig {
    pub enabled: bool,
    pub similarity_threshold: f32,
    /// Sentences below this word count never enter the candidate set.
    pub min_sentence_length: usize,
}

impl Default for RepetitionConfig {
    fn default() -> Self {
        RepetitionConfig {
            enabled: true,
            similarity_threshold: 0.7,
            min_sentence_length: 5,
        }
    }
}

/// Configuration for one extraction pipeline, one section per analyzer.
///
/// Validated once at pipeline construction; a pipeline that was built
/// never fails on thresholds mid-run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub sources: SourceConfig,
    pub filler: FillerConfig,
    pub emotional: EmotionalConfig,
    pub speculation: SpeculationConfig,
    pub quotes: QuoteConfig,
    pub claims: ClaimConfig,
    pub novelty: NoveltyConfig,
    pub repetition: RepetitionConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_range("filler.min_entity_density", self.filler.min_entity_density)?;
        check_unit_range("emotional.threshold", self.emotional.threshold)?;
        check_unit_range("speculation.threshold", self.speculation.threshold)?;
        check_unit_range("claims.min_confidence", self.claims.min_confidence)?;
        check_unit_range(
            "repetition.similarity_threshold",
            self.repetition.similarity_threshold,
        )?;

        if !(self.novelty.decay_factor > 0.0 && self.novelty.decay_factor <= 1.0) {
            return Err(ConfigError::InvalidDecayFactor(self.novelty.decay_factor));
        }

        Ok(())
    }
}
