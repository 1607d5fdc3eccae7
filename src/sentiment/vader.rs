//! VADER-backed sentiment scorer.
//!
//! VADER is a pretrained lexicon and rule-based analyzer tuned for social
//! media text, which is a good fit for YouTube comments. The lexicon ships
//! with the `vader_sentiment` crate, so scoring needs no model files and
//! is fully deterministic.

use anyhow::{Context, Result};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::models::SentimentScore;
use super::SentimentScorer;

/// Sentiment scorer backed by the VADER lexicon.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    /// Score a single text.
    ///
    /// Polarity is VADER's normalized `compound` score, already in [-1, 1].
    /// VADER has no subjectivity output, so the share of opinion-bearing
    /// tokens (`1 - neu`) stands in for it: a text made entirely of neutral
    /// tokens scores 0, a text where every token carries valence scores 1.
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let scores = self.analyzer.polarity_scores(text);

        let compound = scores
            .get("compound")
            .copied()
            .context("VADER output missing compound score")?;
        let neutral_share = scores
            .get("neu")
            .copied()
            .context("VADER output missing neutral share")?;

        Ok(SentimentScore {
            polarity: compound.clamp(-1.0, 1.0),
            subjectivity: (1.0 - neutral_share).clamp(0.0, 1.0),
        })
    }
}
