//! Core data types for sentiment analysis results.

use serde::{Deserialize, Serialize};

/// Raw output of a sentiment scorer for a single text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Sentiment valence in [-1, 1]. Negative is unfavorable, positive is favorable.
    pub polarity: f64,
    /// How opinion-based the text is, in [0, 1]. 0 is factual, 1 is pure opinion.
    pub subjectivity: f64,
}

/// A comment together with its sentiment scores.
///
/// Created once per comment during classification, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredComment {
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// One of the three mutually exclusive sentiment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBucket {
    /// Map a polarity value to its bucket.
    ///
    /// Total over all floats: NaN falls through both comparisons and lands
    /// in Neutral. Recomputing from the same polarity always yields the
    /// same bucket.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentBucket::Positive
        } else if polarity < 0.0 {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::Positive => "positive",
            SentimentBucket::Neutral => "neutral",
            SentimentBucket::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored comments partitioned by bucket, each bucket in retrieval order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CategorizedComments {
    pub positive: Vec<ScoredComment>,
    pub neutral: Vec<ScoredComment>,
    pub negative: Vec<ScoredComment>,
}

impl CategorizedComments {
    pub fn bucket(&self, bucket: SentimentBucket) -> &[ScoredComment] {
        match bucket {
            SentimentBucket::Positive => &self.positive,
            SentimentBucket::Neutral => &self.neutral,
            SentimentBucket::Negative => &self.negative,
        }
    }

    pub fn bucket_mut(&mut self, bucket: SentimentBucket) -> &mut Vec<ScoredComment> {
        match bucket {
            SentimentBucket::Positive => &mut self.positive,
            SentimentBucket::Neutral => &mut self.neutral,
            SentimentBucket::Negative => &mut self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }
}

/// Full classification output: the three buckets plus the ordered table.
///
/// The table preserves retrieval order, so its position doubles as the
/// index for any time-ordered view downstream.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SentimentReport {
    pub buckets: CategorizedComments,
    pub table: Vec<ScoredComment>,
}
