//! Sentiment classification of comment batches.
//!
//! The scorer itself is behind the [`SentimentScorer`] trait so the lexicon
//! backend can be swapped or faked in tests; [`classify`] only relies on it
//! being a pure function of the text.

mod models;
mod vader;

pub use models::{
    CategorizedComments, ScoredComment, SentimentBucket, SentimentReport, SentimentScore,
};
pub use vader::VaderScorer;

use thiserror::Error;

/// Scores a single text. Same text must always yield the same scores.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> anyhow::Result<SentimentScore>;
}

/// Errors that can occur during classification.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("scoring failed for comment at position {position}: {source}")]
    Scoring {
        position: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// Score every comment in order and partition the results by polarity sign.
///
/// Each comment lands in the ordered table and in exactly one bucket.
/// A single scoring failure fails the whole batch: callers get no partial
/// table, matching the all-or-nothing contract of the analysis flow.
pub fn classify(
    scorer: &dyn SentimentScorer,
    comments: &[String],
) -> Result<SentimentReport, ClassificationError> {
    let mut report = SentimentReport::default();

    for (position, text) in comments.iter().enumerate() {
        let score = scorer
            .score(text)
            .map_err(|source| ClassificationError::Scoring { position, source })?;

        let scored = ScoredComment {
            text: text.clone(),
            polarity: score.polarity,
            subjectivity: score.subjectivity,
        };

        report
            .buckets
            .bucket_mut(SentimentBucket::from_polarity(scored.polarity))
            .push(scored.clone());
        report.table.push(scored);
    }

    Ok(report)
}
