//! Polarity scoring and sentiment classification.
//!
//! Scoring (text -> float in [-1, 1]) is a replaceable capability behind
//! the [`SentimentScorer`] trait. The threshold rule mapping a score to a
//! discrete label is fixed and lives in [`SentimentLabel::from_score`] —
//! every scorer implementation shares it.

use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};

/// Score above which an entry is labeled Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Score below which an entry is labeled Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Discrete sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity score.
    ///
    /// Scores at exactly the thresholds (0.1 / -0.1) are Neutral.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Parse the stored TEXT column value back into a label.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "Positive" => Ok(SentimentLabel::Positive),
            "Negative" => Ok(SentimentLabel::Negative),
            "Neutral" => Ok(SentimentLabel::Neutral),
            other => Err(JournalError::Storage(format!(
                "Invalid sentiment label in store: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// External sentiment-scoring capability.
///
/// Implementations map raw text to a polarity score in [-1.0, 1.0].
/// A scorer failure surfaces as `JournalError::Classification`; callers
/// never fabricate a fallback score.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64>;
}

/// Default scorer: a small valence lexicon with negation damping.
///
/// The mean valence of matched words is the score; unmatched text scores
/// 0.0. A negator within the two tokens before a matched word flips and
/// damps its valence. Output is clamped to [-1, 1].
#[derive(Debug, Default, Clone)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("excellent", 0.9),
    ("fantastic", 0.9),
    ("wonderful", 0.9),
    ("love", 0.8),
    ("loved", 0.8),
    ("great", 0.8),
    ("happy", 0.7),
    ("joy", 0.7),
    ("delighted", 0.7),
    ("excited", 0.6),
    ("good", 0.6),
    ("glad", 0.6),
    ("enjoyed", 0.6),
    ("nice", 0.5),
    ("fun", 0.5),
    ("calm", 0.4),
    ("fine", 0.3),
    ("okay", 0.2),
    ("terrible", -0.9),
    ("horrible", -0.9),
    ("awful", -0.9),
    ("hate", -0.8),
    ("hated", -0.8),
    ("miserable", -0.8),
    ("angry", -0.7),
    ("depressed", -0.7),
    ("sad", -0.7),
    ("bad", -0.6),
    ("anxious", -0.6),
    ("upset", -0.6),
    ("worried", -0.5),
    ("stressed", -0.5),
    ("tired", -0.4),
    ("annoyed", -0.4),
    ("bored", -0.3),
    ("meh", -0.2),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "hardly", "dont", "didnt", "doesnt", "isnt", "wasnt", "cant",
    "cannot", "wont",
];

fn valence(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(candidate, _)| *candidate == word)
        .map(|(_, value)| *value)
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|token| !token.is_empty())
            .map(|token| token.to_lowercase().replace('\'', ""))
            .collect();

        let mut total = 0.0;
        let mut matched = 0usize;
        for (index, token) in tokens.iter().enumerate() {
            let Some(mut value) = valence(token) else {
                continue;
            };
            let negated = tokens[index.saturating_sub(2)..index]
                .iter()
                .any(|prior| NEGATORS.contains(&prior.as_str()));
            if negated {
                value *= -0.5;
            }
            total += value;
            matched += 1;
        }

        if matched == 0 {
            return Ok(0.0);
        }
        Ok((total / matched as f64).clamp(-1.0, 1.0))
    }
}
