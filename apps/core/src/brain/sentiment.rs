//! Lexicon sentiment scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring::count_hits;

const POSITIVE_WORDS: &[&str] = &[
    "innovative",
    "transform",
    "scale",
    "impact",
    "sustainable",
    "growth",
    "opportunity",
    "success",
    "breakthrough",
    "revolutionary",
    "empower",
    "progress",
    "advance",
    "solution",
    "positive",
    "benefit",
];

const NEGATIVE_WORDS: &[&str] = &[
    "challenge",
    "barrier",
    "limited",
    "constraint",
    "difficult",
    "problem",
    "risk",
    "issue",
    "concern",
    "obstacle",
    "limitation",
    "hardship",
];

const POSITIVE_THRESHOLD: f64 = 70.0;
const NEGATIVE_THRESHOLD: f64 = 30.0;
const POSITIVE_HIGH_CONFIDENCE_HITS: usize = 3;
const NEGATIVE_HIGH_CONFIDENCE_HITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentConfidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for SentimentConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SentimentConfidence::High => "high",
            SentimentConfidence::Medium => "medium",
            SentimentConfidence::Low => "low",
        })
    }
}

/// Sentiment of a text on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: u32,
    pub mood: Mood,
    pub confidence: SentimentConfidence,
}

impl Sentiment {
    fn neutral() -> Self {
        Self {
            score: 50,
            mood: Mood::Neutral,
            confidence: SentimentConfidence::Low,
        }
    }
}

/// Scores text by the balance of positive and negative lexicon hits.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let positive = count_hits(&lower, POSITIVE_WORDS);
    let negative = count_hits(&lower, NEGATIVE_WORDS);
    let total = positive + negative;

    if total == 0 {
        return Sentiment::neutral();
    }

    let balance = (positive as f64 - negative as f64) / total as f64;
    // Thresholds apply to the unrounded value; only the stored score is rounded.
    let raw = balance * 50.0 + 50.0;

    let (mood, confidence) = if raw >= POSITIVE_THRESHOLD {
        let confidence = if total >= POSITIVE_HIGH_CONFIDENCE_HITS {
            SentimentConfidence::High
        } else {
            SentimentConfidence::Medium
        };
        (Mood::Positive, confidence)
    } else if raw <= NEGATIVE_THRESHOLD {
        let confidence = if total >= NEGATIVE_HIGH_CONFIDENCE_HITS {
            SentimentConfidence::High
        } else {
            SentimentConfidence::Medium
        };
        (Mood::Negative, confidence)
    } else {
        (Mood::Neutral, SentimentConfidence::Medium)
    };

    Sentiment {
        score: raw.round() as u32,
        mood,
        confidence,
    }
}
