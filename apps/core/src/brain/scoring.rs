//! Keyword-presence score estimators.
//!
//! Every estimator is a pure function of the input text. Matching is
//! case-insensitive substring containment and each term counts at most once.

use serde::{Deserialize, Serialize};
use std::fmt;

const AI_TERMS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "algorithm",
    "data analysis",
    "predictive",
    "automation",
    "intelligent",
    "smart system",
];

const TECH_TERMS: &[&str] = &[
    "platform",
    "digital",
    "mobile",
    "web",
    "app",
    "software",
    "technology",
    "innovation",
    "blockchain",
    "iot",
];

const SCALABLE_TERMS: &[&str] = &[
    "platform",
    "scale",
    "scalable",
    "continental",
    "africa",
    "global",
    "digital",
    "mobile",
    "replicable",
    "expansion",
    "growth",
];

const COMPLEXITY_INDICATORS: &[&str] = &[
    "platform",
    "system",
    "integrated",
    "multiple",
    "complex",
    "advanced",
    "sophisticated",
    "comprehensive",
];

pub const AI_POTENTIAL_BASE: u32 = 30;
pub const AI_POTENTIAL_MAX: u32 = 100;
const AI_TERM_POINTS: u32 = 20;
const TECH_TERM_POINTS: u32 = 10;
const SCALABLE_TERM_POINTS: u32 = 15;

/// Three-step rating used by scalability and complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::High => "High",
            Level::Medium => "Medium",
            Level::Low => "Low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scalability rating with its display score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalability {
    pub level: Level,
    pub score: u32,
}

/// Number of `terms` present in already lower-cased `text`
pub(crate) fn count_hits(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| text.contains(*t)).count()
}

/// AI potential: 30 base, +20 per AI term, +10 per tech term, clamped to
/// [30, 100].
pub fn ai_potential(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let score = AI_POTENTIAL_BASE
        + AI_TERM_POINTS * count_hits(&lower, AI_TERMS) as u32
        + TECH_TERM_POINTS * count_hits(&lower, TECH_TERMS) as u32;
    score.clamp(AI_POTENTIAL_BASE, AI_POTENTIAL_MAX)
}

/// Raw scalability points before level thresholds are applied
pub fn scalability_points(text: &str) -> u32 {
    let lower = text.to_lowercase();
    SCALABLE_TERM_POINTS * count_hits(&lower, SCALABLE_TERMS) as u32
}

/// Scalability: 15 points per term. High at 60+ (capped at 100), Medium at
/// 30+, otherwise Low with a floor of 20.
pub fn scalability(text: &str) -> Scalability {
    let points = scalability_points(text);
    if points >= 60 {
        Scalability {
            level: Level::High,
            score: points.min(100),
        }
    } else if points >= 30 {
        Scalability {
            level: Level::Medium,
            score: points,
        }
    } else {
        Scalability {
            level: Level::Low,
            score: points.max(20),
        }
    }
}

/// Complexity from the number of indicator terms: 3+ High, 1+ Medium.
pub fn complexity(text: &str) -> Level {
    let lower = text.to_lowercase();
    match count_hits(&lower, COMPLEXITY_INDICATORS) {
        n if n >= 3 => Level::High,
        n if n >= 1 => Level::Medium,
        _ => Level::Low,
    }
}
