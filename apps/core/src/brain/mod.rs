//! # Brain Module
//!
//! Keyword heuristics behind the assistant. Nothing here is learned: every
//! component is a fixed word list plus counting.
//!
//! ## Components
//! - `intent`: ordered keyword rules mapping input to an intent
//! - `categorizer`: keyword-count categorization into innovation domains
//! - `scoring`: AI potential, scalability and complexity estimators
//! - `sentiment`: positive/negative lexicon balance
//! - `stakeholders`: category-based partner suggestions
//! - `generator`: template idea generation over an injected RNG
//! - `analysis`: output data structure
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod categorizer;
pub mod generator;
pub mod intent;
pub mod scoring;
pub mod sentiment;
pub mod stakeholders;

// Re-export main types for convenience
pub use analysis::Analysis;
pub use analyzer::{BasicAnalysis, IdeaAnalyzer};
pub use categorizer::{Category, CategoryScore, IdeaCategorizer};
pub use generator::{GeneratedIdea, TemplateIdeaGenerator};
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use scoring::{Level, Scalability};
pub use sentiment::{Mood, Sentiment, SentimentConfidence};
pub use stakeholders::{StakeholderGroup, StakeholderSuggester};
