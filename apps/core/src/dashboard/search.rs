//! Idea repository search.
//!
//! Keyword relevance over title, description and tags, plus the per-card
//! metrics the repository view shows next to each idea.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use validator::Validate;

use crate::brain::scoring::{ai_potential, scalability};
use crate::brain::{Category, IdeaCategorizer, Level};
use crate::delay::Delay;
use crate::error::AppError;

/// Ideas scoring above this are kept even without a substring match.
pub const RELEVANCE_THRESHOLD: f64 = 0.3;
/// Queries must be longer than this (in characters) to highlight cards.
pub const HIGHLIGHT_MIN_CHARS: usize = 2;

const TITLE_WEIGHT: f64 = 0.5;
const DESCRIPTION_WEIGHT: f64 = 0.3;
const TAG_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaRecord {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl IdeaRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Category inferred from title and description together.
    pub fn category(&self) -> Category {
        IdeaCategorizer::new().categorize(&format!("{} {}", self.title, self.description))
    }

    /// Bar widths shown on the idea card, computed from the title only.
    pub fn card_metrics(&self) -> CardMetrics {
        CardMetrics {
            ai_potential: ai_potential(&self.title),
            scalability: scalability(&self.title).score,
        }
    }
}

/// Percent widths of the two score bars on an idea card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMetrics {
    pub ai_potential: u32,
    pub scalability: u32,
}

/// Narrowing applied after relevance matching. Defaults match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub category: Option<Category>,
    #[validate(range(max = 100))]
    #[serde(default)]
    pub min_ai_score: u32,
    pub scalability: Option<Level>,
}

impl SearchFilters {
    fn accepts(&self, idea: &IdeaRecord) -> bool {
        if let Some(category) = self.category {
            if idea.category() != category {
                return false;
            }
        }
        let metrics = idea.card_metrics();
        if metrics.ai_potential < self.min_ai_score {
            return false;
        }
        if let Some(level) = self.scalability {
            if scalability(&idea.title).level != level {
                return false;
            }
        }
        true
    }
}

/// Searches an in-memory idea repository.
pub struct IdeaSearch {
    ideas: Vec<IdeaRecord>,
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl IdeaSearch {
    pub fn new(ideas: Vec<IdeaRecord>, delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self {
            ideas,
            delay,
            latency,
        }
    }

    pub fn ideas(&self) -> &[IdeaRecord] {
        &self.ideas
    }

    /// Mean per-word score: 0.5 for a title hit, 0.3 for a description hit
    /// and 0.2 for an exact tag match.
    pub fn relevance(idea: &IdeaRecord, query: &str) -> f64 {
        let query = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let title = idea.title.to_lowercase();
        let description = idea.description.to_lowercase();
        let score: f64 = words
            .iter()
            .map(|word| {
                let mut s = 0.0;
                if title.contains(word) {
                    s += TITLE_WEIGHT;
                }
                if description.contains(word) {
                    s += DESCRIPTION_WEIGHT;
                }
                if idea.tags.iter().any(|t| t == word) {
                    s += TAG_WEIGHT;
                }
                s
            })
            .sum();

        score / words.len() as f64
    }

    /// Returns matching ideas, most relevant first. A blank query returns
    /// every idea in repository order without waiting.
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<IdeaRecord>, AppError> {
        filters
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let query = query.trim();
        if query.is_empty() {
            return Ok(self
                .ideas
                .iter()
                .filter(|idea| filters.accepts(idea))
                .cloned()
                .collect());
        }

        self.delay.wait(self.latency).await?;

        let needle = query.to_lowercase();
        let mut results: Vec<(f64, &IdeaRecord)> = self
            .ideas
            .iter()
            .map(|idea| (Self::relevance(idea, query), idea))
            .filter(|(score, idea)| {
                idea.title.to_lowercase().contains(&needle)
                    || idea.description.to_lowercase().contains(&needle)
                    || *score > RELEVANCE_THRESHOLD
            })
            .filter(|(_, idea)| filters.accepts(idea))
            .collect();

        // Stable sort keeps repository order among equal scores
        results.sort_by(|a, b| b.0.total_cmp(&a.0));
        debug!(query, hits = results.len(), "Idea search complete");

        Ok(results.into_iter().map(|(_, idea)| idea.clone()).collect())
    }

    /// One flag per idea telling whether its card is highlighted, or `None`
    /// when the query is too short to change the current highlighting.
    pub fn highlight(&self, query: &str) -> Option<Vec<bool>> {
        if query.chars().count() <= HIGHLIGHT_MIN_CHARS {
            return None;
        }
        let needle = query.to_lowercase();
        let flags: Vec<bool> = self
            .ideas
            .iter()
            .map(|idea| idea.title.to_lowercase().contains(&needle))
            .collect();
        info!(
            highlighted = flags.iter().filter(|f| **f).count(),
            "Highlighting ideas"
        );
        Some(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;

    fn repository() -> IdeaSearch {
        IdeaSearch::new(
            vec![
                IdeaRecord::new("Solar kiosks", "Off-grid energy for rural markets")
                    .with_tags(["energy", "solar"]),
                IdeaRecord::new("AI tutor platform", "Adaptive learning for students")
                    .with_tags(["education", "ai"]),
                IdeaRecord::new("Mobile money ledger", "Payments for informal traders")
                    .with_tags(["fintech"]),
            ],
            Arc::new(NoDelay),
            Duration::ZERO,
        )
    }

    #[test]
    fn test_relevance_weights() {
        let idea = IdeaRecord::new("Solar kiosks", "Solar energy").with_tags(["solar"]);
        assert!((IdeaSearch::relevance(&idea, "solar") - 1.0).abs() < 1e-9);
        assert!((IdeaSearch::relevance(&idea, "solar water") - 0.5).abs() < 1e-9);
        assert_eq!(IdeaSearch::relevance(&idea, "   "), 0.0);
    }

    #[tokio::test]
    async fn test_blank_query_returns_all() {
        let search = repository();
        let results = search.search("  ", &SearchFilters::default()).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Solar kiosks");
    }

    #[tokio::test]
    async fn test_substring_match_and_ordering() {
        let search = repository();
        let results = search
            .search("learning", &SearchFilters::default())
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "AI tutor platform");
    }

    #[tokio::test]
    async fn test_filters_narrow_results() {
        let search = repository();
        let filters = SearchFilters {
            min_ai_score: 50,
            ..SearchFilters::default()
        };
        let results = search.search("", &filters).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "AI tutor platform");
    }

    #[tokio::test]
    async fn test_invalid_filter_rejected() {
        let filters = SearchFilters {
            min_ai_score: 150,
            ..SearchFilters::default()
        };
        let err = repository().search("solar", &filters).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_highlight() {
        let search = repository();
        assert_eq!(search.highlight("ai"), None);
        assert_eq!(search.highlight("Solar"), Some(vec![true, false, false]));
    }

    #[test]
    fn test_card_metrics() {
        let idea = IdeaRecord::new("AI tutor platform", "");
        // "platform" scores as both a tech term and a scalable term
        let metrics = idea.card_metrics();
        assert_eq!(metrics.ai_potential, 60);
        assert_eq!(metrics.scalability, 20);
    }
}
