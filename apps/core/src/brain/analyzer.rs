//! Idea Analyzer - orchestrates the estimators into a full [`Analysis`].
//!
//! Coordinates categorization, scoring, sentiment, risk and recommendation
//! heuristics, and the (delayed) stakeholder lookup.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::analysis::Analysis;
use super::categorizer::{Category, IdeaCategorizer};
use super::scoring::{self, Level};
use super::sentiment::analyze_sentiment;
use super::stakeholders::StakeholderSuggester;
use crate::delay::Delay;
use crate::error::AppError;

/// Descriptions shorter than this are flagged as underdeveloped.
const MIN_DEVELOPED_LENGTH: usize = 50;
const MAX_RECOMMENDATIONS: usize = 3;

/// Category, complexity, resources and market for an idea
#[derive(Debug, Clone, PartialEq)]
pub struct BasicAnalysis {
    pub category: Category,
    pub complexity: Level,
    pub resource_needs: &'static str,
    pub market_size: &'static str,
}

/// Main analyzer that combines all heuristic components
pub struct IdeaAnalyzer {
    categorizer: IdeaCategorizer,
    stakeholders: StakeholderSuggester,
}

impl IdeaAnalyzer {
    pub fn new(delay: Arc<dyn Delay>, stakeholder_latency: Duration) -> Self {
        Self {
            categorizer: IdeaCategorizer::new(),
            stakeholders: StakeholderSuggester::new(delay, stakeholder_latency),
        }
    }

    pub fn categorizer(&self) -> &IdeaCategorizer {
        &self.categorizer
    }

    pub fn stakeholders(&self) -> &StakeholderSuggester {
        &self.stakeholders
    }

    pub fn basic_analysis(&self, idea: &str) -> BasicAnalysis {
        let complexity = scoring::complexity(idea);
        BasicAnalysis {
            category: self.categorizer.categorize(idea),
            complexity,
            resource_needs: resource_needs(complexity),
            market_size: market_size(scoring::scalability(idea).level),
        }
    }

    /// Runs every estimator over the idea and assembles the result.
    pub async fn analyze(&self, idea: &str) -> Result<Analysis, AppError> {
        let start = Instant::now();

        let basic = self.basic_analysis(idea);
        let stakeholders = self.stakeholders.suggest(idea).await?;

        let analysis = Analysis {
            idea: idea.to_string(),
            category: basic.category,
            complexity: basic.complexity,
            resource_needs: basic.resource_needs.to_string(),
            market_size: basic.market_size.to_string(),
            sentiment: analyze_sentiment(idea),
            ai_potential: scoring::ai_potential(idea),
            scalability: scoring::scalability(idea),
            stakeholders,
            timeline: timeline(basic.complexity).to_string(),
            risks: identify_risks(idea),
            recommendations: recommendations(idea),
        };

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Idea analyzed: {}",
            analysis.summary()
        );
        Ok(analysis)
    }
}

/// Expected time to launch for a complexity level
pub fn timeline(complexity: Level) -> &'static str {
    match complexity {
        Level::High => "12-24 months",
        Level::Medium => "6-12 months",
        Level::Low => "3-6 months",
    }
}

pub fn resource_needs(complexity: Level) -> &'static str {
    match complexity {
        Level::High => "Extensive",
        Level::Medium => "Moderate",
        Level::Low => "Minimal",
    }
}

pub fn market_size(scalability: Level) -> &'static str {
    match scalability {
        Level::High => "Continental",
        Level::Medium => "Regional",
        Level::Low => "Local",
    }
}

/// Risk flags; "Low risk profile" when nothing fires.
pub fn identify_risks(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut risks = Vec::new();

    if lower.contains("fund") && !lower.contains("secure") {
        risks.push("Funding uncertainty".to_string());
    }

    if lower.contains("technology") && lower.contains("new") {
        risks.push("Technology adoption risk".to_string());
    }

    // Character count, not bytes
    if text.chars().count() < MIN_DEVELOPED_LENGTH {
        risks.push("Underdeveloped concept".to_string());
    }

    if risks.is_empty() {
        risks.push("Low risk profile".to_string());
    }
    debug!(?risks, "Risks identified");
    risks
}

/// At most three recommendations, falling back to validation and MVP advice.
pub fn recommendations(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut recs: Vec<&str> = Vec::new();

    if lower.contains("ai") || lower.contains("artificial") {
        recs.push("Implement machine learning for predictive analytics");
        recs.push("Use natural language processing for user interactions");
    }

    if lower.contains("fund") || lower.contains("investment") {
        recs.push("Develop detailed financial projections");
        recs.push("Create investor pitch deck with market analysis");
    }

    if lower.contains("education") || lower.contains("training") {
        recs.push("Incorporate adaptive learning algorithms");
        recs.push("Develop mobile-first learning platform");
    }

    if recs.is_empty() {
        recs.push("Conduct market validation research");
        recs.push("Develop minimum viable product (MVP)");
    }

    recs.into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}
