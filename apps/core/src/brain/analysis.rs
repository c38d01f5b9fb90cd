//! Analysis - Output structure for a comprehensive idea analysis.

use serde::{Deserialize, Serialize};

use super::categorizer::Category;
use super::scoring::{Level, Scalability};
use super::sentiment::Sentiment;

/// Complete analysis of one idea. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// The idea text that was analyzed
    pub idea: String,

    /// Best matching innovation category
    pub category: Category,

    /// Complexity rating
    pub complexity: Level,

    /// Resource needs derived from complexity
    pub resource_needs: String,

    /// Addressable market derived from scalability
    pub market_size: String,

    /// Sentiment of the description
    pub sentiment: Sentiment,

    /// AI potential in percent (30 - 100)
    pub ai_potential: u32,

    /// Scalability rating
    pub scalability: Scalability,

    /// Up to four suggested partners
    pub stakeholders: Vec<String>,

    /// Expected time to launch
    pub timeline: String,

    /// Identified risks; never empty
    pub risks: Vec<String>,

    /// Up to three recommendations; never empty
    pub recommendations: Vec<String>,
}

impl Analysis {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Category: {}, AI: {}%, Scalability: {} ({}%), Complexity: {}, Sentiment: {} ({})",
            self.category,
            self.ai_potential,
            self.scalability.level,
            self.scalability.score,
            self.complexity,
            self.sentiment.mood,
            self.sentiment.score
        )
    }
}
