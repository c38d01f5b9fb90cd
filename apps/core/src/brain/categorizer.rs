//! Idea categorization by keyword counting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Innovation-domain label assigned to a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI & Technology")]
    AiTechnology,
    #[serde(rename = "Funding & Finance")]
    FundingFinance,
    #[serde(rename = "Education & Training")]
    EducationTraining,
    #[serde(rename = "Market Access")]
    MarketAccess,
    #[serde(rename = "Social Impact")]
    SocialImpact,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    /// Only produced for generated ideas
    #[serde(rename = "Fintech & Blockchain")]
    FintechBlockchain,
    /// Only produced for generated ideas
    #[serde(rename = "Sustainability")]
    Sustainability,
    #[serde(rename = "General Innovation")]
    GeneralInnovation,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::AiTechnology => "AI & Technology",
            Category::FundingFinance => "Funding & Finance",
            Category::EducationTraining => "Education & Training",
            Category::MarketAccess => "Market Access",
            Category::SocialImpact => "Social Impact",
            Category::Infrastructure => "Infrastructure",
            Category::FintechBlockchain => "Fintech & Blockchain",
            Category::Sustainability => "Sustainability",
            Category::GeneralInnovation => "General Innovation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword table, in declaration order. Earlier entries win ties.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::AiTechnology,
        &[
            "ai",
            "artificial intelligence",
            "machine learning",
            "algorithm",
            "data",
            "automation",
            "tech",
        ],
    ),
    (
        Category::FundingFinance,
        &[
            "fund",
            "investment",
            "capital",
            "money",
            "financial",
            "bank",
            "investor",
        ],
    ),
    (
        Category::EducationTraining,
        &["train", "educate", "skills", "learning", "capacity", "knowledge"],
    ),
    (
        Category::MarketAccess,
        &["market", "customers", "distribution", "access", "sales", "commercial"],
    ),
    (
        Category::SocialImpact,
        &[
            "community",
            "social",
            "impact",
            "sustainable",
            "development",
            "empowerment",
        ],
    ),
    (
        Category::Infrastructure,
        &["infrastructure", "system", "platform", "network", "digital"],
    ),
];

/// Hit count for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub hits: usize,
}

/// Counts keyword presence per category and picks the strongest one
#[derive(Debug, Default, Clone, Copy)]
pub struct IdeaCategorizer;

impl IdeaCategorizer {
    pub fn new() -> Self {
        Self
    }

    /// Per-category hit counts in declaration order. Each keyword counts once
    /// no matter how often it appears.
    pub fn scores(&self, text: &str) -> Vec<CategoryScore> {
        let lower = text.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .map(|(category, keywords)| CategoryScore {
                category: *category,
                hits: keywords.iter().filter(|k| lower.contains(*k)).count(),
            })
            .collect()
    }

    /// Best category; strict `>` keeps the first declared on ties and yields
    /// General Innovation when nothing matches.
    pub fn categorize(&self, text: &str) -> Category {
        let mut best = Category::GeneralInnovation;
        let mut max_hits = 0;

        for score in self.scores(text) {
            if score.hits > max_hits {
                max_hits = score.hits;
                best = score.category;
            }
        }

        best
    }
}
