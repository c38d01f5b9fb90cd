//! Stakeholder suggestions keyed by idea category.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::categorizer::{Category, IdeaCategorizer};
use crate::delay::Delay;
use crate::error::AppError;

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 4;

/// Pool of candidate partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakeholderGroup {
    Corporate,
    Investors,
    Tech,
    Government,
    Ngos,
}

impl StakeholderGroup {
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            StakeholderGroup::Corporate => &["MTN Group", "Vodacom", "Safaricom", "Dangote Group"],
            StakeholderGroup::Investors => &[
                "African Development Bank",
                "VC4Africa",
                "Angel Investors Network",
            ],
            StakeholderGroup::Tech => &[
                "Google Africa",
                "Microsoft Africa",
                "Andela",
                "Flutterwave",
            ],
            StakeholderGroup::Government => &[
                "AU Commission",
                "National Governments",
                "Development Agencies",
            ],
            StakeholderGroup::Ngos => &[
                "UNDP Africa",
                "World Bank Africa",
                "Tony Elumelu Foundation",
            ],
        }
    }

    /// The two groups consulted for a category
    pub fn for_category(category: Category) -> [StakeholderGroup; 2] {
        match category {
            Category::AiTechnology => [StakeholderGroup::Tech, StakeholderGroup::Corporate],
            Category::FundingFinance => [StakeholderGroup::Investors, StakeholderGroup::Corporate],
            Category::EducationTraining => [StakeholderGroup::Tech, StakeholderGroup::Ngos],
            _ => [StakeholderGroup::Corporate, StakeholderGroup::Ngos],
        }
    }
}

/// Ranked stakeholders for a category, without any simulated latency
pub fn stakeholders_for(category: Category) -> Vec<String> {
    StakeholderGroup::for_category(category)
        .iter()
        .flat_map(|group| group.members().iter())
        .take(MAX_SUGGESTIONS)
        .map(|name| (*name).to_string())
        .collect()
}

/// Suggests partners for an idea after a cosmetic lookup delay
pub struct StakeholderSuggester {
    categorizer: IdeaCategorizer,
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl StakeholderSuggester {
    pub fn new(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self {
            categorizer: IdeaCategorizer::new(),
            delay,
            latency,
        }
    }

    /// Returns between one and four stakeholders for the idea.
    pub async fn suggest(&self, idea: &str) -> Result<Vec<String>, AppError> {
        self.delay.wait(self.latency).await?;
        let category = self.categorizer.categorize(idea);
        let suggested = stakeholders_for(category);
        debug!(%category, count = suggested.len(), "Suggested stakeholders");
        Ok(suggested)
    }
}
