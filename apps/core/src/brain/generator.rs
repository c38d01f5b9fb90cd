//! Template-based idea generation.
//!
//! A sentence skeleton and vocabulary are drawn from an injected random
//! source. Output is intentionally not reproducible unless the source is
//! seeded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::categorizer::Category;
use crate::delay::Delay;
use crate::error::AppError;

pub const TEMPLATES: &[&str] = &[
    "AI-powered platform for {sector} that {benefit}",
    "Blockchain solution to {problem} in {industry}",
    "Mobile app that uses {technology} to {outcome}",
    "Sustainable {product} for {market} that {impact}",
    "Digital marketplace connecting {stakeholders} for {purpose}",
];

pub const SECTORS: &[&str] = &[
    "education",
    "healthcare",
    "agriculture",
    "finance",
    "energy",
    "transportation",
];

pub const TECHNOLOGIES: &[&str] = &[
    "machine learning",
    "blockchain",
    "IoT",
    "AR/VR",
    "big data analytics",
];

pub const INNOVATION_RANGE: std::ops::Range<u32> = 70..100;
pub const FEASIBILITY_RANGE: std::ops::Range<u32> = 60..100;

/// A generated solution with its (random) ratings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedIdea {
    pub idea: String,
    pub category: Category,
    pub innovation_score: u32,
    pub feasibility: u32,
}

/// Fills every placeholder; tokens absent from `template` are no-ops.
pub fn fill_template(template: &str, sector: &str, technology: &str) -> String {
    let industry = format!("African {}", sector);
    let substitutions: [(&str, &str); 11] = [
        ("{sector}", sector),
        ("{benefit}", "increases efficiency by 40%"),
        ("{problem}", "transparency issues"),
        ("{industry}", industry.as_str()),
        ("{technology}", technology),
        ("{outcome}", "reduce costs by 30%"),
        ("{product}", "smart device"),
        ("{market}", "local communities"),
        ("{impact}", "creates sustainable jobs"),
        ("{stakeholders}", "local producers and global buyers"),
        ("{purpose}", "fair trade"),
    ];

    substitutions
        .iter()
        .fold(template.to_string(), |acc, (token, value)| {
            acc.replacen(*token, value, 1)
        })
}

/// Category of a generated sentence. Checks are case-sensitive, so the
/// capitalised template openers ("Blockchain", "Sustainable") do not count.
pub fn categorize_generated(idea: &str) -> Category {
    if idea.contains("AI") || idea.contains("machine learning") {
        Category::AiTechnology
    } else if idea.contains("blockchain") {
        Category::FintechBlockchain
    } else if idea.contains("sustainable") || idea.contains("green") {
        Category::Sustainability
    } else {
        Category::GeneralInnovation
    }
}

/// Generator over an injected random source
pub struct TemplateIdeaGenerator<R = StdRng> {
    rng: R,
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl TemplateIdeaGenerator<StdRng> {
    /// Seeded generator when `seed` is set, entropy-seeded otherwise
    pub fn from_seed(seed: Option<u64>, delay: Arc<dyn Delay>, latency: Duration) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, delay, latency)
    }
}

impl<R: Rng + Send> TemplateIdeaGenerator<R> {
    pub fn new(rng: R, delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self {
            rng,
            delay,
            latency,
        }
    }

    /// Draws one idea without the cosmetic delay. The prompt only feeds
    /// logging; the sentence is built from random draws alone.
    pub fn draw(&mut self, prompt: &str) -> GeneratedIdea {
        let template = TEMPLATES[self.rng.gen_range(0..TEMPLATES.len())];
        let sector = SECTORS[self.rng.gen_range(0..SECTORS.len())];
        let technology = TECHNOLOGIES[self.rng.gen_range(0..TECHNOLOGIES.len())];

        let idea = fill_template(template, sector, technology);
        let generated = GeneratedIdea {
            category: categorize_generated(&idea),
            innovation_score: self.rng.gen_range(INNOVATION_RANGE),
            feasibility: self.rng.gen_range(FEASIBILITY_RANGE),
            idea,
        };
        debug!(prompt, idea = %generated.idea, "Generated template idea");
        generated
    }

    /// Waits out the "thinking" delay, then draws an idea.
    pub async fn generate(&mut self, prompt: &str) -> Result<GeneratedIdea, AppError> {
        self.delay.wait(self.latency).await?;
        Ok(self.draw(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;

    fn seeded(seed: u64) -> TemplateIdeaGenerator {
        TemplateIdeaGenerator::from_seed(Some(seed), Arc::new(NoDelay), Duration::ZERO)
    }

    #[test]
    fn test_fill_every_template() {
        for template in TEMPLATES {
            let filled = fill_template(template, "energy", "IoT");
            assert!(!filled.contains('{'), "unfilled placeholder in '{}'", filled);
            assert!(!filled.contains('}'));
        }
    }

    #[test]
    fn test_industry_uses_sector() {
        let filled = fill_template(TEMPLATES[1], "finance", "IoT");
        assert_eq!(filled, "Blockchain solution to transparency issues in African finance");
    }

    #[test]
    fn test_generated_category_rules() {
        assert_eq!(
            categorize_generated("AI-powered platform for energy that increases efficiency by 40%"),
            Category::AiTechnology
        );
        assert_eq!(
            categorize_generated("Mobile app that uses blockchain to reduce costs by 30%"),
            Category::FintechBlockchain
        );
        assert_eq!(
            categorize_generated("Blockchain solution to transparency issues in African energy"),
            Category::GeneralInnovation
        );
        assert_eq!(
            categorize_generated("Sustainable smart device for local communities that creates sustainable jobs"),
            Category::Sustainability
        );
    }

    #[tokio::test]
    async fn test_scores_in_range() {
        let mut generator = seeded(7);
        for _ in 0..50 {
            let idea = generator.generate("rural clinics").await.unwrap();
            assert!(INNOVATION_RANGE.contains(&idea.innovation_score));
            assert!(FEASIBILITY_RANGE.contains(&idea.feasibility));
            assert!(!idea.idea.is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..5 {
            assert_eq!(a.draw("x"), b.draw("x"));
        }
    }
}
