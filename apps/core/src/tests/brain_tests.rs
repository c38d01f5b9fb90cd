//! Brain Module Tests
//!
//! Intent precedence, categorization, scoring and generation across the
//! brain components.

use crate::brain::generator::{FEASIBILITY_RANGE, INNOVATION_RANGE};
use crate::brain::stakeholders::stakeholders_for;
use crate::brain::{
    Category, IdeaAnalyzer, IdeaCategorizer, Intent, IntentClassifier, Level, Mood,
    TemplateIdeaGenerator,
};
use crate::delay::NoDelay;
use std::sync::Arc;
use std::time::Duration;

#[cfg(test)]
mod intent_classifier_tests {
    use super::*;

    #[test]
    fn test_command_phrases() {
        let classifier = IntentClassifier::new();

        let cases = vec![
            ("hello there", Intent::Greeting),
            ("analyze AI funding platform for African startups", Intent::IdeaAnalysis),
            ("generate solution for digital skills gap", Intent::SolutionGeneration),
            ("insights for edtech", Intent::InsightRequest),
            ("stakeholders for clean energy startup", Intent::StakeholderRequest),
            ("predict success of AI farming app", Intent::ProgressPrediction),
            ("help", Intent::HelpRequest),
            ("tell me about solar", Intent::General),
        ];

        for (input, expected) in cases {
            let result = classifier.classify(input);
            assert_eq!(result.intent, expected, "Wrong intent for '{}'", input);
            assert_eq!(result.confidence, expected.confidence());
        }
    }

    #[test]
    fn test_substring_greeting_wins() {
        let classifier = IntentClassifier::new();

        // "this" contains "hi", and greetings are checked first
        let result = classifier.classify("analyze this");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.matched_keyword.as_deref(), Some("hi"));
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("HELP").intent, Intent::HelpRequest);
        assert_eq!(classifier.classify("What Can You Do").intent, Intent::HelpRequest);
    }
}

#[cfg(test)]
mod categorizer_tests {
    use super::*;

    #[test]
    fn test_tie_keeps_first_declared() {
        let categorizer = IdeaCategorizer::new();
        // AI, Funding and Infrastructure all score 1
        assert_eq!(
            categorizer.categorize("AI funding platform for African startups"),
            Category::AiTechnology
        );
    }

    #[test]
    fn test_strongest_category() {
        let categorizer = IdeaCategorizer::new();
        assert_eq!(
            categorizer.categorize("sales to customers via distribution"),
            Category::MarketAccess
        );
        // "training" also contains "ai", but education has more hits
        assert_eq!(
            categorizer.categorize("skills training for youth"),
            Category::EducationTraining
        );
    }

    #[test]
    fn test_no_hits_is_general() {
        assert_eq!(
            IdeaCategorizer::new().categorize("xyz"),
            Category::GeneralInnovation
        );
    }

    #[test]
    fn test_stakeholders_follow_category() {
        assert_eq!(
            stakeholders_for(Category::FundingFinance),
            vec!["African Development Bank", "VC4Africa", "Angel Investors Network", "MTN Group"]
        );
        assert_eq!(
            stakeholders_for(Category::MarketAccess),
            vec!["MTN Group", "Vodacom", "Safaricom", "Dangote Group"]
        );
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[tokio::test]
    async fn test_low_signal_idea() {
        let analyzer = IdeaAnalyzer::new(Arc::new(NoDelay), Duration::ZERO);
        let analysis = analyzer.analyze("xyz").await.unwrap();

        assert_eq!(analysis.category, Category::GeneralInnovation);
        assert_eq!(analysis.ai_potential, 30);
        assert_eq!(analysis.scalability.level, Level::Low);
        assert_eq!(analysis.scalability.score, 20);
        assert_eq!(analysis.complexity, Level::Low);
        assert_eq!(analysis.sentiment.score, 50);
        assert_eq!(analysis.sentiment.mood, Mood::Neutral);
        assert_eq!(analysis.stakeholders.len(), 4);
    }

    #[tokio::test]
    async fn test_summary_line() {
        let analyzer = IdeaAnalyzer::new(Arc::new(NoDelay), Duration::ZERO);
        let analysis = analyzer
            .analyze("AI funding platform for African startups")
            .await
            .unwrap();
        assert!(analysis.summary().starts_with("Category: AI & Technology, AI: 60%"));
    }
}

#[cfg(test)]
mod generator_tests {
    use super::*;

    fn generator(seed: u64) -> TemplateIdeaGenerator {
        TemplateIdeaGenerator::from_seed(Some(seed), Arc::new(NoDelay), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_same_seed_same_ideas() {
        let mut a = generator(42);
        let mut b = generator(42);
        for _ in 0..5 {
            assert_eq!(
                a.generate("rural clinics").await.unwrap(),
                b.generate("rural clinics").await.unwrap()
            );
        }
    }

    #[test]
    fn test_scores_in_range() {
        let mut generator = generator(7);
        for _ in 0..200 {
            let idea = generator.draw("anything");
            assert!(INNOVATION_RANGE.contains(&idea.innovation_score));
            assert!(FEASIBILITY_RANGE.contains(&idea.feasibility));
            assert!(!idea.idea.contains('{'));
        }
    }
}
