//! Intent classification using ordered keyword rules.
//!
//! Each rule is a list of literal substrings. Rules are checked in a fixed
//! priority order and the first one with any hit wins; confidence is a
//! per-intent constant, not a measure of match strength.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hello, hi, hey)
    Greeting,
    /// Request to analyze an idea
    IdeaAnalysis,
    /// Request to generate a solution for a challenge
    SolutionGeneration,
    /// Request for dashboard insights or metrics
    InsightRequest,
    /// Request for stakeholders or partners
    StakeholderRequest,
    /// Request to predict success or progress
    ProgressPrediction,
    /// Request for the help guide
    HelpRequest,
    /// Anything else
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns the wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::IdeaAnalysis => "idea_analysis",
            Intent::SolutionGeneration => "solution_generation",
            Intent::InsightRequest => "insight_request",
            Intent::StakeholderRequest => "stakeholder_request",
            Intent::ProgressPrediction => "progress_prediction",
            Intent::HelpRequest => "help_request",
            Intent::General => "general",
        }
    }

    /// Fixed confidence reported for this intent
    pub fn confidence(&self) -> f32 {
        match self {
            Intent::Greeting => 0.9,
            Intent::IdeaAnalysis => 0.85,
            Intent::SolutionGeneration => 0.8,
            Intent::InsightRequest => 0.75,
            Intent::StakeholderRequest => 0.8,
            Intent::ProgressPrediction => 0.7,
            Intent::HelpRequest => 0.95,
            Intent::General => 0.6,
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Keyword that triggered the rule, if any
    pub matched_keyword: Option<String>,
}

/// Keyword rule for one intent
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];
const ANALYSIS_KEYWORDS: &[&str] = &["analyze", "analysis", "evaluate"];
const SOLUTION_KEYWORDS: &[&str] = &["generate", "create", "solution for"];
const INSIGHT_KEYWORDS: &[&str] = &["insight", "analytics", "metrics"];
const STAKEHOLDER_KEYWORDS: &[&str] = &["stakeholder", "partner", "collaborator"];
const PREDICTION_KEYWORDS: &[&str] = &["predict", "success", "chance"];
const HELP_KEYWORDS: &[&str] = &["help", "what can you do"];

// Order is the precedence.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        keywords: GREETING_KEYWORDS,
    },
    IntentRule {
        intent: Intent::IdeaAnalysis,
        keywords: ANALYSIS_KEYWORDS,
    },
    IntentRule {
        intent: Intent::SolutionGeneration,
        keywords: SOLUTION_KEYWORDS,
    },
    IntentRule {
        intent: Intent::InsightRequest,
        keywords: INSIGHT_KEYWORDS,
    },
    IntentRule {
        intent: Intent::StakeholderRequest,
        keywords: STAKEHOLDER_KEYWORDS,
    },
    IntentRule {
        intent: Intent::ProgressPrediction,
        keywords: PREDICTION_KEYWORDS,
    },
    IntentRule {
        intent: Intent::HelpRequest,
        keywords: HELP_KEYWORDS,
    },
];

/// Intent classifier over the fixed rule table
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify the intent of a text. Matching is case-insensitive plain
    /// substring containment; the result is never empty.
    pub fn classify(&self, text: &str) -> IntentResult {
        let lower = text.to_lowercase();

        for rule in RULES {
            if let Some(keyword) = rule.keywords.iter().find(|k| lower.contains(*k)) {
                return IntentResult {
                    intent: rule.intent,
                    confidence: rule.intent.confidence(),
                    matched_keyword: Some((*keyword).to_string()),
                };
            }
        }

        IntentResult {
            intent: Intent::General,
            confidence: Intent::General.confidence(),
            matched_keyword: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("Hello there");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.confidence, 0.9);

        let result = classifier.classify("hey");
        assert_eq!(result.intent, Intent::Greeting);
    }

    #[test]
    fn test_greeting_takes_precedence() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("hi, please analyze my idea");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.matched_keyword.as_deref(), Some("hi"));
    }

    #[test]
    fn test_analysis_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("Analyze solar kiosks for rural towns");
        assert_eq!(result.intent, Intent::IdeaAnalysis);
        assert_eq!(result.confidence, 0.85);

        // "generate" appears too, but analysis is checked first
        let result = classifier.classify("evaluate and generate");
        assert_eq!(result.intent, Intent::IdeaAnalysis);
    }

    #[test]
    fn test_substring_semantics() {
        let classifier = IntentClassifier::new();

        // "this" contains "hi"
        let result = classifier.classify("evaluate this");
        assert_eq!(result.intent, Intent::Greeting);
    }

    #[test]
    fn test_help_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("what can you do");
        assert_eq!(result.intent, Intent::HelpRequest);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_general_fallback() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.intent, Intent::General);
        assert_eq!(result.confidence, 0.6);
        assert!(result.matched_keyword.is_none());

        let result = classifier.classify("tell me about rural markets");
        assert_eq!(result.intent, Intent::General);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Intent::IdeaAnalysis.label(), "idea_analysis");
        assert_eq!(Intent::ProgressPrediction.to_string(), "progress_prediction");
    }
}
