//! Argument extraction for the informal chat command grammar.
//!
//! Each command is a case-insensitive regex tried in order; the first capture
//! wins. A `None` means the user named the command but gave no argument.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here: the patterns are literals.
static ANALYZE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)analyze\s+(.+)").expect("Invalid regex: analyze"),
        Regex::new(r"(?i)analysis\s+of\s+(.+)").expect("Invalid regex: analysis of"),
        Regex::new(r"(?i)evaluate\s+(.+)").expect("Invalid regex: evaluate"),
    ]
});

static SOLUTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)solution\s+for\s+(.+)").expect("Invalid regex: solution for"),
        Regex::new(r"(?i)generate\s+(.+)").expect("Invalid regex: generate"),
        Regex::new(r"(?i)create\s+solution\s+for\s+(.+)").expect("Invalid regex: create solution"),
    ]
});

static STAKEHOLDER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)stakeholders\s+for\s+(.+)").expect("Invalid regex: stakeholders for"),
        Regex::new(r"(?i)partners\s+for\s+(.+)").expect("Invalid regex: partners for"),
    ]
});

fn first_capture(patterns: &[Regex], input: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Idea named by `analyze <idea>`, `analysis of <idea>` or `evaluate <idea>`
pub fn extract_idea(input: &str) -> Option<String> {
    first_capture(&ANALYZE_PATTERNS, input)
}

/// Challenge named by `solution for <challenge>` or `generate <challenge>`
pub fn extract_challenge(input: &str) -> Option<String> {
    first_capture(&SOLUTION_PATTERNS, input)
}

/// Idea named by `stakeholders for <idea>` or `partners for <idea>`
pub fn extract_stakeholder_target(input: &str) -> Option<String> {
    first_capture(&STAKEHOLDER_PATTERNS, input)
}
