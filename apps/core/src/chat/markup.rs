//! Display markup translation.
//!
//! Bot replies use a tiny markdown subset. The display boundary converts it
//! with four substitutions applied in this exact order: strong, emphasis,
//! code, line break. Spans are non-greedy and never cross a newline.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here: the patterns are literals.
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid regex: strong"));
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("Invalid regex: emphasis"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("Invalid regex: code"));

/// Converts markup to the HTML fragment the chat widget renders.
pub fn render_markup(text: &str) -> String {
    let text = STRONG.replace_all(text, "<strong>${1}</strong>");
    let text = EMPHASIS.replace_all(&text, "<em>${1}</em>");
    let text = CODE.replace_all(&text, "<code>${1}</code>");
    text.replace('\n', "<br>")
}
