//! Blueprint Tracker assistant core.
//!
//! Keyword heuristics that classify chat input, analyse innovation ideas,
//! suggest stakeholders and fill idea templates, plus the chat session that
//! ties them together.

pub mod brain;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod delay;
pub mod error;
pub mod logging;

pub use config::AssistantConfig;
pub use error::AppError;

#[cfg(test)]
mod tests;
