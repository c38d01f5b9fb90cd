//! Assistant configuration.
//!
//! Defaults mirror the dashboard's built-in timings. Every field can be
//! overridden through a `BLUEPRINT_*` environment variable (optionally from a
//! `.env` file) and the result is validated before use.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;

const ENV_REPLY_DELAY: &str = "BLUEPRINT_REPLY_DELAY_MS";
const ENV_STAKEHOLDER_DELAY: &str = "BLUEPRINT_STAKEHOLDER_DELAY_MS";
const ENV_GENERATION_DELAY: &str = "BLUEPRINT_GENERATION_DELAY_MS";
const ENV_VOICE_DELAY: &str = "BLUEPRINT_VOICE_DELAY_MS";
const ENV_SEARCH_DELAY: &str = "BLUEPRINT_SEARCH_DELAY_MS";
const ENV_HISTORY_LIMIT: &str = "BLUEPRINT_HISTORY_LIMIT";
const ENV_CONTEXT_WINDOW: &str = "BLUEPRINT_CONTEXT_WINDOW";
const ENV_SEED: &str = "BLUEPRINT_SEED";

/// Runtime settings for a chat session and the dashboard helpers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantConfig {
    /// Pause between generating a reply and appending it, in milliseconds.
    #[validate(range(max = 10_000))]
    pub reply_delay_ms: u64,
    /// Simulated lookup time for stakeholder suggestions.
    #[validate(range(max = 10_000))]
    pub stakeholder_delay_ms: u64,
    /// Simulated "thinking" time for template idea generation.
    #[validate(range(max = 10_000))]
    pub generation_delay_ms: u64,
    /// Pause before a recognised voice command is auto-sent.
    #[validate(range(max = 10_000))]
    pub voice_delay_ms: u64,
    /// Simulated latency of the idea search.
    #[validate(range(max = 10_000))]
    pub search_delay_ms: u64,
    /// Maximum number of turns kept in the chat history.
    #[validate(range(min = 1, max = 100))]
    pub history_limit: usize,
    /// Number of recent turns consulted for contextual replies.
    #[validate(range(min = 1, max = 100))]
    pub context_window: usize,
    /// Fixed seed for the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            stakeholder_delay_ms: 500,
            generation_delay_ms: 2000,
            voice_delay_ms: 800,
            search_delay_ms: 500,
            history_limit: 10,
            context_window: 3,
            seed: None,
        }
    }
}

impl AssistantConfig {
    /// Loads `.env` if present, then applies environment overrides on top of
    /// the defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenv::dotenv();
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Assistant configuration loaded");
        Ok(config)
    }

    /// Overrides fields for which an environment variable is set.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Some(v) = env_u64(ENV_REPLY_DELAY)? {
            self.reply_delay_ms = v;
        }
        if let Some(v) = env_u64(ENV_STAKEHOLDER_DELAY)? {
            self.stakeholder_delay_ms = v;
        }
        if let Some(v) = env_u64(ENV_GENERATION_DELAY)? {
            self.generation_delay_ms = v;
        }
        if let Some(v) = env_u64(ENV_VOICE_DELAY)? {
            self.voice_delay_ms = v;
        }
        if let Some(v) = env_u64(ENV_SEARCH_DELAY)? {
            self.search_delay_ms = v;
        }
        if let Some(v) = env_u64(ENV_HISTORY_LIMIT)? {
            self.history_limit = v as usize;
        }
        if let Some(v) = env_u64(ENV_CONTEXT_WINDOW)? {
            self.context_window = v as usize;
        }
        if let Some(v) = env_u64(ENV_SEED)? {
            self.seed = Some(v);
        }
        Ok(())
    }

    /// Configuration with every cosmetic delay removed.
    pub fn without_delays() -> Self {
        Self {
            reply_delay_ms: 0,
            stakeholder_delay_ms: 0,
            generation_delay_ms: 0,
            voice_delay_ms: 0,
            search_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn stakeholder_delay(&self) -> Duration {
        Duration::from_millis(self.stakeholder_delay_ms)
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn voice_delay(&self) -> Duration {
        Duration::from_millis(self.voice_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

fn env_u64(key: &str) -> Result<Option<u64>, AppError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", key, e))),
        _ => Ok(None),
    }
}
