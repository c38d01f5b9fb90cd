//! Bounded chat history used for crude context lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Insertion-ordered turns; the oldest is evicted once `limit` is exceeded.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    turns: VecDeque<ChatTurn>,
    limit: usize,
}

impl ChatHistory {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            turns: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.limit {
            self.turns.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    /// The last `n` turns, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter().skip(self.turns.len().saturating_sub(n))
    }

    /// Contents of the last `n` turns joined by spaces
    pub fn recent_context(&self, n: usize) -> String {
        self.recent(n)
            .map(|turn| turn.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new(10)
    }
}
