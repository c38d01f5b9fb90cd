use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use tokio::sync::oneshot;

use super::history::Role;
use super::markup::render_markup;
use super::session::InFlightGuard;
use super::voice::VoiceOutcome;

/// A message as shown in the chat widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayMessage {
    pub role: Role,
    /// Raw text, including markup delimiters.
    pub content: String,
    /// Text after markup translation (bot replies) or verbatim.
    pub html: String,
    /// Whether the message is rendered with the "AI" badge and markup.
    pub ai_formatted: bool,
    pub timestamp: DateTime<Utc>,
}

impl DisplayMessage {
    pub fn user(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            role: Role::User,
            html: content.clone(),
            content,
            ai_formatted: false,
            timestamp: Utc::now(),
        }
    }

    /// Bot message; markup is translated only when `ai_formatted` is set.
    pub fn bot(content: impl Into<String>, ai_formatted: bool) -> Self {
        let content = content.into();
        let html = if ai_formatted {
            render_markup(&content)
        } else {
            content.clone()
        };
        Self {
            role: Role::Bot,
            content,
            html,
            ai_formatted,
            timestamp: Utc::now(),
        }
    }

    /// Local `HH:MM` label shown next to the message.
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Why a submission was dropped without being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty or whitespace only.
    Empty,
    /// Another message is still in flight.
    Busy,
}

/// Result of submitting a message to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Ignored(IgnoreReason),
    Replied {
        user: DisplayMessage,
        reply: DisplayMessage,
    },
}

impl SendOutcome {
    pub fn reply(&self) -> Option<&DisplayMessage> {
        match self {
            SendOutcome::Replied { reply, .. } => Some(reply),
            SendOutcome::Ignored(_) => None,
        }
    }
}

/// Result of a voice interaction routed through a session.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceReply {
    /// The recognizer outcome did not produce a chat exchange.
    Outcome(VoiceOutcome),
    /// The transcript was auto-sent.
    Sent(SendOutcome),
    /// No recognizer; the notice was appended to the transcript.
    Unsupported(DisplayMessage),
}

/// Messages that can be sent to the session actor.
#[derive(Debug)]
pub enum SessionMessage {
    /// Process a user message. The guard was acquired by the handle.
    Send {
        input: String,
        guard: InFlightGuard,
        responder: oneshot::Sender<SendOutcome>,
    },
    /// Run one voice listening session.
    Voice {
        responder: oneshot::Sender<VoiceReply>,
    },
    /// Snapshot of the display transcript.
    Transcript {
        responder: oneshot::Sender<Vec<DisplayMessage>>,
    },
    /// Stop the actor.
    Shutdown,
}
