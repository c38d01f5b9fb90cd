//! Voice input.
//!
//! Speech-to-text is an external capability. A listening session is
//! single-shot: it yields at most one final transcript, after which the
//! transcript is handed to the regular message pipeline.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use crate::chat::session::InFlightGuard;
use crate::error::AppError;

/// Words that make a transcript worth sending without confirmation
const AUTO_SEND_KEYWORDS: &[&str] = &["analyze", "generate", "help"];

/// Speech-to-text capability
#[async_trait]
pub trait SpeechRecognizer: Send + Sync + 'static {
    /// Listens once and returns the final transcript, or `None` when nothing
    /// was recognised.
    async fn listen(&self) -> Result<Option<String>, AppError>;
}

/// What happened during one voice interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// No recognizer is available
    Unsupported,
    /// A listening session is already running
    AlreadyListening,
    /// The recognizer finished without a transcript
    NoSpeech,
    /// The recognizer failed
    Failed(String),
    /// Transcript holds a command and should be sent right away
    AutoSend(String),
    /// Transcript should be placed in the input box for the user to confirm
    Pending(String),
}

/// True when the transcript contains one of the auto-send command words
pub fn should_auto_send(transcript: &str) -> bool {
    let lower = transcript.to_lowercase();
    AUTO_SEND_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Wraps an optional recognizer with the single-shot listening guard
#[derive(Clone, Default)]
pub struct VoiceAssistant {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    listening: Arc<AtomicBool>,
}

impl VoiceAssistant {
    pub fn new(recognizer: Option<Arc<dyn SpeechRecognizer>>) -> Self {
        Self {
            recognizer,
            listening: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Runs one listening session.
    pub async fn listen(&self) -> VoiceOutcome {
        let Some(recognizer) = &self.recognizer else {
            return VoiceOutcome::Unsupported;
        };

        let Some(_guard) = InFlightGuard::acquire(&self.listening) else {
            return VoiceOutcome::AlreadyListening;
        };

        let result = recognizer.listen().await;

        match result {
            Ok(Some(transcript)) if !transcript.trim().is_empty() => {
                let transcript = transcript.trim().to_string();
                info!(%transcript, "Voice transcript received");
                if should_auto_send(&transcript) {
                    VoiceOutcome::AutoSend(transcript)
                } else {
                    VoiceOutcome::Pending(transcript)
                }
            }
            Ok(_) => VoiceOutcome::NoSpeech,
            Err(e) => {
                warn!("Speech recognition error: {}", e);
                VoiceOutcome::Failed(e.to_string())
            }
        }
    }
}
