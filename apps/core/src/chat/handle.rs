use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{info, instrument};
use uuid::Uuid;

use super::messages::{DisplayMessage, IgnoreReason, SendOutcome, SessionMessage, VoiceReply};
use super::session::{ChatSession, InFlightGuard};
use crate::error::AppError;

/// A handle to a `ChatSession` running on its own task.
///
/// The in-flight flag is checked here, before the message is queued, so a
/// second submission is rejected immediately instead of waiting behind the
/// first one.
#[derive(Clone)]
pub struct SessionHandle {
    id: Uuid,
    sender: mpsc::Sender<SessionMessage>,
    in_flight: Arc<AtomicBool>,
}

impl SessionHandle {
    /// Spawns the session actor and returns a handle to it.
    pub fn new(session: ChatSession) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let id = session.id();
        let in_flight = session.in_flight_flag();
        let runner = SessionRunner { receiver, session };
        tokio::spawn(async move { runner.run().await });
        Self {
            id,
            sender,
            in_flight,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Submits a user message and waits for the reply.
    #[instrument(skip(self, input), fields(session_id = %self.id))]
    pub async fn send(&self, input: impl Into<String>) -> Result<SendOutcome, AppError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Ok(SendOutcome::Ignored(IgnoreReason::Empty));
        }
        let Some(guard) = InFlightGuard::acquire(&self.in_flight) else {
            return Ok(SendOutcome::Ignored(IgnoreReason::Busy));
        };

        let (send, recv) = oneshot::channel();
        let msg = SessionMessage::Send {
            input,
            guard,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(Duration::from_secs(30), recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))
    }

    /// Runs one voice listening session.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn voice(&self) -> Result<VoiceReply, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Voice { responder: send })
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        // Listening can take a while
        timeout(Duration::from_secs(60), recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))
    }

    /// Returns a snapshot of the display transcript.
    pub async fn transcript(&self) -> Result<Vec<DisplayMessage>, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Transcript { responder: send })
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(Duration::from_secs(5), recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))
    }

    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(SessionMessage::Shutdown)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))
    }
}

// --- Actor Runner ---
struct SessionRunner {
    receiver: mpsc::Receiver<SessionMessage>,
    session: ChatSession,
}

impl SessionRunner {
    async fn run(mut self) {
        info!(session_id = %self.session.id(), "Session actor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionMessage::Send {
                    input,
                    guard,
                    responder,
                } => {
                    let outcome = self.session.process(&input, guard).await;
                    let _ = responder.send(outcome);
                }
                SessionMessage::Voice { responder } => {
                    let reply = self.session.voice_input().await;
                    let _ = responder.send(reply);
                }
                SessionMessage::Transcript { responder } => {
                    let _ = responder.send(self.session.transcript().to_vec());
                }
                SessionMessage::Shutdown => break,
            }
        }
        info!(session_id = %self.session.id(), "Session actor stopped");
    }
}
