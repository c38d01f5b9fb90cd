//! # Chat Module
//!
//! Conversation layer on top of `brain`: command extraction, reply
//! templates, bounded history, voice input and the session actor.

pub mod commands;
pub mod handle;
pub mod history;
pub mod markup;
pub mod messages;
pub mod responses;
pub mod session;
pub mod voice;

pub use handle::SessionHandle;
pub use history::{ChatHistory, ChatTurn, Role};
pub use markup::render_markup;
pub use messages::{DisplayMessage, IgnoreReason, SendOutcome, VoiceReply};
pub use responses::ResponseFormatter;
pub use session::{ChatSession, InFlightGuard};
pub use voice::{SpeechRecognizer, VoiceAssistant, VoiceOutcome};
