//! Chat Session Tests
//!
//! Full pipeline runs through `ChatSession` with the cosmetic delays
//! replaced.

use crate::chat::{
    ChatSession, IgnoreReason, Role, SendOutcome, SpeechRecognizer, VoiceOutcome, VoiceReply,
};
use crate::config::AssistantConfig;
use crate::delay::{Delay, NoDelay};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// --- Mock Components ---

/// Delay whose scheduler has gone away.
struct FailingDelay;

#[async_trait]
impl Delay for FailingDelay {
    async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
        Err(AppError::Timeout("scheduler unavailable".to_string()))
    }
}

/// Fails only the n-th call (1-based); every other call succeeds.
struct FailNthDelay {
    n: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl Delay for FailNthDelay {
    async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.n {
            Err(AppError::Timeout("scheduler unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

struct ScriptedRecognizer(Option<String>);

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn listen(&self) -> Result<Option<String>, AppError> {
        Ok(self.0.clone())
    }
}

fn config() -> AssistantConfig {
    AssistantConfig {
        seed: Some(2024),
        ..AssistantConfig::without_delays()
    }
}

fn session() -> ChatSession {
    ChatSession::with_delay(config(), Arc::new(NoDelay))
}

fn reply_text(outcome: &SendOutcome) -> &str {
    outcome
        .reply()
        .map(|m| m.content.as_str())
        .expect("expected a reply")
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_analysis() {
        let mut session = session();
        let outcome = session
            .send_message("analyze AI funding platform for African startups")
            .await;
        let text = reply_text(&outcome);

        assert!(text.starts_with(
            "🎯 **AI Analysis Results for:** \"AI funding platform for African startups\""
        ));
        assert!(text.contains("📊 **Category:** AI & Technology"));
        assert!(text.contains("🤖 **AI Potential:** 60%"));
        assert!(text.contains("📈 **Scalability:** Medium (30%)"));
        assert!(text.contains("⏱️ **Timeline:** 6-12 months"));
        assert!(text.contains("• Funding uncertainty"));
        assert!(text.contains("• Google Africa\n• Microsoft Africa\n• Andela\n• Flutterwave"));
        assert!(text.ends_with("*Analysis confidence: 92%*"));

        let reply = outcome.reply().unwrap();
        assert!(reply.ai_formatted);
        assert!(reply.html.contains("<strong>Category:</strong>"));
    }

    #[tokio::test]
    async fn test_user_message_is_trimmed() {
        let mut session = session();
        let outcome = session.send_message("   help   ").await;
        match outcome {
            SendOutcome::Replied { user, reply } => {
                assert_eq!(user.content, "help");
                assert_eq!(user.role, Role::User);
                assert!(reply.content.starts_with("🆘 **Advanced AI Assistant Help Guide**"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(session.history().iter().next().unwrap().content, "help");
    }

    #[tokio::test]
    async fn test_clarifications() {
        let mut session = session();

        let text = reply_text(&session.send_message("analyze").await).to_string();
        assert!(text.starts_with("I'd be happy to analyze an idea!"));

        let text = reply_text(&session.send_message("create").await).to_string();
        assert!(text.starts_with("I'd love to generate a solution!"));

        let text = reply_text(&session.send_message("find partners").await).to_string();
        assert!(text.starts_with("I can help identify stakeholders!"));
    }

    #[tokio::test]
    async fn test_solution_reply() {
        let mut session = session();
        let text = reply_text(
            &session
                .send_message("generate solution for digital skills gap")
                .await,
        )
        .to_string();

        assert!(text.starts_with("💡 **AI-Generated Solution**"));
        assert!(text.contains("**Challenge:** digital skills gap"));
        assert!(text.contains("**Innovation Score:**"));
    }

    #[tokio::test]
    async fn test_stakeholder_reply() {
        let mut session = session();
        let text = reply_text(
            &session
                .send_message("stakeholders for AI funding platform")
                .await,
        )
        .to_string();

        assert!(text.starts_with(
            "🤝 **Stakeholder Recommendations for:** \"AI funding platform\""
        ));
        assert!(text.contains("• Google Africa"));
        assert!(text.contains("**Engagement Strategy:**"));
    }

    #[tokio::test]
    async fn test_general_replies() {
        let mut session = session();

        let text = reply_text(&session.send_message("ok so").await).to_string();
        assert_eq!(
            text,
            "I'd love to help! Could you provide more details about what you're looking for?"
        );

        let text = reply_text(&session.send_message("tell me about solar").await).to_string();
        assert!(text.starts_with("I understand you're asking about \"tell me about solar\"."));
    }

    #[tokio::test]
    async fn test_general_reply_uses_recent_context() {
        let mut session = session();
        session.send_message("analyze solar kiosks for villages").await;

        let text = reply_text(&session.send_message("tell me more about pricing").await)
            .to_string();
        assert!(text.starts_with("I notice we were discussing idea analysis."));
    }

    #[tokio::test]
    async fn test_seeded_sessions_agree() {
        let mut a = session();
        let mut b = session();
        for input in ["hey", "insights please", "generate ideas for clinics"] {
            assert_eq!(
                reply_text(&a.send_message(input).await),
                reply_text(&b.send_message(input).await)
            );
        }
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[tokio::test]
    async fn test_history_is_bounded() {
        let mut session = session();
        for i in 1..=12 {
            session.send_message(&format!("help {}", i)).await;
        }

        let history: Vec<_> = session.history().iter().map(|t| t.content.clone()).collect();
        assert_eq!(history.len(), 10);
        assert_eq!(history.first().map(String::as_str), Some("help 3"));
        assert_eq!(history.last().map(String::as_str), Some("help 12"));
        // Welcome plus one user and one bot message per send
        assert_eq!(session.transcript().len(), 25);
    }

    #[tokio::test]
    async fn test_blank_input_changes_nothing() {
        let mut session = session();
        for input in ["", "   ", "\n\t"] {
            assert_eq!(
                session.send_message(input).await,
                SendOutcome::Ignored(IgnoreReason::Empty)
            );
        }
        assert_eq!(session.transcript().len(), 1);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_reply_delay_failure_apologises() {
        let mut session = ChatSession::with_delay(config(), Arc::new(FailingDelay));
        let outcome = session.send_message("help").await;
        let reply = outcome.reply().unwrap();

        assert_eq!(
            reply.content,
            "I apologize, but I'm experiencing technical difficulties. Please try again."
        );
        assert!(!reply.ai_formatted);
        assert!(!session.is_processing());

        // The flag is free again, so the next message is processed
        assert!(session.send_message("help").await.reply().is_some());
    }

    #[tokio::test]
    async fn test_stakeholder_lookup_failure_apologises() {
        // First wait is the stakeholder lookup
        let delay = FailNthDelay {
            n: 1,
            calls: AtomicUsize::new(0),
        };
        let mut session = ChatSession::with_delay(config(), Arc::new(delay));
        let outcome = session.send_message("partners for solar kiosks").await;
        assert!(reply_text(&outcome).starts_with("I apologize"));
    }

    #[tokio::test]
    async fn test_analysis_failure_message() {
        let delay = FailNthDelay {
            n: 1,
            calls: AtomicUsize::new(0),
        };
        let mut session = ChatSession::with_delay(config(), Arc::new(delay));
        let outcome = session.send_message("evaluate solar kiosks").await;
        let reply = outcome.reply().unwrap();
        assert!(reply
            .content
            .starts_with("I apologize, but I encountered an issue while analyzing your idea."));
        assert!(reply.ai_formatted);
    }
}

#[cfg(test)]
mod voice_tests {
    use super::*;

    #[tokio::test]
    async fn test_voice_unsupported_notice() {
        let mut session = session();
        match session.voice_input().await {
            VoiceReply::Unsupported(notice) => {
                assert_eq!(notice.content, "Voice recognition is not supported in your browser.");
                assert!(!notice.ai_formatted);
            }
            other => panic!("unexpected reply {:?}", other),
        }
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_voice_command_auto_sends() {
        let mut session = session().with_recognizer(Arc::new(ScriptedRecognizer(Some(
            "analyze solar kiosks".to_string(),
        ))));

        match session.voice_input().await {
            VoiceReply::Sent(outcome) => {
                assert!(reply_text(&outcome).starts_with("🎯 **AI Analysis Results for:**"));
            }
            other => panic!("unexpected reply {:?}", other),
        }
        assert_eq!(session.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_voice_plain_transcript_waits() {
        let mut session = session().with_recognizer(Arc::new(ScriptedRecognizer(Some(
            "solar kiosks".to_string(),
        ))));

        assert_eq!(
            session.voice_input().await,
            VoiceReply::Outcome(VoiceOutcome::Pending("solar kiosks".to_string()))
        );
        assert_eq!(session.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_voice_silence() {
        let mut session = session().with_recognizer(Arc::new(ScriptedRecognizer(None)));
        assert_eq!(
            session.voice_input().await,
            VoiceReply::Outcome(VoiceOutcome::NoSpeech)
        );
    }
}
