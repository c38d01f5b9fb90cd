//! Chat session: owns the history, the in-flight flag and the display
//! transcript, and runs the intent → generator → formatter pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::commands::{extract_challenge, extract_idea, extract_stakeholder_target};
use super::history::{ChatHistory, ChatTurn};
use super::messages::{DisplayMessage, IgnoreReason, SendOutcome, VoiceReply};
use super::responses::ResponseFormatter;
use super::voice::{SpeechRecognizer, VoiceAssistant, VoiceOutcome};
use crate::brain::{IdeaAnalyzer, Intent, IntentClassifier, TemplateIdeaGenerator};
use crate::config::AssistantConfig;
use crate::delay::{Delay, TokioDelay};
use crate::error::AppError;

/// Holds the in-flight flag for one message; dropping it releases the flag.
#[derive(Debug)]
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    /// Sets the flag, or returns `None` if it is already set.
    pub fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// One user's conversation with the assistant
pub struct ChatSession {
    id: Uuid,
    config: AssistantConfig,
    classifier: IntentClassifier,
    analyzer: IdeaAnalyzer,
    generator: TemplateIdeaGenerator,
    rng: StdRng,
    delay: Arc<dyn Delay>,
    voice: VoiceAssistant,
    history: ChatHistory,
    transcript: Vec<DisplayMessage>,
    in_flight: Arc<AtomicBool>,
}

impl ChatSession {
    /// Session on the real tokio timer with no voice capability
    pub fn new(config: AssistantConfig) -> Self {
        Self::with_delay(config, Arc::new(TokioDelay))
    }

    /// Session with an explicit delay implementation
    pub fn with_delay(config: AssistantConfig, delay: Arc<dyn Delay>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // Keep the generator's stream independent of reply picks.
        let generator_seed = config.seed.map(|seed| seed.wrapping_add(1));

        let mut session = Self {
            id: Uuid::new_v4(),
            classifier: IntentClassifier::new(),
            analyzer: IdeaAnalyzer::new(Arc::clone(&delay), config.stakeholder_delay()),
            generator: TemplateIdeaGenerator::from_seed(
                generator_seed,
                Arc::clone(&delay),
                config.generation_delay(),
            ),
            rng,
            delay,
            voice: VoiceAssistant::default(),
            history: ChatHistory::new(config.history_limit),
            transcript: Vec::new(),
            in_flight: Arc::new(AtomicBool::new(false)),
            config,
        };
        session
            .transcript
            .push(DisplayMessage::bot(ResponseFormatter::welcome(), true));
        info!(session_id = %session.id, "Chat session started");
        session
    }

    /// Attaches a speech-to-text capability
    pub fn with_recognizer(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.voice = VoiceAssistant::new(Some(recognizer));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn transcript(&self) -> &[DisplayMessage] {
        &self.transcript
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Shared in-flight flag, so a front end can reject input early
    pub fn in_flight_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.in_flight)
    }

    /// Submits a message. Whitespace-only input and input arriving while a
    /// message is in flight are ignored without touching any state.
    pub async fn send_message(&mut self, input: &str) -> SendOutcome {
        if input.trim().is_empty() {
            return SendOutcome::Ignored(IgnoreReason::Empty);
        }
        let Some(guard) = InFlightGuard::acquire(&self.in_flight) else {
            return SendOutcome::Ignored(IgnoreReason::Busy);
        };
        self.process(input, guard).await
    }

    /// Runs the pipeline for input whose in-flight guard is already held.
    /// The guard is released when this returns, whatever the outcome.
    #[instrument(skip(self, input, _guard), fields(session_id = %self.id))]
    pub(crate) async fn process(&mut self, input: &str, _guard: InFlightGuard) -> SendOutcome {
        let message = input.trim();
        let user = DisplayMessage::user(message);
        self.transcript.push(user.clone());

        let reply = match self.respond(message).await {
            Ok(text) => match self.delay.wait(self.config.reply_delay()).await {
                Ok(()) => DisplayMessage::bot(text, true),
                Err(e) => {
                    error!("Chatbot error: {}", e);
                    DisplayMessage::bot(ResponseFormatter::apology(), false)
                }
            },
            Err(e) => {
                error!("Chatbot error: {}", e);
                DisplayMessage::bot(ResponseFormatter::apology(), false)
            }
        };

        self.transcript.push(reply.clone());
        SendOutcome::Replied { user, reply }
    }

    /// Classifies the message and dispatches to one reply generator.
    async fn respond(&mut self, message: &str) -> Result<String, AppError> {
        self.history.push(ChatTurn::user(message));

        let intent = self.classifier.classify(message);
        info!(
            intent = %intent.intent,
            confidence = intent.confidence,
            "Intent classified"
        );

        match intent.intent {
            Intent::Greeting => Ok(ResponseFormatter::greeting(&mut self.rng)),
            Intent::IdeaAnalysis => Ok(self.idea_analysis(message).await),
            Intent::SolutionGeneration => Ok(self.solution(message).await),
            Intent::InsightRequest => Ok(ResponseFormatter::insight(&mut self.rng)),
            Intent::StakeholderRequest => self.stakeholders(message).await,
            Intent::ProgressPrediction => Ok(ResponseFormatter::prediction(&mut self.rng)),
            Intent::HelpRequest => Ok(ResponseFormatter::help()),
            Intent::General => {
                let context = self.history.recent_context(self.config.context_window);
                Ok(ResponseFormatter::general(message, &context))
            }
        }
    }

    async fn idea_analysis(&self, message: &str) -> String {
        let Some(idea) = extract_idea(message) else {
            return ResponseFormatter::analysis_clarification();
        };

        match self.analyzer.analyze(&idea).await {
            Ok(analysis) => ResponseFormatter::analysis(&analysis),
            Err(e) => {
                warn!("Idea analysis failed: {}", e);
                ResponseFormatter::analysis_failure()
            }
        }
    }

    async fn solution(&mut self, message: &str) -> String {
        let Some(challenge) = extract_challenge(message) else {
            return ResponseFormatter::solution_clarification();
        };

        match self.generator.generate(&challenge).await {
            Ok(idea) => ResponseFormatter::solution(&challenge, &idea),
            Err(e) => {
                warn!("Solution generation failed: {}", e);
                ResponseFormatter::solution_failure()
            }
        }
    }

    async fn stakeholders(&self, message: &str) -> Result<String, AppError> {
        let Some(idea) = extract_stakeholder_target(message) else {
            return Ok(ResponseFormatter::stakeholder_clarification());
        };

        let stakeholders = self.analyzer.stakeholders().suggest(&idea).await?;
        Ok(ResponseFormatter::stakeholders(&idea, &stakeholders))
    }

    /// Runs one voice listening session and routes the transcript.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn voice_input(&mut self) -> VoiceReply {
        match self.voice.listen().await {
            VoiceOutcome::Unsupported => {
                let notice = DisplayMessage::bot(ResponseFormatter::voice_unsupported(), false);
                self.transcript.push(notice.clone());
                VoiceReply::Unsupported(notice)
            }
            VoiceOutcome::AutoSend(transcript) => {
                if let Err(e) = self.delay.wait(self.config.voice_delay()).await {
                    warn!("Voice auto-send delay failed: {}", e);
                }
                VoiceReply::Sent(self.send_message(&transcript).await)
            }
            other => VoiceReply::Outcome(other),
        }
    }
}
