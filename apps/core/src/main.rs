// Blueprint Tracker terminal chat
// Reads messages from stdin and prints the assistant's replies.

use anyhow::{Context, Result};
use blueprint_core::chat::{ChatSession, IgnoreReason, SendOutcome, SessionHandle, VoiceReply};
use blueprint_core::dashboard::Dashboard;
use blueprint_core::{logging, AssistantConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const QUIT: &str = "/quit";
const VOICE: &str = "/voice";
const CHARTS: &str = "/charts";

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = AssistantConfig::from_env().context("Failed to load assistant configuration")?;
    info!(?config, "Starting Blueprint assistant");

    let session = ChatSession::new(config);
    let handle = SessionHandle::new(session);

    for message in handle.transcript().await? {
        println!("🤖 {}\n", message.content);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            QUIT => break,
            CHARTS => println!("{}", Dashboard::new().to_json()?),
            VOICE => match handle.voice().await? {
                VoiceReply::Unsupported(notice) => println!("🤖 {}\n", notice.content),
                VoiceReply::Sent(outcome) => print_outcome(&outcome),
                VoiceReply::Outcome(outcome) => println!("🎤 {:?}\n", outcome),
            },
            _ => print_outcome(&handle.send(line.as_str()).await?),
        }
    }

    if let Err(e) = handle.shutdown().await {
        warn!("Session did not shut down cleanly: {}", e);
    }
    Ok(())
}

fn print_outcome(outcome: &SendOutcome) {
    match outcome {
        SendOutcome::Replied { reply, .. } => {
            println!("[{}] 🤖 {}\n", reply.time_label(), reply.content)
        }
        SendOutcome::Ignored(IgnoreReason::Busy) => {
            println!("(still thinking about the previous message)")
        }
        SendOutcome::Ignored(IgnoreReason::Empty) => {}
    }
}
