//! Cosmetic latency.
//!
//! Several assistant operations pause before answering so the UI can show a
//! "thinking" state. The pause is behind a trait so tests and batch callers
//! can skip it.

use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;

use crate::error::AppError;

/// Schedules a pause of a given length.
#[async_trait]
pub trait Delay: Send + Sync + 'static {
    /// Waits for `duration`. Implementations backed by an external scheduler
    /// may fail if that scheduler has gone away.
    async fn wait(&self, duration: Duration) -> Result<(), AppError>;
}

/// Real wall-clock delay on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) -> Result<(), AppError> {
        if !duration.is_zero() {
            trace!(?duration, "Simulating processing latency");
            tokio::time::sleep(duration).await;
        }
        Ok(())
    }
}

/// Returns immediately regardless of the requested duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
        Ok(())
    }
}
