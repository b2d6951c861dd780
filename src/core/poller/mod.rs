mod state;

pub use state::{LoopPhase, LoopState};

use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::core::config::Config;
use crate::core::error::TickError;
use crate::core::homework::{current_message, validate_response};
use crate::core::notifier::Notifier;
use crate::core::review::ReviewApi;

/// Result of a single tick, mostly useful for tests and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Notified(String),
    Unchanged,
    Failed { report: String, notified: bool },
}

pub fn error_report(err: &TickError) -> String {
    format!("Сбой в работе программы: {}", err)
}

/// Polls the review API on a flat interval and notifies on change.
///
/// Ticks never overlap: each one finishes (fetch, validate, format, send)
/// before the sleep that precedes the next, unless shutdown cuts it short.
pub struct PollLoop {
    api: Box<dyn ReviewApi>,
    notifier: Box<dyn Notifier>,
    retry_period: Duration,
    cursor: i64,
    state: LoopState,
    phase: LoopPhase,
}

impl PollLoop {
    pub fn new(
        config: &Config,
        api: Box<dyn ReviewApi>,
        notifier: Box<dyn Notifier>,
        start_cursor: i64,
    ) -> Self {
        Self::with_period(config.retry_period, api, notifier, start_cursor)
    }

    pub fn with_period(
        retry_period: Duration,
        api: Box<dyn ReviewApi>,
        notifier: Box<dyn Notifier>,
        start_cursor: i64,
    ) -> Self {
        Self {
            api,
            notifier,
            retry_period,
            cursor: start_cursor,
            state: LoopState::default(),
            phase: LoopPhase::Starting,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    #[cfg(test)]
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Fetch, validate and format. The cursor moves as soon as the payload
    /// validates, even if formatting then fails.
    async fn poll_once(&mut self) -> Result<String, TickError> {
        let payload = self.api.fetch(self.cursor).await?;
        let validated = validate_response(&payload, self.cursor)?;
        if validated.next_cursor != self.cursor {
            debug!("Cursor advanced {} -> {}", self.cursor, validated.next_cursor);
        }
        self.cursor = validated.next_cursor;
        Ok(current_message(validated.latest.as_ref())?)
    }

    pub async fn tick(&mut self) -> TickOutcome {
        match self.poll_once().await {
            Ok(message) => {
                if !self.state.is_new_message(&message) {
                    debug!("Status unchanged, not notifying");
                    return TickOutcome::Unchanged;
                }
                self.notifier.send(&message).await;
                self.state.last_message = message.clone();
                TickOutcome::Notified(message)
            }
            Err(err) => {
                let report = error_report(&err);
                error!(kind = err.kind(), status = ?err.status_code(), "{}", report);
                let notified = self.state.is_new_error(&report);
                if notified {
                    self.notifier.send(&report).await;
                    self.state.last_error = report.clone();
                } else {
                    debug!("Same failure as last reported, not notifying");
                }
                TickOutcome::Failed { report, notified }
            }
        }
    }

    /// Tick, then sleep for the retry period, forever or until `shutdown`
    /// resolves. Shutdown is observed during the tick as well as the sleep;
    /// a tick still in flight is dropped.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        self.phase = LoopPhase::Running;
        info!(
            "Polling homework statuses every {}s starting from {}",
            self.retry_period.as_secs(),
            self.cursor
        );

        loop {
            // Polled first so a tick that completes without waiting always runs.
            tokio::select! {
                biased;
                _ = self.tick() => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested mid-tick, stopping poll loop");
                    break;
                }
            }
            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poll loop");
                    break;
                }
            }
        }

        self.phase = LoopPhase::Stopped;
    }
}

#[cfg(test)]
mod tests;
