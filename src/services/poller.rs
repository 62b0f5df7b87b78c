use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::{AppError, ErrorKind};
use crate::practicum::PracticumClient;
use crate::practicum::dto::HomeworkStatuses;
use crate::services::status_tracker::StatusTracker;
use crate::services::validator::check_response;
use crate::telegram::{self, Messenger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API reported no submissions in the window.
    NoUpdates,
    /// The newest submission matches what was already sent.
    Unchanged,
    /// A status change was handed to the messenger.
    Notified,
    Failed(ErrorKind),
}

/// State carried between cycles. Owned by the poller alone.
#[derive(Debug, Default)]
pub struct PollState {
    pub cursor: i64,
    pub tracker: StatusTracker,
    /// Last failure text reported to the chat, cleared by a successful cycle.
    pub last_error: Option<String>,
}

/// Polls the homework API on a fixed period and reports status changes.
pub struct StatusPoller {
    practicum: Arc<dyn PracticumClient>,
    messenger: Arc<dyn Messenger>,
    interval: Duration,
    state: PollState,
}

impl StatusPoller {
    pub fn new(
        practicum: Arc<dyn PracticumClient>,
        messenger: Arc<dyn Messenger>,
        interval: Duration,
    ) -> Self {
        Self {
            practicum,
            messenger,
            interval,
            state: PollState {
                cursor: chrono::Utc::now().timestamp(),
                ..PollState::default()
            },
        }
    }

    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.state.cursor = cursor;
        self
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Runs cycles forever, sleeping the full interval after each one.
    pub async fn start(mut self) {
        info!(
            "Starting homework status poller (interval: {:?}, from_date: {})",
            self.interval, self.state.cursor
        );

        loop {
            let outcome = self.run_cycle().await;
            info!("Cycle finished: {:?}", outcome);

            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs one fetch/validate/classify/notify cycle. Never fails: errors are
    /// logged and reported to the chat.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_updates().await {
            Ok(outcome) => {
                self.state.last_error = None;
                outcome
            }
            Err(e) => {
                let kind = e.kind();
                error!("Cycle failed ({:?}): {}", kind, e);
                self.report_failure(&e).await;
                CycleOutcome::Failed(kind)
            }
        }
    }

    async fn check_updates(&mut self) -> Result<CycleOutcome, AppError> {
        let response = self.practicum.get_api_answer(self.state.cursor).await?;
        check_response(&response)?;
        let statuses: HomeworkStatuses = serde_json::from_value(response)
            .map_err(|e| AppError::Decode(e.to_string()))?;

        let pending = self.state.tracker.pending(&statuses.homeworks);
        // The window is consumed once validated, whatever classification yields.
        self.state.cursor = statuses.current_date;

        let Some(notification) = pending? else {
            return Ok(if statuses.homeworks.is_empty() {
                CycleOutcome::NoUpdates
            } else {
                CycleOutcome::Unchanged
            });
        };

        if !telegram::send_message(self.messenger.as_ref(), &notification.text).await {
            warn!(
                "Status change for \"{}\" was not delivered",
                notification.homework_name
            );
        }
        self.state.tracker.mark_sent(notification);
        Ok(CycleOutcome::Notified)
    }

    async fn report_failure(&mut self, e: &AppError) {
        let message = format!("Сбой в работе программы: {}", e);
        if self.state.last_error.as_deref() == Some(message.as_str()) {
            return;
        }
        telegram::send_message(self.messenger.as_ref(), &message).await;
        self.state.last_error = Some(message);
    }
}
