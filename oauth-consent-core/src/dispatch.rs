//! Submission dispatcher
//!
//! Produces exactly one `success` or `error` outcome per submit attempt.
//! With a caller hook the hook is awaited in a failure-isolating scope and
//! owns any follow-up navigation; without one, a simulated outcome with
//! fixed latency resolves the attempt and auto-resets on success. The
//! dispatcher never retries and reports outcomes only through the shared
//! form state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::error::ConsentResult;
use crate::form::FormState;
use crate::traits::{OutcomeSource, SubmitHandler};
use crate::types::{ConsentFormData, FormStatus};

/// Simulated network latency before the outcome resolves
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Delay before the auto-reset after a simulated success
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

/// Canned failure message of the simulated path
pub const SIMULATED_FAILURE_MESSAGE: &str = "Invalid API token. Please check and try again.";

/// Drives status transitions for one submit attempt
pub struct SubmissionDispatcher {
    outcome: Arc<dyn OutcomeSource>,
}

impl SubmissionDispatcher {
    #[must_use]
    pub fn new(outcome: Arc<dyn OutcomeSource>) -> Self {
        Self { outcome }
    }

    /// Caller-hook branch: await the hook, then transition once.
    ///
    /// `Ok` transitions to `Success` with no auto-reset (the hook owns
    /// navigation); `Err` transitions to `Error` with the surfaced
    /// message.
    pub async fn dispatch_with_handler(
        handler: &dyn SubmitHandler,
        payload: &ConsentFormData,
        state: &Arc<RwLock<FormState>>,
    ) {
        let result: ConsentResult<()> = handler.on_submit(payload).await;
        let mut guard = state.write().await;
        match result {
            Ok(()) => {
                guard.status = FormStatus::Success;
                log::debug!("submit hook completed");
            }
            Err(e) => {
                guard.status = FormStatus::Error;
                guard.error_message = Some(e.surface_message());
                if e.is_expected() {
                    log::warn!("submit hook rejected the authorization: {e}");
                } else {
                    log::error!("submit hook failed: {e}");
                }
            }
        }
    }

    /// Built-in demo branch: simulate latency, resolve from the outcome
    /// source, auto-reset after a further delay on success.
    ///
    /// Returns the timer task so the session can key it to its lifetime;
    /// aborting the handle stops any state mutation after disposal.
    pub fn dispatch_simulated(&self, state: Arc<RwLock<FormState>>) -> JoinHandle<()> {
        let outcome = Arc::clone(&self.outcome);
        tokio::spawn(async move {
            tokio::time::sleep(SUBMIT_DELAY).await;

            if outcome.next_outcome() {
                {
                    let mut guard = state.write().await;
                    guard.status = FormStatus::Success;
                }
                log::debug!("simulated authorization succeeded");

                tokio::time::sleep(RESET_DELAY).await;
                state.write().await.reset();
            } else {
                let mut guard = state.write().await;
                guard.status = FormStatus::Error;
                guard.error_message = Some(SIMULATED_FAILURE_MESSAGE.to_string());
                log::debug!("simulated authorization rejected");
            }
        })
    }
}
