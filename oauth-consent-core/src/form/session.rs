//! Consent session: operations on one mounted form

use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::dispatch::SubmissionDispatcher;
use crate::form::{FormEvent, FormState};
use crate::traits::{ConsentHooks, OutcomeSource, RandomOutcome};
use crate::types::{ConsentConfig, FieldErrors, FormStatus};

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Payload handed to the dispatcher
    Dispatched,
    /// Validation failed; field errors surfaced, status untouched
    Rejected,
    /// A dispatch was already in flight
    Ignored,
}

/// Result of a cancel attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The configured cancel hook was invoked; local state untouched
    HookInvoked,
    /// Confirmed cancel reset the form
    Reset,
    /// Unconfirmed cancel, or a dispatch in flight; nothing happened
    Ignored,
}

/// One mounted consent form
///
/// Owns the form state for the lifetime of the mount. The dispatcher
/// reports outcomes back through the shared state; pending demo timers
/// are keyed to this session and aborted on drop, so a torn-down form
/// never mutates state after disposal.
pub struct ConsentSession {
    config: ConsentConfig,
    hooks: ConsentHooks,
    dispatcher: SubmissionDispatcher,
    state: Arc<RwLock<FormState>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ConsentSession {
    /// Mount a form with the production outcome source
    #[must_use]
    pub fn new(config: ConsentConfig, hooks: ConsentHooks) -> Self {
        Self::with_outcome(config, hooks, Arc::new(RandomOutcome))
    }

    /// Mount a form with an injected outcome source
    #[must_use]
    pub fn with_outcome(
        config: ConsentConfig,
        hooks: ConsentHooks,
        outcome: Arc<dyn OutcomeSource>,
    ) -> Self {
        let state = Arc::new(RwLock::new(FormState::new(&config)));
        Self {
            config,
            hooks,
            dispatcher: SubmissionDispatcher::new(outcome),
            state,
            pending: Mutex::new(None),
        }
    }

    /// The resolved configuration driving this session
    #[must_use]
    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }

    /// Snapshot of the current form state
    pub async fn snapshot(&self) -> FormState {
        self.state.read().await.clone()
    }

    /// Apply a user edit
    ///
    /// Accepted in `Idle` and `Error`; ignored while a dispatch is in
    /// flight or during the success interstitial.
    pub async fn update(&self, event: FormEvent) {
        let mut guard = self.state.write().await;
        match guard.status {
            FormStatus::Idle | FormStatus::Error => guard.apply(event, &self.config),
            FormStatus::Submitting | FormStatus::Success => {}
        }
    }

    /// Validate the current field values and surface the flags
    pub async fn validate(&self) -> FieldErrors {
        let mut guard = self.state.write().await;
        let errors = guard.compute_errors();
        guard.errors = errors;
        errors
    }

    /// Attempt a submission
    ///
    /// Validation runs synchronously before any asynchronous step: a
    /// validation failure surfaces field errors and leaves `status`
    /// untouched without reaching the dispatcher. Re-entrant calls while
    /// a dispatch is in flight are ignored.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut guard = self.state.write().await;
            if guard.status == FormStatus::Submitting {
                return SubmitOutcome::Ignored;
            }

            let errors = guard.compute_errors();
            guard.errors = errors;
            if !errors.is_valid() {
                return SubmitOutcome::Rejected;
            }

            guard.status = FormStatus::Submitting;
            guard.error_message = None;
            guard.payload(&self.config)
        };

        if let Some(handler) = self.hooks.submit.clone() {
            SubmissionDispatcher::dispatch_with_handler(handler.as_ref(), &payload, &self.state)
                .await;
        } else {
            let handle = self.dispatcher.dispatch_simulated(Arc::clone(&self.state));
            self.replace_pending(handle);
        }

        SubmitOutcome::Dispatched
    }

    /// Cancel the authorization
    ///
    /// With a configured hook the hook owns the consequence and local
    /// state is untouched. Without one, the form resets only when the
    /// user confirmed; an unconfirmed cancel is a no-op.
    pub async fn cancel(&self, confirmed: bool) -> CancelOutcome {
        if let Some(handler) = self.hooks.cancel.clone() {
            handler.on_cancel().await;
            return CancelOutcome::HookInvoked;
        }

        if self.state.read().await.status == FormStatus::Submitting {
            // the cancel control is disabled for the duration
            return CancelOutcome::Ignored;
        }

        if confirmed {
            self.reset().await;
            CancelOutcome::Reset
        } else {
            CancelOutcome::Ignored
        }
    }

    /// Reset to initial submission state
    ///
    /// Clears token, status and field errors; keeps advanced-section
    /// expansion and the region/version/timeout selections. Any pending
    /// demo timer is aborted first.
    pub async fn reset(&self) {
        self.abort_pending();
        self.state.write().await.reset();
    }

    fn replace_pending(&self, handle: JoinHandle<()>) {
        if let Ok(mut guard) = self.pending.lock() {
            if let Some(old) = guard.replace(handle) {
                old.abort();
            }
        }
    }

    fn abort_pending(&self) {
        if let Ok(mut guard) = self.pending.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for ConsentSession {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
