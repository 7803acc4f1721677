//! Caller hook traits
//!
//! The configuration's `onSubmit`/`onCancel` callbacks, rendered as
//! trait objects injected into the session. A custom submit handler owns
//! any follow-up navigation; the session does not auto-reset when one is
//! present.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ConsentResult;
use crate::types::ConsentFormData;

/// Caller-supplied submit hook
///
/// Returning an error signals a failed authorization; the error's message
/// is surfaced on the form.
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn on_submit(&self, data: &ConsentFormData) -> ConsentResult<()>;
}

/// Caller-supplied cancel hook
///
/// When present the hook owns the consequence of a cancel; the session
/// does not mutate local state.
#[async_trait]
pub trait CancelHandler: Send + Sync {
    async fn on_cancel(&self);
}

/// Optional hooks injected into a session
#[derive(Clone, Default)]
pub struct ConsentHooks {
    /// Submit hook; `None` selects the built-in simulated outcome
    pub submit: Option<Arc<dyn SubmitHandler>>,
    /// Cancel hook; `None` requires interactive confirmation instead
    pub cancel: Option<Arc<dyn CancelHandler>>,
}

impl ConsentHooks {
    /// No hooks: built-in demo behavior everywhere
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_submit(mut self, handler: Arc<dyn SubmitHandler>) -> Self {
        self.submit = Some(handler);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, handler: Arc<dyn CancelHandler>) -> Self {
        self.cancel = Some(handler);
        self
    }
}

impl std::fmt::Debug for ConsentHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentHooks")
            .field("submit", &self.submit.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}
