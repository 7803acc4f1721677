//! Test helpers
//!
//! Mock hook implementations and deterministic outcome sources.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ConsentError, ConsentResult};
use crate::traits::{CancelHandler, OutcomeSource, SubmitHandler};
use crate::types::ConsentFormData;

/// Submit hook that records every payload and succeeds
#[derive(Default)]
pub struct RecordingSubmitHandler {
    calls: Mutex<Vec<ConsentFormData>>,
}

impl RecordingSubmitHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ConsentFormData> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitHandler for RecordingSubmitHandler {
    async fn on_submit(&self, data: &ConsentFormData) -> ConsentResult<()> {
        self.calls.lock().unwrap().push(data.clone());
        Ok(())
    }
}

/// Submit hook that always fails with the given message
pub struct FailingSubmitHandler(pub String);

#[async_trait]
impl SubmitHandler for FailingSubmitHandler {
    async fn on_submit(&self, _data: &ConsentFormData) -> ConsentResult<()> {
        Err(ConsentError::Submission(self.0.clone()))
    }
}

/// Cancel hook that records whether it was invoked
#[derive(Default)]
pub struct RecordingCancelHandler {
    invoked: AtomicBool,
}

impl RecordingCancelHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_invoked(&self) -> bool {
        self.invoked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CancelHandler for RecordingCancelHandler {
    async fn on_cancel(&self) {
        self.invoked.store(true, Ordering::SeqCst);
    }
}

/// Deterministic outcome source that counts how often it was consulted
pub struct CountingOutcome {
    value: bool,
    calls: AtomicUsize,
}

impl CountingOutcome {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OutcomeSource for CountingOutcome {
    fn next_outcome(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.value
    }
}
