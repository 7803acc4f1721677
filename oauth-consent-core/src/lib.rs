//! OAuth Consent Core Library
//!
//! Provides the behavioral core of a brandable OAuth-style consent form:
//! - Configuration resolver (documented defaults + caller overrides)
//! - Form state machine (idle/submitting/success/error lifecycle)
//! - Submission dispatcher (caller hook or built-in simulated outcome)
//! - Theme port (persisted light/dark preference)
//!
//! This library is platform-independent: the presentation layer consumes
//! the resolved configuration and the form state read-only, and caller
//! hooks are abstracted through traits.

pub mod dispatch;
pub mod error;
pub mod form;
pub mod resolver;
pub mod theme;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ConsentError, ConsentResult};
pub use form::{CancelOutcome, ConsentSession, FormEvent, FormState, SubmitOutcome};
pub use resolver::{demo_config, resolve};
pub use traits::{CancelHandler, ConsentHooks, OutcomeSource, SubmitHandler, ThemeStore};
pub use types::{ConsentConfig, ConsentConfigPatch, ConsentFormData, FormStatus};
