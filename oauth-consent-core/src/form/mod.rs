//! Form state machine
//!
//! Elm-style split: [`FormState`] owns the data, [`FormEvent`] describes
//! user edits, [`ConsentSession`] applies events and drives the
//! idle/submitting/success/error lifecycle.

mod session;
mod state;

pub use session::{CancelOutcome, ConsentSession, SubmitOutcome};
pub use state::{FormEvent, FormState};
