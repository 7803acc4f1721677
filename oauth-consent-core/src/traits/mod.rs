//! Caller-facing ports (hooks, outcome source, theme store)

mod hooks;
mod outcome;
mod theme_store;

pub use hooks::{CancelHandler, ConsentHooks, SubmitHandler};
pub use outcome::{FixedOutcome, OutcomeSource, RandomOutcome};
pub use theme_store::{InMemoryThemeStore, ThemeStore};
