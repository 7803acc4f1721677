//! Simulated submission outcome source
//!
//! The built-in demo path resolves success or failure from a pseudo-random
//! source. The source is a port so tests can substitute a deterministic
//! one; none of this is cryptographically meaningful.

/// Decides the outcome of a simulated submission
pub trait OutcomeSource: Send + Sync {
    /// `true` for success, `false` for the canned failure
    fn next_outcome(&self) -> bool;
}

/// Production source: 70 % success weighting
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOutcome;

impl OutcomeSource for RandomOutcome {
    fn next_outcome(&self) -> bool {
        rand::random::<f32>() > 0.3
    }
}

/// Deterministic source for tests and demos
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub bool);

impl OutcomeSource for FixedOutcome {
    fn next_outcome(&self) -> bool {
        self.0
    }
}
