//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "code", content = "details")]
pub enum ConsentError {
    /// The API token field was empty or blank after trimming
    #[error("API token is required")]
    TokenRequired,

    /// A submit attempt failed (caller hook failure or simulated rejection)
    #[error("{0}")]
    Submission(String),
}

impl ConsentError {
    /// Whether this is expected behavior (user input, demo rejection) for
    /// log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::TokenRequired | Self::Submission(_) => true,
        }
    }

    /// Human-readable message surfaced to the form, with a generic
    /// fallback when the failure carries no message.
    #[must_use]
    pub fn surface_message(&self) -> String {
        let msg = self.to_string();
        if msg.is_empty() {
            "An error occurred".to_string()
        } else {
            msg
        }
    }
}

/// Core layer Result type alias
pub type ConsentResult<T> = std::result::Result<T, ConsentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_error_keeps_message() {
        let err = ConsentError::Submission("bad token".to_string());
        assert_eq!(err.surface_message(), "bad token");
    }

    #[test]
    fn empty_submission_error_falls_back_to_generic_message() {
        let err = ConsentError::Submission(String::new());
        assert_eq!(err.surface_message(), "An error occurred");
    }

    #[test]
    fn all_variants_are_expected() {
        assert!(ConsentError::TokenRequired.is_expected());
        assert!(ConsentError::Submission("x".to_string()).is_expected());
    }
}
