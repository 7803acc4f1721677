//! Form state and payload types

use serde::{Deserialize, Serialize};

/// Submission lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    /// Ready for input (initial and terminal state)
    #[default]
    Idle,
    /// A dispatch is in flight; the submit control is disabled
    Submitting,
    /// The last attempt succeeded
    Success,
    /// The last attempt failed; see the error message
    Error,
}

/// Per-field validation error flags
///
/// The current rule set covers exactly one field: the token must be
/// non-blank after trimming.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    /// Token missing or blank after trim
    pub token: bool,
}

impl FieldErrors {
    /// The form is valid iff no flag is set
    #[must_use]
    pub fn is_valid(self) -> bool {
        !self.token
    }
}

/// Submission payload
///
/// Built from currently-visible fields only: a field hidden by its
/// configuration flag is omitted even if it holds a value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFormData {
    /// The entered API token
    pub api_token: String,
    /// Selected region (only when the region selector is shown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// API version (only when the version field is shown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Request timeout in seconds (only when the timeout field is shown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}
