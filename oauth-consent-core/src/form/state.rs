//! Form field state and edit events

use crate::types::{ConsentConfig, ConsentFormData, FieldErrors, FormStatus};

/// Mutable state of one consent form instance
///
/// Created when the form mounts with a resolved configuration; mutated by
/// user edits and by the submission dispatcher; nothing here outlives the
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Entered token; never persisted outside the component
    pub api_token: String,
    /// Selected region value
    pub region: String,
    /// API version field
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Token masking toggle (purely presentational)
    pub secret_visible: bool,
    /// Advanced section expansion
    pub advanced_expanded: bool,
    /// Per-field validation flags
    pub errors: FieldErrors,
    /// Submission lifecycle status
    pub status: FormStatus,
    /// Populated only when `status == Error`
    pub error_message: Option<String>,
}

impl FormState {
    /// Initial state for a resolved configuration
    #[must_use]
    pub fn new(config: &ConsentConfig) -> Self {
        Self {
            api_token: String::new(),
            region: config.default_region(),
            api_version: config.default_api_version.clone(),
            timeout_seconds: config.default_timeout,
            secret_visible: false,
            advanced_expanded: config.show_advanced_by_default,
            errors: FieldErrors::default(),
            status: FormStatus::Idle,
            error_message: None,
        }
    }

    /// Compute the validation flags for the current field values
    ///
    /// Exactly one rule today: the token must be non-blank after trimming.
    #[must_use]
    pub fn compute_errors(&self) -> FieldErrors {
        FieldErrors {
            token: self.api_token.trim().is_empty(),
        }
    }

    /// Build the submission payload from currently-visible fields only
    #[must_use]
    pub fn payload(&self, config: &ConsentConfig) -> ConsentFormData {
        ConsentFormData {
            api_token: self.api_token.clone(),
            region: config
                .show_region_selector
                .then(|| self.region.clone()),
            api_version: config
                .show_api_version_field
                .then(|| self.api_version.clone()),
            timeout: config.show_timeout_field.then_some(self.timeout_seconds),
        }
    }

    /// Return to initial submission state, keeping advanced-section
    /// expansion and the region/version/timeout selections
    pub fn reset(&mut self) {
        self.api_token.clear();
        self.status = FormStatus::Idle;
        self.errors = FieldErrors::default();
        self.error_message = None;
    }
}

/// One user edit of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Token input changed; clears the token error flag
    TokenChanged(String),
    /// Region selection changed
    RegionChanged(String),
    /// API version input changed
    ApiVersionChanged(String),
    /// Timeout input changed; unparsable input falls back to the
    /// configured default
    TimeoutChanged(String),
    /// Flip token masking
    ToggleSecret,
    /// Expand/collapse the advanced section
    ToggleAdvanced,
}

impl FormState {
    /// Apply a user edit
    ///
    /// Clears the edited field's error flag only; performs no validation.
    pub fn apply(&mut self, event: FormEvent, config: &ConsentConfig) {
        match event {
            FormEvent::TokenChanged(value) => {
                self.api_token = value;
                self.errors.token = false;
            }
            FormEvent::RegionChanged(value) => self.region = value,
            FormEvent::ApiVersionChanged(value) => self.api_version = value,
            FormEvent::TimeoutChanged(raw) => {
                self.timeout_seconds = raw.trim().parse().unwrap_or(config.default_timeout);
            }
            FormEvent::ToggleSecret => self.secret_visible = !self.secret_visible,
            FormEvent::ToggleAdvanced => self.advanced_expanded = !self.advanced_expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConsentConfig;

    #[test]
    fn initial_state_follows_resolved_config() {
        let config = ConsentConfig::default_config();
        let state = FormState::new(&config);
        assert_eq!(state.region, "us-east-1");
        assert_eq!(state.api_version, "v2.0");
        assert_eq!(state.timeout_seconds, 30);
        assert!(!state.advanced_expanded);
        assert_eq!(state.status, FormStatus::Idle);
    }

    #[test]
    fn validation_trims_whitespace() {
        let config = ConsentConfig::default_config();
        let mut state = FormState::new(&config);

        assert!(state.compute_errors().token);
        state.api_token = "   \t".to_string();
        assert!(state.compute_errors().token);
        state.api_token = "  abc  ".to_string();
        assert!(!state.compute_errors().token);
    }

    #[test]
    fn token_edit_clears_only_the_token_error() {
        let config = ConsentConfig::default_config();
        let mut state = FormState::new(&config);
        state.errors.token = true;
        state.apply(FormEvent::TokenChanged("t".to_string()), &config);
        assert!(!state.errors.token);
    }

    #[test]
    fn unparsable_timeout_falls_back_to_configured_default() {
        let config = ConsentConfig::default_config();
        let mut state = FormState::new(&config);
        state.apply(FormEvent::TimeoutChanged("45".to_string()), &config);
        assert_eq!(state.timeout_seconds, 45);
        state.apply(FormEvent::TimeoutChanged("garbage".to_string()), &config);
        assert_eq!(state.timeout_seconds, 30);
    }

    #[test]
    fn payload_omits_hidden_fields() {
        let mut config = ConsentConfig::default_config();
        config.show_region_selector = false;
        config.show_api_version_field = true;
        config.show_timeout_field = true;

        let mut state = FormState::new(&config);
        state.api_token = "abc123".to_string();
        state.api_version = "v3".to_string();
        state.timeout_seconds = 45;
        // a region value is held locally but must not reach the payload
        state.region = "us-east-1".to_string();

        let payload = state.payload(&config);
        assert_eq!(payload.api_token, "abc123");
        assert_eq!(payload.region, None);
        assert_eq!(payload.api_version.as_deref(), Some("v3"));
        assert_eq!(payload.timeout, Some(45));
    }

    #[test]
    fn reset_keeps_selections_and_expansion() {
        let config = ConsentConfig::default_config();
        let mut state = FormState::new(&config);
        state.api_token = "secret".to_string();
        state.region = "eu-west-1".to_string();
        state.api_version = "v3".to_string();
        state.timeout_seconds = 45;
        state.advanced_expanded = true;
        state.status = FormStatus::Error;
        state.error_message = Some("boom".to_string());
        state.errors.token = true;

        state.reset();

        assert!(state.api_token.is_empty());
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(state.error_message, None);
        assert!(!state.errors.token);
        assert_eq!(state.region, "eu-west-1");
        assert_eq!(state.api_version, "v3");
        assert_eq!(state.timeout_seconds, 45);
        assert!(state.advanced_expanded);
    }
}
