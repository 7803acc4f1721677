//! Consent screen configuration types

use serde::{Deserialize, Serialize};

/// Branding block shown in the card header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    /// Company name (required)
    pub company_name: String,
    /// Path or URL of the company logo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// What the authorization is for (required)
    pub service_description: String,
    /// "Provided by ..." line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
    /// Accent color override (CSS color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Page background color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Card header background color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_background: Option<String>,
}

/// One entry of the region selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionOption {
    /// Value submitted in the payload
    pub value: String,
    /// Human-readable label
    pub label: String,
}

impl RegionOption {
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// One step of the "how to get your token" instructions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstructionStep {
    /// Step text
    pub text: String,
    /// Optional link wrapping the step text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InstructionStep {
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            url: None,
        }
    }

    #[must_use]
    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: Some(url.to_string()),
        }
    }
}

/// Instructional content under the token input, gated by `show`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyInstructions {
    /// Visibility flag for the whole block
    pub show: bool,
    /// Block title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered steps
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
    /// Footnote below the steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Card shadow intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShadowIntensity {
    Light,
    Medium,
    Heavy,
}

impl ShadowIntensity {
    /// Presentational class for this intensity
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "shadow-sm",
            Self::Medium => "shadow-md",
            Self::Heavy => "shadow-lg",
        }
    }
}

/// Card style knobs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomStyles {
    /// Card width class
    pub card_width: String,
    /// Corner radius class
    pub border_radius: String,
    /// Shadow intensity
    pub shadow_intensity: ShadowIntensity,
}

/// Configured default theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the platform color-scheme preference
    System,
}

/// The applied appearance once `Theme::System` has been resolved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Presentational class toggled on the document root
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    /// The other mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolved consent screen configuration
///
/// Produced by [`crate::resolver::resolve`]; every field is concrete and
/// drives rendering, validation and the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentConfig {
    /// Branding block
    pub branding: Branding,
    /// Label above the token input
    pub api_token_label: String,
    /// Placeholder inside the token input
    pub api_token_placeholder: String,
    /// Label of the collapsible advanced section
    pub advanced_config_label: String,
    /// Whether the advanced section starts expanded
    pub show_advanced_by_default: bool,
    /// Region selector entries; the first entry is the default selection
    pub regions: Vec<RegionOption>,
    /// Whether the theme toggle is rendered
    pub enable_theme_toggle: bool,
    /// Configured default theme
    pub default_theme: Theme,
    /// Submit button text
    pub submit_button_text: String,
    /// Cancel button text
    pub cancel_button_text: String,
    /// Default API version
    pub default_api_version: String,
    /// Default request timeout in seconds
    pub default_timeout: u32,
    /// Visibility flag: region selector
    pub show_region_selector: bool,
    /// Visibility flag: API version field
    pub show_api_version_field: bool,
    /// Visibility flag: timeout field
    pub show_timeout_field: bool,
    /// Instructional content, gated by its own `show` flag
    pub api_key_instructions: ApiKeyInstructions,
    /// Card style knobs
    pub custom_styles: CustomStyles,
}

impl ConsentConfig {
    /// Default region selection: the first configured entry
    #[must_use]
    pub fn default_region(&self) -> String {
        self.regions
            .first()
            .map(|r| r.value.clone())
            .unwrap_or_default()
    }
}

/// Caller-supplied configuration override
///
/// Every top-level key is optional. A present key replaces the base value
/// wholesale — nested objects are not deep-merged (see the resolver).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_config_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_advanced_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<RegionOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_theme_toggle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_region_selector: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_api_version_field: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_timeout_field: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_instructions: Option<ApiKeyInstructions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_styles: Option<CustomStyles>,
}
