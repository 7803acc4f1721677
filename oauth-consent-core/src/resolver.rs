//! Configuration resolver
//!
//! Merges a caller-supplied [`ConsentConfigPatch`] over the documented
//! defaults. The merge is shallow and per top-level key: a present key
//! replaces the base value wholesale, so a partial nested object (for
//! example a `branding` carrying only a primary color plus the required
//! fields) drops base siblings not restated in the override. This keeps
//! the observed component behavior; callers wanting a tweak of a nested
//! block must restate the block.

use crate::types::{
    ApiKeyInstructions, Branding, ConsentConfig, ConsentConfigPatch, CustomStyles,
    InstructionStep, RegionOption, ShadowIntensity, Theme,
};

impl Default for ConsentConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ConsentConfig {
    /// The documented default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            branding: Branding {
                company_name: "Acme Inc".to_string(),
                company_logo: None,
                service_description: "Requesting API access to your account".to_string(),
                service_provider: Some("API Connect".to_string()),
                primary_color: None,
                background_color: None,
                header_background: None,
            },
            api_token_label: "API Token".to_string(),
            api_token_placeholder: "Enter your API token".to_string(),
            advanced_config_label: "Advanced Configuration".to_string(),
            show_advanced_by_default: false,
            regions: default_regions(),
            enable_theme_toggle: true,
            default_theme: Theme::System,
            submit_button_text: "Authorize".to_string(),
            cancel_button_text: "Cancel".to_string(),
            default_api_version: "v2.0".to_string(),
            default_timeout: 30,
            show_region_selector: true,
            show_api_version_field: true,
            show_timeout_field: true,
            api_key_instructions: ApiKeyInstructions {
                show: true,
                title: Some("How to get your API token".to_string()),
                steps: vec![
                    InstructionStep::link(
                        "Log in to your account dashboard",
                        "https://example.com/dashboard",
                    ),
                    InstructionStep::text("Navigate to API Settings in your profile"),
                    InstructionStep::text("Click on 'Generate New Token' and set permissions"),
                    InstructionStep::text("Copy the token and paste it here"),
                ],
                additional_info: Some(
                    "Your token will not be stored anywhere and is only used to authenticate \
                     this request."
                        .to_string(),
                ),
            },
            custom_styles: CustomStyles {
                card_width: "max-w-md".to_string(),
                border_radius: "rounded-xl".to_string(),
                shadow_intensity: ShadowIntensity::Medium,
            },
        }
    }
}

/// The four example regions the resolver must reproduce
fn default_regions() -> Vec<RegionOption> {
    vec![
        RegionOption::new("us-east-1", "US East (N. Virginia)"),
        RegionOption::new("us-west-1", "US West (N. California)"),
        RegionOption::new("eu-west-1", "EU (Ireland)"),
        RegionOption::new("ap-southeast-1", "Asia Pacific (Singapore)"),
    ]
}

/// Alternate preset used by the demo controls toggle
#[must_use]
pub fn demo_config() -> ConsentConfigPatch {
    ConsentConfigPatch {
        branding: Some(Branding {
            company_name: "DevService".to_string(),
            company_logo: None,
            service_description: "Connect to your development environment".to_string(),
            service_provider: Some("Dev Connect".to_string()),
            primary_color: Some("#4f46e5".to_string()),
            background_color: None,
            header_background: None,
        }),
        api_token_label: Some("Access Key".to_string()),
        api_token_placeholder: Some("Paste your developer access key".to_string()),
        show_advanced_by_default: Some(true),
        regions: Some(vec![
            RegionOption::new("us-east", "US East"),
            RegionOption::new("us-west", "US West"),
            RegionOption::new("eu-central", "EU Central"),
            RegionOption::new("asia-east", "Asia East"),
        ]),
        enable_theme_toggle: Some(true),
        default_theme: Some(Theme::Dark),
        submit_button_text: Some("Connect".to_string()),
        cancel_button_text: Some("Decline".to_string()),
        show_api_version_field: Some(true),
        api_key_instructions: Some(ApiKeyInstructions {
            show: true,
            title: Some("How to generate your Access Key".to_string()),
            steps: vec![
                InstructionStep::link(
                    "Log in to the Developer Portal",
                    "https://dev.example.com/login",
                ),
                InstructionStep::text("Go to 'Account Settings' → 'API Access'"),
                InstructionStep::text(
                    "Click 'Create New Key' and select the required permissions",
                ),
                InstructionStep::text(
                    "Give your key a name (e.g. 'Development') and click 'Generate'",
                ),
            ],
            additional_info: Some(
                "For security reasons, your key will only be shown once during generation. \
                 Store it safely."
                    .to_string(),
            ),
        }),
        ..ConsentConfigPatch::default()
    }
}

/// Resolve a caller override against a base configuration
///
/// Pure and deterministic; callable repeatedly with different patches
/// without residual state. Never validates the override — absent keys
/// simply keep the base value.
#[must_use]
pub fn resolve(base: &ConsentConfig, patch: &ConsentConfigPatch) -> ConsentConfig {
    let mut resolved = base.clone();

    if let Some(ref branding) = patch.branding {
        resolved.branding = branding.clone();
    }
    if let Some(ref label) = patch.api_token_label {
        resolved.api_token_label = label.clone();
    }
    if let Some(ref placeholder) = patch.api_token_placeholder {
        resolved.api_token_placeholder = placeholder.clone();
    }
    if let Some(ref label) = patch.advanced_config_label {
        resolved.advanced_config_label = label.clone();
    }
    if let Some(show) = patch.show_advanced_by_default {
        resolved.show_advanced_by_default = show;
    }
    if let Some(ref regions) = patch.regions {
        resolved.regions = regions.clone();
    }
    if let Some(enable) = patch.enable_theme_toggle {
        resolved.enable_theme_toggle = enable;
    }
    if let Some(theme) = patch.default_theme {
        resolved.default_theme = theme;
    }
    if let Some(ref text) = patch.submit_button_text {
        resolved.submit_button_text = text.clone();
    }
    if let Some(ref text) = patch.cancel_button_text {
        resolved.cancel_button_text = text.clone();
    }
    if let Some(ref version) = patch.default_api_version {
        resolved.default_api_version = version.clone();
    }
    if let Some(timeout) = patch.default_timeout {
        resolved.default_timeout = timeout;
    }
    if let Some(show) = patch.show_region_selector {
        resolved.show_region_selector = show;
    }
    if let Some(show) = patch.show_api_version_field {
        resolved.show_api_version_field = show;
    }
    if let Some(show) = patch.show_timeout_field {
        resolved.show_timeout_field = show;
    }
    if let Some(ref instructions) = patch.api_key_instructions {
        resolved.api_key_instructions = instructions.clone();
    }
    if let Some(ref styles) = patch.custom_styles {
        resolved.custom_styles = styles.clone();
    }

    resolved
}
