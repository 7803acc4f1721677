//! Demo backend wire types
//!
//! Shared by the web frontend so the two endpoints and the component
//! agree on shapes.

use serde::{Deserialize, Serialize};

use super::{Branding, RegionOption};

/// One grantable permission advertised by `GET /api/consent-config`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Stable identifier
    pub id: String,
    /// Short label
    pub label: String,
    /// What granting this permission allows
    pub description: String,
    /// Whether the checkbox starts checked
    pub default_checked: bool,
}

/// Defaults block of the configuration response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDefaults {
    /// Default API version
    pub api_version: String,
    /// Default request timeout in seconds
    pub timeout: u32,
}

/// Body of `GET /api/consent-config`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsentConfigResponse {
    pub branding: Branding,
    pub regions: Vec<RegionOption>,
    pub permissions: Vec<Permission>,
    pub defaults: ConfigDefaults,
}

/// Body of `POST /api/authorize`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    /// The entered API token; blank after trim is rejected with 400
    #[serde(default)]
    pub api_token: String,
    /// Granted permission ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Issued demo token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    /// Opaque access token (a demo UUID, never a real credential)
    pub access_token: String,
    /// Token expiry in seconds
    pub expires_in: u32,
}

/// Success/failure envelope of `POST /api/authorize`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<IssuedToken>,
}

impl AuthorizeResponse {
    /// Successful authorization with an issued token
    #[must_use]
    pub fn authorized(redirect_url: &str, token: IssuedToken) -> Self {
        Self {
            success: true,
            message: "Authorization successful".to_string(),
            redirect_url: Some(redirect_url.to_string()),
            token: Some(token),
        }
    }

    /// Rejection with a message and no token
    #[must_use]
    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            redirect_url: None,
            token: None,
        }
    }
}
