//! Route handlers for the two demo endpoints

use actix_web::{web, HttpResponse};

use oauth_consent_core::types::{
    AuthorizeRequest, AuthorizeResponse, ConfigDefaults, ConsentConfigResponse, IssuedToken,
    Permission,
};
use oauth_consent_core::{ConsentConfig, ConsentError};

use crate::error::ApiError;

/// Register the API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/consent-config", web::get().to(consent_config))
        .route("/api/authorize", web::post().to(authorize));
}

/// `GET /api/consent-config`
///
/// In a real deployment this would come from a database or a config
/// file; here it is the documented default configuration plus the demo
/// permission set.
async fn consent_config() -> HttpResponse {
    let defaults = ConsentConfig::default_config();

    let mut branding = defaults.branding;
    branding.company_logo = Some("/logo.svg".to_string());

    let response = ConsentConfigResponse {
        branding,
        regions: defaults.regions,
        permissions: demo_permissions(),
        defaults: ConfigDefaults {
            api_version: defaults.default_api_version,
            timeout: defaults.default_timeout,
        },
    };

    HttpResponse::Ok().json(response)
}

/// `POST /api/authorize`
///
/// Rejects a blank-after-trim token with 400; everything else is
/// accepted with a demo token. No credential is validated.
async fn authorize(body: web::Json<AuthorizeRequest>) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    if request.api_token.trim().is_empty() {
        return Err(ConsentError::TokenRequired.into());
    }

    tracing::info!(
        region = request.region.as_deref().unwrap_or("-"),
        api_version = request.api_version.as_deref().unwrap_or("-"),
        permissions = request.permissions.as_ref().map_or(0, Vec::len),
        "authorization granted"
    );

    let token = IssuedToken {
        access_token: uuid::Uuid::new_v4().to_string(),
        expires_in: 3600,
    };

    Ok(HttpResponse::Ok().json(AuthorizeResponse::authorized("/dashboard", token)))
}

/// The demo permission set advertised to the frontend
fn demo_permissions() -> Vec<Permission> {
    vec![
        Permission {
            id: "read".to_string(),
            label: "Read Access".to_string(),
            description: "View and read data from your account".to_string(),
            default_checked: true,
        },
        Permission {
            id: "write".to_string(),
            label: "Write Access".to_string(),
            description: "Create and modify data in your account".to_string(),
            default_checked: true,
        },
        Permission {
            id: "delete".to_string(),
            label: "Delete Access".to_string(),
            description: "Remove data from your account".to_string(),
            default_checked: false,
        },
    ]
}
