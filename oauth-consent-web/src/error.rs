//! HTTP error mapping

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use oauth_consent_core::types::AuthorizeResponse;
use oauth_consent_core::ConsentError;

/// Web layer error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Consent(#[from] ConsentError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Consent(ConsentError::TokenRequired) => StatusCode::BAD_REQUEST,
            Self::Consent(ConsentError::Submission(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(AuthorizeResponse::rejected(&self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_required_maps_to_bad_request() {
        let err = ApiError::from(ConsentError::TokenRequired);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "API token is required");
    }
}
