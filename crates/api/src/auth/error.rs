//! Authorization failures, shaped the way the identity provider reports them.
//!
//! Each variant carries a fixed HTTP status and a machine-readable code; the
//! `Display` text is the human-readable description sent to the client.

use axum::http::StatusCode;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    HeaderMissing,

    #[error("Authorization header must start with \"Bearer\".")]
    NotBearer,

    #[error("Token not found.")]
    TokenMissing,

    #[error("Authorization header must be bearer token.")]
    TooManyParts,

    #[error("Authorization malformed.")]
    Malformed,

    #[error("Unable to find the appropriate key.")]
    UnknownKey,

    #[error("Token expired.")]
    Expired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    IncorrectClaims,

    #[error("Unable to parse authentication token.")]
    Unparseable,

    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    PermissionDenied,

    #[error("Signing keys unavailable: {0}")]
    KeySetUnavailable(String),

    #[error("Token verification misconfigured: {0}")]
    Misconfigured(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::HeaderMissing
            | AuthError::NotBearer
            | AuthError::TokenMissing
            | AuthError::TooManyParts
            | AuthError::Malformed
            | AuthError::Expired
            | AuthError::IncorrectClaims => StatusCode::UNAUTHORIZED,
            AuthError::UnknownKey | AuthError::Unparseable | AuthError::PermissionsMissing => {
                StatusCode::BAD_REQUEST
            }
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
            AuthError::KeySetUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "authorization_header_missing",
            AuthError::NotBearer
            | AuthError::TokenMissing
            | AuthError::TooManyParts
            | AuthError::Malformed
            | AuthError::UnknownKey
            | AuthError::Unparseable => "invalid_header",
            AuthError::Expired => "token_expired",
            AuthError::IncorrectClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
            AuthError::KeySetUnavailable(_) => "key_set_unavailable",
            AuthError::Misconfigured(_) => "internal_error",
        }
    }

    /// Client-facing description. Server-side details are withheld.
    pub fn description(&self) -> String {
        match self {
            AuthError::KeySetUnavailable(_) => "Unable to fetch signing keys.".to_string(),
            AuthError::Misconfigured(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}
