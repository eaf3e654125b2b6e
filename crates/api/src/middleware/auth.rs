//! Bearer token extraction from the `Authorization` header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::AuthError;
use crate::error::AppError;

/// Raw bearer token taken from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively. The token itself is not
/// validated here.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Split an `Authorization` header value into its bearer token.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::HeaderMissing)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [] => Err(AuthError::HeaderMissing),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::NotBearer),
        [_] => Err(AuthError::TokenMissing),
        [_, token] => Ok(*token),
        _ => Err(AuthError::TooManyParts),
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                tracing::warn!("Authorization header contains non-UTF-8 bytes");
                AuthError::Malformed
            })?),
            None => None,
        };

        let token = parse_bearer(header).inspect_err(|err| {
            tracing::debug!(code = err.code(), "Rejected Authorization header");
        })?;

        Ok(BearerToken(token.to_string()))
    }
}
