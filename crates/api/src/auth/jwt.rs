//! Access-token claims, the verifier seam, and HS256 verification.
//!
//! Tokens are issued by an external identity provider. This service never
//! signs tokens; it only validates signature, expiry, audience and issuer,
//! then hands the decoded [`Claims`] to the permission check.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Claims this service reads from an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the provider's user id.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Permission strings granted to the subject. Absent when the provider
    /// is not configured to add permissions to access tokens.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Validates a raw bearer token and returns its claims.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// Validation rules shared by every verifier: expiry, audience and issuer
/// are all required.
pub(crate) fn build_validation(algorithm: Algorithm, audience: &str, issuer: &str) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.set_audience(&[audience]);
    validation.set_issuer(&[issuer]);
    validation.set_required_spec_claims(&["exp", "aud", "iss"]);
    validation
}

/// Map a decode failure onto the provider-style taxonomy.
pub(crate) fn classify_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
            AuthError::IncorrectClaims
        }
        _ => {
            tracing::debug!(error = %err, "Token decode failed");
            AuthError::Unparseable
        }
    }
}

/// HS256 verifier with a locally configured secret.
pub struct SharedSecretVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SharedSecretVerifier {
    pub fn new(secret: &str, audience: &str, issuer: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: build_validation(Algorithm::HS256, audience, issuer),
        }
    }
}

#[async_trait]
impl TokenVerifier for SharedSecretVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode_header(token).map_err(|_| AuthError::Malformed)?;
        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(classify_decode_error)?;
        Ok(data.claims)
    }
}
