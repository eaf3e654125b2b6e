//! Bearer token verification against the identity provider.
//!
//! - [`error`] -- the provider-style `AuthError` taxonomy.
//! - [`jwt`] -- `Claims`, the [`TokenVerifier`] seam, and the HS256 verifier.
//! - [`jwks`] -- RS256 verifier backed by a TTL-cached remote key set.

pub mod error;
pub mod jwks;
pub mod jwt;

use std::sync::Arc;

pub use error::AuthError;
pub use jwt::{Claims, TokenVerifier};

use crate::config::AuthConfig;

/// Build the verifier selected by configuration.
///
/// A shared secret wins over a provider domain so local development can run
/// without network access to the provider.
pub fn verifier_from_config(config: &AuthConfig) -> Result<Arc<dyn TokenVerifier>, AuthError> {
    if let Some(secret) = &config.shared_secret {
        tracing::warn!("Using shared-secret token verification; do not use in production");
        return Ok(Arc::new(jwt::SharedSecretVerifier::new(
            secret,
            &config.audience,
            &config.issuer,
        )));
    }

    let jwks_url = config.jwks_url().ok_or_else(|| {
        AuthError::Misconfigured("neither AUTH_SHARED_SECRET nor AUTH0_DOMAIN is set".into())
    })?;

    let verifier = jwks::JwksVerifier::new(jwks::JwksSettings {
        url: jwks_url,
        audience: config.audience.clone(),
        issuer: config.issuer.clone(),
        ttl: std::time::Duration::from_secs(config.jwks_cache_ttl_secs),
    })?;
    Ok(Arc::new(verifier))
}
