//! RS256 verification against the identity provider's published key set.
//!
//! The key set is fetched over HTTPS and cached for a fixed TTL. A token
//! whose `kid` is missing from a fresh cache triggers one refetch (keys are
//! rotated by the provider), rate-limited by [`MIN_REFETCH_INTERVAL`].
//! Concurrent refetches are coalesced behind a single lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};

use super::error::AuthError;
use super::jwt::{build_validation, classify_decode_error, Claims, TokenVerifier};

/// Shortest gap between two fetches triggered by unknown key ids.
const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(10);

/// Timeout for a single key set fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to fetch keys and what to expect inside the tokens.
#[derive(Debug, Clone)]
pub struct JwksSettings {
    pub url: String,
    pub audience: String,
    pub issuer: String,
    pub ttl: Duration,
}

/// Outcome of consulting the cached key set.
enum Lookup {
    Hit(DecodingKey),
    /// The set is within its TTL but has no such key id.
    Miss { age: Duration },
    /// Nothing cached, or the cached set outlived its TTL.
    Stale,
}

struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// JWKS response format (RFC 7517).
#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: Option<String>,
    kty: String,
    #[serde(rename = "use")]
    key_use: Option<String>,
    n: Option<String>,
    e: Option<String>,
}

/// Verifier for provider-issued RS256 access tokens.
pub struct JwksVerifier {
    settings: JwksSettings,
    validation: Validation,
    client: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
    refresh_lock: Mutex<()>,
}

impl JwksVerifier {
    /// Create a verifier. Keys are fetched lazily on first use.
    pub fn new(settings: JwksSettings) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AuthError::Misconfigured(format!("HTTP client: {e}")))?;

        let validation = build_validation(Algorithm::RS256, &settings.audience, &settings.issuer);

        Ok(Self {
            settings,
            validation,
            client,
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Look up a decoding key, refetching the key set when needed.
    ///
    /// An expired key set is always refetched. A fresh set that lacks `kid`
    /// is refetched at most once per [`MIN_REFETCH_INTERVAL`].
    async fn key_for(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Lookup::Hit(key) = self.lookup(kid).await {
            return Ok(key);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another request may have refreshed while we waited.
        match self.lookup(kid).await {
            Lookup::Hit(key) => return Ok(key),
            Lookup::Miss { age } if age < MIN_REFETCH_INTERVAL => {
                tracing::debug!(%kid, "Unknown key id; key set fetched too recently to retry");
                return Err(AuthError::UnknownKey);
            }
            Lookup::Miss { .. } | Lookup::Stale => {}
        }

        let keys = self.fetch_keys().await?;
        let found = keys.get(kid).cloned();
        *self.cache.write().await = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });

        found.ok_or(AuthError::UnknownKey)
    }

    async fn lookup(&self, kid: &str) -> Lookup {
        let cache = self.cache.read().await;
        match cache.as_ref() {
            Some(entry) if entry.fetched_at.elapsed() < self.settings.ttl => {
                match entry.keys.get(kid) {
                    Some(key) => Lookup::Hit(key.clone()),
                    None => Lookup::Miss {
                        age: entry.fetched_at.elapsed(),
                    },
                }
            }
            _ => Lookup::Stale,
        }
    }

    async fn fetch_keys(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        tracing::debug!(url = %self.settings.url, "Fetching JWKS keys");

        let response = self
            .client
            .get(&self.settings.url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %self.settings.url, error = %e, "JWKS fetch failed");
                AuthError::KeySetUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(url = %self.settings.url, %status, "JWKS endpoint returned error");
            return Err(AuthError::KeySetUnavailable(format!(
                "JWKS endpoint returned {status}"
            )));
        }

        let set: JwkSet = response
            .json()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("invalid JWKS body: {e}")))?;

        let keys = signing_keys(set);
        tracing::debug!(count = keys.len(), "JWKS keys refreshed");
        Ok(keys)
    }

    #[cfg(test)]
    fn with_cached_keys(settings: JwksSettings, keys: HashMap<String, DecodingKey>) -> Self {
        Self::with_keys_fetched_at(settings, keys, Instant::now())
    }

    #[cfg(test)]
    fn with_keys_fetched_at(
        settings: JwksSettings,
        keys: HashMap<String, DecodingKey>,
        fetched_at: Instant,
    ) -> Self {
        let verifier = Self::new(settings).expect("client builds");
        *verifier.cache.try_write().expect("uncontended") = Some(CachedKeys { keys, fetched_at });
        verifier
    }
}

/// Keep RSA signing keys that carry a key id and both public components.
fn signing_keys(set: JwkSet) -> HashMap<String, DecodingKey> {
    let mut keys = HashMap::new();
    for jwk in set.keys {
        if jwk.kty != "RSA" || jwk.key_use.as_deref().is_some_and(|u| u != "sig") {
            continue;
        }
        let (Some(kid), Some(n), Some(e)) = (jwk.kid, jwk.n, jwk.e) else {
            continue;
        };
        match DecodingKey::from_rsa_components(&n, &e) {
            Ok(key) => {
                keys.insert(kid, key);
            }
            Err(err) => tracing::warn!(%kid, error = %err, "Skipping unparseable JWKS key"),
        }
    }
    keys
}

#[async_trait]
impl TokenVerifier for JwksVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::Malformed)?;
        let kid = header.kid.ok_or(AuthError::Malformed)?;
        let key = self.key_for(&kid).await?;

        let data = decode::<Claims>(token, &key, &self.validation).map_err(classify_decode_error)?;
        Ok(data.claims)
    }
}
