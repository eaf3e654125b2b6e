/// Default port for the trivia service.
pub const DEFAULT_TRIVIA_PORT: u16 = 5000;
/// Default port for the coffee shop service.
pub const DEFAULT_COFFEE_PORT: u16 = 5001;

/// Default time-to-live for a fetched identity provider key set.
const DEFAULT_JWKS_CACHE_TTL_SECS: u64 = 600;

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` -- any origin, without credentials.
    Any,
    /// An explicit allow-list; credentials are permitted.
    List(Vec<String>),
}

/// Parse the `CORS_ORIGINS` value: `*` or a comma-separated origin list.
pub fn parse_cors_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default depends on the service).
    pub port: u16,
    /// Allowed CORS origins from `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default          |
    /// |------------------------|------------------|
    /// | `HOST`                 | `0.0.0.0`        |
    /// | `PORT`                 | `default_port`   |
    /// | `CORS_ORIGINS`         | `*`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`             |
    pub fn from_env(default_port: u16) -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| default_port.to_string())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins =
            parse_cors_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Identity provider settings for the coffee shop service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Provider tenant domain, e.g. `example.us.auth0.com`.
    pub domain: Option<String>,
    /// Expected `aud` claim.
    pub audience: String,
    /// Expected `iss` claim.
    pub issuer: String,
    /// How long a fetched key set is trusted before refetching.
    pub jwks_cache_ttl_secs: u64,
    /// HS256 secret for local development; takes precedence over `domain`.
    pub shared_secret: Option<String>,
}

impl AuthConfig {
    /// Load identity provider configuration.
    ///
    /// | Env Var               | Required | Default                  |
    /// |-----------------------|----------|--------------------------|
    /// | `API_AUDIENCE`        | **yes**  | --                       |
    /// | `AUTH0_DOMAIN`        | no       | --                       |
    /// | `AUTH_ISSUER`         | no       | `https://{AUTH0_DOMAIN}/`|
    /// | `JWKS_CACHE_TTL_SECS` | no       | `600`                    |
    /// | `AUTH_SHARED_SECRET`  | no       | --                       |
    ///
    /// # Panics
    ///
    /// Panics if `API_AUDIENCE` is missing, or if neither `AUTH0_DOMAIN`
    /// nor `AUTH_ISSUER` is set.
    pub fn from_env() -> Self {
        let audience =
            std::env::var("API_AUDIENCE").expect("API_AUDIENCE must be set in the environment");

        let domain = std::env::var("AUTH0_DOMAIN").ok().filter(|d| !d.is_empty());

        let issuer = std::env::var("AUTH_ISSUER")
            .ok()
            .filter(|i| !i.is_empty())
            .or_else(|| domain.as_deref().map(issuer_for_domain))
            .expect("AUTH0_DOMAIN or AUTH_ISSUER must be set");

        let jwks_cache_ttl_secs: u64 = std::env::var("JWKS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_JWKS_CACHE_TTL_SECS.to_string())
            .parse()
            .expect("JWKS_CACHE_TTL_SECS must be a valid u64");

        let shared_secret = std::env::var("AUTH_SHARED_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        Self {
            domain,
            audience,
            issuer,
            jwks_cache_ttl_secs,
            shared_secret,
        }
    }

    /// The provider's published key set URL, if a domain is configured.
    pub fn jwks_url(&self) -> Option<String> {
        self.domain
            .as_deref()
            .map(|d| format!("https://{d}/.well-known/jwks.json"))
    }
}

fn issuer_for_domain(domain: &str) -> String {
    format!("https://{domain}/")
}
