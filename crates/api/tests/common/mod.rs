#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use quizbar_api::auth::jwt::SharedSecretVerifier;
use quizbar_api::config::{CorsOrigins, ServerConfig};
use quizbar_api::router::{build_coffee_router, build_trivia_router};
use quizbar_api::state::{CoffeeState, TriviaState};

pub const TEST_ORIGIN: &str = "http://localhost:8100";
pub const SECRET: &str = "integration-secret-long-enough-for-hs256";
pub const AUDIENCE: &str = "drinks";
pub const ISSUER: &str = "https://coffee.test/";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec![TEST_ORIGIN.to_string()]),
        request_timeout_secs: 30,
    }
}

/// A pool that never connects unless a query runs. For requests that are
/// rejected before reaching the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/quizbar_unused")
        .expect("lazy pool should build")
}

/// The trivia app with the production middleware stack.
pub fn build_trivia_app(pool: PgPool) -> Router {
    let state = TriviaState { pool };
    build_trivia_router(state, &test_config())
}

/// The coffee shop app, verifying HS256 tokens signed with [`SECRET`].
pub fn build_coffee_app(pool: PgPool) -> Router {
    let state = CoffeeState {
        pool,
        verifier: Arc::new(SharedSecretVerifier::new(SECRET, AUDIENCE, ISSUER)),
    };
    build_coffee_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn sign_claims(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn one_hour_from_now() -> i64 {
    (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp()
}

/// A valid token granting `permissions`.
pub fn token_with(permissions: &[&str]) -> String {
    sign_claims(&json!({
        "sub": "auth0|manager",
        "aud": AUDIENCE,
        "iss": ISSUER,
        "exp": one_hour_from_now(),
        "permissions": permissions,
    }))
}

/// A manager token carrying every drink permission.
pub fn manager_token() -> String {
    token_with(&[
        "get:drinks-detail",
        "post:drinks",
        "patch:drinks",
        "delete:drinks",
    ])
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send_json_auth(
    app: Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a failure envelope with the given status.
pub async fn assert_envelope(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["message"], message);
}
