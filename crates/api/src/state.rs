use std::sync::Arc;

use axum::extract::FromRef;
use quizbar_db::DbPool;

use crate::auth::TokenVerifier;

/// Shared state for the trivia service, available via `State<TriviaState>`.
#[derive(Clone, FromRef)]
pub struct TriviaState {
    /// Database connection pool.
    pub pool: DbPool,
}

/// Shared state for the coffee shop service.
///
/// Cheaply cloneable (the pool and verifier are reference-counted).
#[derive(Clone, FromRef)]
pub struct CoffeeState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Bearer token verifier for permission-gated routes.
    pub verifier: Arc<dyn TokenVerifier>,
}
