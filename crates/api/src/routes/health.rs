use axum::extract::{FromRef, State};
use axum::{routing::get, Json, Router};
use quizbar_db::DbPool;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

async fn health_check(State(pool): State<DbPool>) -> Json<HealthResponse> {
    let db_healthy = match quizbar_db::health_check(&pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `GET /health` for either service.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    DbPool: FromRef<S>,
{
    Router::new().route("/health", get(health_check))
}
