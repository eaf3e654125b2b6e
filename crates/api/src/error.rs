use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quizbar_core::error::CoreError;
use quizbar_core::recipe::RecipeError;
use serde_json::json;

use crate::auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Every failure keeps its cause so it can be logged, then collapses to one
/// of a small set of client-facing responses. Implements [`IntoResponse`] to
/// produce the `{ "success": false, "error": <status>, "message": ... }`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quizbar_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected bearer token or missing permission.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored or submitted recipe could not be encoded/decoded.
    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),

    /// A required field is missing or the body is not JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No resource (or no route) matches the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A well-formed request that cannot be carried out.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const MSG_BAD_REQUEST: &str = "bad request";
const MSG_NOT_FOUND: &str = "resource not found";
const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
const MSG_UNPROCESSABLE: &str = "unprocessable";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Auth(auth) => return auth_response(auth),
            AppError::Core(CoreError::NotFound { .. }) | AppError::NotFound(_) => {
                tracing::debug!(error = %self, "Not found");
                (StatusCode::NOT_FOUND, MSG_NOT_FOUND)
            }
            AppError::Core(CoreError::Validation(_)) | AppError::Unprocessable(_) => {
                tracing::info!(error = %self, "Unprocessable request");
                (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Recipe(err) => {
                tracing::warn!(error = %err, "Recipe rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
            }
            AppError::BadRequest(reason) => {
                tracing::info!(%reason, "Bad request");
                (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST)
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED),
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Auth failures keep the provider's status and add its `code`.
fn auth_response(auth: &AuthError) -> Response {
    let status = auth.status();
    if status.is_server_error() {
        tracing::error!(error = %auth, "Token verification unavailable");
    }
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "code": auth.code(),
        "message": auth.description(),
    });
    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else (constraint violations included) maps to 422; the
///   cause is logged, never returned.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // unique_violation, foreign_key_violation, not_null_violation, check_violation
                Some("23505" | "23503" | "23502" | "23514") => tracing::info!(
                    error = %db_err,
                    constraint = db_err.constraint().unwrap_or("unknown"),
                    "Constraint violation"
                ),
                _ => tracing::error!(error = %db_err, "Database error"),
            }
            (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
        }
    }
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the expected shape.
            JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
