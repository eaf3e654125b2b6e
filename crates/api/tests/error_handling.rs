//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use quizbar_api::auth::AuthError;
use quizbar_api::error::AppError;
use quizbar_core::error::CoreError;
use quizbar_core::recipe::RecipeError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn core_not_found_returns_404_envelope() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Question",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        serde_json::json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn bad_request_hides_reason() {
    let (status, json) =
        error_to_response(AppError::BadRequest("searchTerm is required".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad request");
}

#[tokio::test]
async fn validation_error_returns_422() {
    let err = AppError::Core(CoreError::Validation("difficulty: range".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn method_not_allowed_returns_405() {
    let (status, json) = error_to_response(AppError::MethodNotAllowed).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["message"], "method not allowed");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_database_errors_return_422_without_detail() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn empty_recipe_returns_422() {
    let (status, _) = error_to_response(AppError::Recipe(RecipeError::Empty)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn auth_errors_carry_provider_code_and_description() {
    let (status, json) = error_to_response(AppError::Auth(AuthError::PermissionDenied)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 403);
    assert_eq!(json["code"], "unauthorized");
    assert_eq!(json["message"], "Permission not found.");
}

#[tokio::test]
async fn key_set_outage_is_sanitized() {
    let err = AppError::Auth(AuthError::KeySetUnavailable(
        "connect error: 10.0.0.3:443".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "key_set_unavailable");
    assert!(!json["message"].as_str().unwrap().contains("10.0.0.3"));
}

#[tokio::test]
async fn auth_misconfiguration_is_500_without_detail() {
    let err = AppError::Auth(AuthError::Misconfigured("AUTH0_DOMAIN unset".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], 500);
    assert_eq!(json["code"], "internal_error");
    assert_eq!(json["message"], "An internal error occurred");
}
