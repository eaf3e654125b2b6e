//! Handlers for trivia categories.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use quizbar_core::error::CoreError;
use quizbar_core::types::DbId;
use quizbar_db::models::category::label_map;
use quizbar_db::models::question::Question;
use quizbar_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::Success;
use crate::state::TriviaState;

#[derive(Serialize)]
struct CategoryMap {
    categories: BTreeMap<DbId, String>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: String,
}

/// GET /categories
///
/// All categories as an `{id: type}` map.
pub async fn list_categories(State(state): State<TriviaState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(Success::new(CategoryMap {
        categories: label_map(categories),
    })))
}

/// GET /categories/{id}/questions
pub async fn list_category_questions(
    State(state): State<TriviaState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let questions = QuestionRepo::list_by_category(&state.pool, category_id).await?;

    Ok(Json(Success::new(CategoryQuestions {
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    })))
}
