//! Handlers for trivia questions: paged listing, creation, deletion and
//! search.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use quizbar_core::error::CoreError;
use quizbar_core::pagination::PageWindow;
use quizbar_core::types::DbId;
use quizbar_db::models::category::label_map;
use quizbar_db::models::question::{CreateQuestion, Question, SearchQuestions};
use quizbar_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::Success;
use crate::state::TriviaState;

#[derive(Serialize)]
struct QuestionPage {
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<DbId, String>,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct SearchResults {
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: Option<String>,
}

#[derive(Serialize)]
struct Created {
    created: DbId,
}

#[derive(Serialize)]
struct Deleted {
    deleted: DbId,
}

/// GET /questions?page=N
///
/// Ten questions per page, ordered by id. A page with no questions is a 404.
pub async fn list_questions(
    State(state): State<TriviaState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page();
    let questions = QuestionRepo::list_page(&state.pool, PageWindow::for_page(page)).await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!("no questions on page {page}")));
    }

    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(Success::new(QuestionPage {
        questions,
        total_questions,
        categories: label_map(categories),
        current_category: None,
    })))
}

/// POST /questions
pub async fn create_question(
    State(state): State<TriviaState>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(question_id = question.id, category = question.category, "Question created");

    Ok(Json(Success::new(Created {
        created: question.id,
    })))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuestionRepo::delete(&state.pool, question_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }));
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(Success::new(Deleted {
        deleted: question_id,
    })))
}

/// POST /questions/search
///
/// Case-insensitive substring match on question text. Not paged.
pub async fn search_questions(
    State(state): State<TriviaState>,
    AppJson(input): AppJson<SearchQuestions>,
) -> AppResult<impl IntoResponse> {
    let term = input
        .search_term
        .ok_or_else(|| AppError::BadRequest("searchTerm is required".into()))?;

    let questions = QuestionRepo::search(&state.pool, &term).await?;

    Ok(Json(Success::new(SearchResults {
        total_questions: questions.len(),
        questions,
        current_category: None,
    })))
}
