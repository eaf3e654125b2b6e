use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use quizbar_core::quiz::{pick_next, QuizScope};
use quizbar_db::models::question::{Question, QuizRequest};
use quizbar_db::repositories::QuestionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::TriviaState;

#[derive(Serialize)]
struct NextQuestion {
    question: Option<Question>,
}

/// POST /quizzes
///
/// A random in-scope question the client has not been served yet, or
/// `null` once the scope is exhausted.
pub async fn next_quiz_question(
    State(state): State<TriviaState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let scope = QuizScope::from_category_id(input.quiz_category.id);
    let previous = input.previous_questions.unwrap_or_default();

    let in_scope = QuestionRepo::list_for_quiz(&state.pool, scope).await?;
    let question = pick_next(&in_scope, &previous, &mut rand::rng()).cloned();

    tracing::debug!(
        ?scope,
        served = previous.len(),
        exhausted = question.is_none(),
        "Quiz question selected"
    );

    Ok(Json(Success::new(NextQuestion { question })))
}
