//! Route definitions for the trivia service.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{categories, questions, quizzes};
use crate::state::TriviaState;

/// ```text
/// GET    /categories                  -> list_categories
/// GET    /categories/{id}/questions   -> list_category_questions
/// GET    /questions?page=N            -> list_questions
/// POST   /questions                   -> create_question
/// DELETE /questions/{id}              -> delete_question
/// POST   /questions/search            -> search_questions
/// POST   /quizzes                     -> next_quiz_question
/// ```
pub fn router() -> Router<TriviaState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::list_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_quiz_question))
}
