//! Question entity model and DTOs.

use quizbar_core::quiz::Identified;
use quizbar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::lenient;

/// Lowest accepted difficulty rating.
pub const MIN_DIFFICULTY: i32 = 1;
/// Highest accepted difficulty rating.
pub const MAX_DIFFICULTY: i32 = 5;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl Identified for Question {
    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[validate(range(min = MIN_DIFFICULTY, max = MAX_DIFFICULTY))]
    #[serde(deserialize_with = "lenient::i32")]
    pub difficulty: i32,
    #[serde(deserialize_with = "lenient::i64")]
    pub category: DbId,
}

/// Body of `POST /questions/search`. The term is optional at the type level
/// so a missing term can be reported as a bad request rather than a decode
/// failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestions {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Category reference sent by the quiz client. `id == 0` selects all.
///
/// Clients also send the category's `type` label; only the id is used.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: DbId,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<DbId>>,
    pub quiz_category: QuizCategory,
}
