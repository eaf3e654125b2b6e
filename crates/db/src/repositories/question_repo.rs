//! Repository for the `questions` table.
//!
//! Provides creation, deletion, id-ordered and paged listing, category filtering,
//! case-insensitive substring search, and quiz scoping.

use quizbar_core::pagination::PageWindow;
use quizbar_core::quiz::QuizScope;
use quizbar_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {QUESTION_COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Every question, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// One page of the id-ordered question list.
    pub async fn list_page(pool: &PgPool, window: PageWindow) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Questions belonging to one category, ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Questions a quiz may draw from.
    pub async fn list_for_quiz(pool: &PgPool, scope: QuizScope) -> Result<Vec<Question>, sqlx::Error> {
        match scope {
            QuizScope::All => Self::list_all(pool).await,
            QuizScope::Category(id) => Self::list_by_category(pool, id).await,
        }
    }

    /// Case-insensitive substring match on question text, ordered by id.
    ///
    /// LIKE metacharacters in `term` are escaped so the term matches literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let query = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `\`, `%` and `_` for use inside a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
