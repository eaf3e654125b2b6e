//! Repository for the `categories` table.

use quizbar_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Read-only access to trivia categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
