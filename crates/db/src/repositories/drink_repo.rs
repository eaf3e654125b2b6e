//! Repository for the `drinks` table.
//!
//! Recipes arrive here already encoded; see `quizbar_core::recipe`.

use quizbar_core::types::DbId;
use sqlx::PgPool;

use crate::models::drink::Drink;

/// Column list for `drinks` queries.
const DRINK_COLUMNS: &str = "id, title, recipe";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// All drinks ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {DRINK_COLUMNS} FROM drinks ORDER BY id");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Insert a drink. Fails with a unique violation on a duplicate title.
    pub async fn create(pool: &PgPool, title: &str, recipe: &str) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {DRINK_COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(title)
            .bind(recipe)
            .fetch_one(pool)
            .await
    }

    /// Update title and/or encoded recipe; `None` keeps the current value.
    ///
    /// Returns `None` if no drink with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        recipe: Option<&str>,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET \
                 title = COALESCE($2, title), \
                 recipe = COALESCE($3, recipe) \
             WHERE id = $1 \
             RETURNING {DRINK_COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(title)
            .bind(recipe)
            .fetch_optional(pool)
            .await
    }

    /// Delete a drink by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
