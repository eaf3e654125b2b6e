//! PostgreSQL persistence for the trivia and coffee shop services.
//!
//! Each service owns its own database; the schemas are migrated separately
//! with [`run_trivia_migrations`] and [`run_coffee_migrations`].

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

static TRIVIA_MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations/trivia");
static COFFEE_MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations/coffee");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the `categories` / `questions` schema.
pub async fn run_trivia_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    TRIVIA_MIGRATOR.run(pool).await?;
    tracing::debug!(count = TRIVIA_MIGRATOR.iter().count(), "Trivia migrations applied");
    Ok(())
}

/// Apply the `drinks` schema.
pub async fn run_coffee_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    COFFEE_MIGRATOR.run(pool).await?;
    tracing::debug!(count = COFFEE_MIGRATOR.iter().count(), "Coffee migrations applied");
    Ok(())
}
