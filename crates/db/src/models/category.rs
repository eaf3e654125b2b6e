//! Category entity model.

use std::collections::BTreeMap;

use quizbar_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Collapse categories into the `{ id: type }` map the API returns.
pub fn label_map(categories: Vec<Category>) -> BTreeMap<DbId, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
