//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Page selector for the question listing (`?page=`).
///
/// A missing or non-integer value selects page 1.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "integer_or_none")]
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

fn integer_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}
