//! Drink recipe model and its text encoding.
//!
//! A recipe is persisted as a JSON string column. It is decoded whenever a
//! drink is projected and re-encoded on every write, so the stored text is
//! always the canonical list form even when a client sent a single object.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("Recipe text is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Recipe must contain at least one ingredient")]
    Empty,
}

/// One ingredient of a drink, with its share of the cup in parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// Public view of an ingredient. Part counts are not disclosed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSummary {
    pub name: String,
    pub color: String,
}

/// Ordered list of ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(pub Vec<Ingredient>);

/// Recipe as accepted in request bodies: a list, or a lone ingredient.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl From<RecipeInput> for Recipe {
    fn from(input: RecipeInput) -> Self {
        match input {
            RecipeInput::Many(items) => Recipe(items),
            RecipeInput::One(item) => Recipe(vec![item]),
        }
    }
}

impl Recipe {
    /// Decode a stored recipe column.
    pub fn from_text(text: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode for storage. Rejects an empty ingredient list.
    pub fn to_text(&self) -> Result<String, RecipeError> {
        if self.0.is_empty() {
            return Err(RecipeError::Empty);
        }
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn summary(&self) -> Vec<IngredientSummary> {
        self.0
            .iter()
            .map(|i| IngredientSummary {
                name: i.name.clone(),
                color: i.color.clone(),
            })
            .collect()
    }
}
