//! Drink entity model, projections, and DTOs.

use quizbar_core::recipe::{IngredientSummary, Recipe, RecipeError, RecipeInput};
use quizbar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Longest title the `drinks.title` column accepts.
pub const MAX_TITLE_LEN: u64 = 80;

/// A row from the `drinks` table. `recipe` holds the encoded ingredient list.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: String,
}

/// Public projection: ingredient names and colors only.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkSummary {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

/// Full projection including part counts.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkDetail {
    pub id: DbId,
    pub title: String,
    pub recipe: Recipe,
}

impl Drink {
    pub fn decoded_recipe(&self) -> Result<Recipe, RecipeError> {
        Recipe::from_text(&self.recipe)
    }

    pub fn summary(&self) -> Result<DrinkSummary, RecipeError> {
        Ok(DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self.decoded_recipe()?.summary(),
        })
    }

    pub fn detail(&self) -> Result<DrinkDetail, RecipeError> {
        Ok(DrinkDetail {
            id: self.id,
            title: self.title.clone(),
            recipe: self.decoded_recipe()?,
        })
    }
}

/// DTO for creating a new drink.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrink {
    #[validate(length(min = 1, max = MAX_TITLE_LEN))]
    pub title: String,
    pub recipe: RecipeInput,
}

/// DTO for patching a drink. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDrink {
    #[validate(length(min = 1, max = MAX_TITLE_LEN))]
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}
