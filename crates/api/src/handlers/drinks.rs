//! Handlers for the coffee shop menu.
//!
//! `GET /drinks` is public and returns summaries. Every other route requires
//! a bearer token carrying the matching permission, enforced by the
//! [`Authorized`] extractor before the body is read.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use quizbar_core::error::CoreError;
use quizbar_core::recipe::Recipe;
use quizbar_core::types::DbId;
use quizbar_db::models::drink::{CreateDrink, Drink, DrinkDetail, DrinkSummary, UpdateDrink};
use quizbar_db::repositories::DrinkRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::permission::{
    Authorized, DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks,
};
use crate::response::Success;
use crate::state::CoffeeState;

#[derive(Serialize)]
struct DrinkList<T: Serialize> {
    drinks: Vec<T>,
}

#[derive(Serialize)]
struct DrinkDeleted {
    delete: DbId,
}

fn drink_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Drink", id })
}

/// GET /drinks
pub async fn list_drinks(State(state): State<CoffeeState>) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list_all(&state.pool).await?;
    let drinks = drinks
        .iter()
        .map(Drink::summary)
        .collect::<Result<Vec<DrinkSummary>, _>>()?;

    Ok(Json(Success::new(DrinkList { drinks })))
}

/// GET /drinks-detail
pub async fn list_drink_details(
    _auth: Authorized<GetDrinksDetail>,
    State(state): State<CoffeeState>,
) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list_all(&state.pool).await?;
    let drinks = drinks
        .iter()
        .map(Drink::detail)
        .collect::<Result<Vec<DrinkDetail>, _>>()?;

    Ok(Json(Success::new(DrinkList { drinks })))
}

/// POST /drinks
///
/// The recipe may be sent as one ingredient object or a list; it is stored
/// as a list either way. A duplicate title is rejected by the unique
/// constraint.
pub async fn create_drink(
    _auth: Authorized<PostDrinks>,
    State(state): State<CoffeeState>,
    AppJson(input): AppJson<CreateDrink>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let recipe_text = Recipe::from(input.recipe).to_text()?;
    let drink = DrinkRepo::create(&state.pool, &input.title, &recipe_text).await?;

    tracing::info!(drink_id = drink.id, title = %drink.title, "Drink created");

    Ok(Json(Success::new(DrinkList {
        drinks: vec![drink.detail()?],
    })))
}

/// PATCH /drinks/{id}
///
/// Absent fields are left unchanged.
pub async fn update_drink(
    _auth: Authorized<PatchDrinks>,
    State(state): State<CoffeeState>,
    AppPath(drink_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateDrink>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let recipe_text = input
        .recipe
        .map(|r| Recipe::from(r).to_text())
        .transpose()?;

    let drink = DrinkRepo::update(
        &state.pool,
        drink_id,
        input.title.as_deref(),
        recipe_text.as_deref(),
    )
    .await?
    .ok_or_else(|| drink_not_found(drink_id))?;

    tracing::info!(drink_id, "Drink updated");

    Ok(Json(Success::new(DrinkList {
        drinks: vec![drink.detail()?],
    })))
}

/// DELETE /drinks/{id}
pub async fn delete_drink(
    _auth: Authorized<DeleteDrinks>,
    State(state): State<CoffeeState>,
    AppPath(drink_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DrinkRepo::delete(&state.pool, drink_id).await?;
    if !deleted {
        return Err(drink_not_found(drink_id));
    }

    tracing::info!(drink_id, "Drink deleted");

    Ok(Json(Success::new(DrinkDeleted { delete: drink_id })))
}
