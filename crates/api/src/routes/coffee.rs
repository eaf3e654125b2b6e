//! Route definitions for the coffee shop service.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drinks;
use crate::state::CoffeeState;

/// ```text
/// GET    /drinks           -> list_drinks (public)
/// GET    /drinks-detail    -> list_drink_details (get:drinks-detail)
/// POST   /drinks           -> create_drink (post:drinks)
/// PATCH  /drinks/{id}      -> update_drink (patch:drinks)
/// DELETE /drinks/{id}      -> delete_drink (delete:drinks)
/// ```
pub fn router() -> Router<CoffeeState> {
    Router::new()
        .route("/drinks", get(drinks::list_drinks).post(drinks::create_drink))
        .route("/drinks-detail", get(drinks::list_drink_details))
        .route(
            "/drinks/{id}",
            patch(drinks::update_drink).delete(drinks::delete_drink),
        )
}
