//! Route definitions for the category resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /categories      -> list
/// POST   /categories      -> create_many
/// POST   /category        -> create
/// PUT    /category        -> update
/// GET    /category/{id}   -> get_by_id
/// PUT    /category/{id}   -> update_by_id
/// DELETE /category/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list).post(categories::create_many),
        )
        .route("/category", post(categories::create).put(categories::update))
        .route(
            "/category/{id}",
            get(categories::get_by_id)
                .put(categories::update_by_id)
                .delete(categories::delete),
        )
}
