//! Route definitions for the product resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /products       -> list
/// POST   /products       -> create_many
/// POST   /product        -> create
/// PUT    /product        -> update
/// GET    /product/{id}   -> get_by_id
/// PUT    /product/{id}   -> update_by_id
/// DELETE /product/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create_many))
        .route("/product", post(products::create).put(products::update))
        .route(
            "/product/{id}",
            get(products::get_by_id)
                .put(products::update_by_id)
                .delete(products::delete),
        )
}
