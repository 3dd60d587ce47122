pub mod categories;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                 list (GET), batch create (POST)
/// /product                  create (POST), update by spec (PUT)
/// /product/{id}             get, update, delete
///
/// /categories               list (GET), batch create (POST)
/// /category                 create (POST), update by spec (PUT)
/// /category/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(products::router())
        .merge(categories::router())
}
