pub mod health;
pub mod person;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /persons                list, create
/// /persons/{id}           get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/persons", person::router())
}
