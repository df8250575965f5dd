//! Route definitions for the person resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Person routes mounted at `/persons`.
///
/// ```text
/// GET    /        -> list_persons
/// POST   /        -> create_person
/// GET    /{id}    -> get_person
/// PATCH  /{id}    -> update_person
/// DELETE /{id}    -> delete_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person::list_persons).post(person::create_person))
        .route(
            "/{id}",
            get(person::get_person)
                .patch(person::update_person)
                .delete(person::delete_person),
        )
}
