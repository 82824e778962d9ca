//! Route definitions for the `/episodes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::episodes;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episodes::list).post(episodes::create))
        .route(
            "/{id}",
            get(episodes::get_by_id)
                .put(episodes::update)
                .delete(episodes::delete),
        )
}
