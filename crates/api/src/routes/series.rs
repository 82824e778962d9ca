//! Route definitions for the `/series` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::series;
use crate::state::AppState;

/// Routes mounted at `/series`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{series_id}/episodes    -> list_episodes (?season=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(series::list).post(series::create))
        .route(
            "/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
        .route("/{series_id}/episodes", get(series::list_episodes))
}
