pub mod discovery;
pub mod episodes;
pub mod health;
pub mod series;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /series                              list, create
/// /series/{id}                         get, update, delete
/// /series/{series_id}/episodes         episodes of a series (?season=)
///
/// /episodes                            list, create
/// /episodes/{id}                       get, update, delete
///
/// /discovery/search                    universal search
/// /discovery/episodes/search           episode search
/// /discovery/episodes/recent           recent episodes snapshot
/// /discovery/series/search             series search
/// /discovery/series/by-type            series filtered by type
/// /discovery/featured                  featured series + recent episodes
/// /discovery/categories                distinct category names
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Content management (CRUD).
        .nest("/series", series::router())
        .nest("/episodes", episodes::router())
        // Read-only discovery surface.
        .nest("/discovery", discovery::router())
}
