//! Route definitions for the read-only discovery surface.
//!
//! Mounted at `/discovery` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::discovery;
use crate::state::AppState;

/// Discovery routes mounted at `/discovery`.
///
/// ```text
/// GET /search              -> search (universal)
/// GET /episodes/search     -> search_episodes
/// GET /episodes/recent     -> recent_episodes
/// GET /series/search       -> search_series
/// GET /series/by-type      -> series_by_type
/// GET /featured            -> featured
/// GET /categories          -> categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(discovery::search))
        .route("/episodes/search", get(discovery::search_episodes))
        .route("/episodes/recent", get(discovery::recent_episodes))
        .route("/series/search", get(discovery::search_series))
        .route("/series/by-type", get(discovery::series_by_type))
        .route("/featured", get(discovery::featured))
        .route("/categories", get(discovery::categories))
}
