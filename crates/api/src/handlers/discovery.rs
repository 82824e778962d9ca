//! Handlers for the read-only discovery surface.
//!
//! Universal search, per-type search, the featured snapshot, recent
//! episodes, and category listing. These endpoints only ever see published
//! content; unpublished rows remain reachable through the CRUD surface.

use axum::extract::{Query, State};
use axum::Json;
use sada_core::discovery::{
    classify_target, clamp_from, clamp_size, featured_type_filter, half_size, page_window,
    SearchTarget, DEFAULT_SEARCH_TYPE, EPISODE_SCOPE, SERIES_SCOPE,
};
use sada_core::error::CoreError;

use sada_db::models::discovery::{
    CategoryList, FeaturedContent, FeaturedParams, Page, RecentEpisodesParams, SearchHit,
    SearchParams, SearchRequest, SeriesByTypeParams,
};
use sada_db::models::episode::EpisodeWithSeries;
use sada_db::models::series::SeriesWithEpisodes;
use sada_db::repositories::{EpisodeRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Combined search helper
// ---------------------------------------------------------------------------

/// Run the combined (series + episodes) search.
///
/// Each sub-search gets the same `query`/`from`/`type` and half the page
/// size (rounded up); both run concurrently and either failure fails the
/// whole request. Series hits come first in the merged list, and the merge
/// is re-sliced to `[from, from + size)` even though each sub-search
/// already applied `from` -- the contract's acknowledged approximation of
/// global pagination, kept as-is.
async fn search_all(pool: &sqlx::PgPool, req: &SearchRequest) -> AppResult<Page<SearchHit>> {
    let sub_req = SearchRequest {
        size: half_size(req.size),
        ..req.clone()
    };

    let ((series, series_total), (episodes, episode_total)) = tokio::try_join!(
        SeriesRepo::search(pool, &sub_req),
        EpisodeRepo::search(pool, &sub_req),
    )?;

    let mut combined: Vec<SearchHit> = series.into_iter().map(SearchHit::Series).collect();
    combined.extend(episodes.into_iter().map(SearchHit::Episode));

    Ok(Page {
        data: page_window(combined, req.from, req.size),
        total: series_total + episode_total,
        from: req.from,
        size: req.size,
    })
}

// ---------------------------------------------------------------------------
// Universal search
// ---------------------------------------------------------------------------

/// GET /api/v1/discovery/search
///
/// Routes by `type`: `episode` delegates to the episode search; `series`,
/// `podcast`, and `documentary` delegate to the series search; anything
/// else runs the combined search.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Page<SearchHit>>> {
    let req = SearchRequest::from_params(params, DEFAULT_SEARCH_TYPE);

    let page = match classify_target(&req.content_type) {
        SearchTarget::Episodes => {
            let (rows, total) = EpisodeRepo::search(&state.pool, &req).await?;
            Page {
                data: rows.into_iter().map(SearchHit::Episode).collect(),
                total,
                from: req.from,
                size: req.size,
            }
        }
        SearchTarget::Series => {
            let (rows, total) = SeriesRepo::search(&state.pool, &req).await?;
            Page {
                data: rows.into_iter().map(SearchHit::Series).collect(),
                total,
                from: req.from,
                size: req.size,
            }
        }
        SearchTarget::Combined => search_all(&state.pool, &req).await?,
    };

    tracing::debug!(
        query = %req.query,
        content_type = %req.content_type,
        total = page.total,
        returned = page.data.len(),
        "Search executed",
    );

    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// Per-type search
// ---------------------------------------------------------------------------

/// GET /api/v1/discovery/episodes/search
pub async fn search_episodes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Page<EpisodeWithSeries>>> {
    let req = SearchRequest::from_params(params, EPISODE_SCOPE);
    let (data, total) = EpisodeRepo::search(&state.pool, &req).await?;

    Ok(Json(Page {
        data,
        total,
        from: req.from,
        size: req.size,
    }))
}

/// GET /api/v1/discovery/series/search
pub async fn search_series(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Page<SeriesWithEpisodes>>> {
    let req = SearchRequest::from_params(params, SERIES_SCOPE);
    let (data, total) = SeriesRepo::search(&state.pool, &req).await?;

    Ok(Json(Page {
        data,
        total,
        from: req.from,
        size: req.size,
    }))
}

// ---------------------------------------------------------------------------
// Snapshots and listings
// ---------------------------------------------------------------------------

/// GET /api/v1/discovery/featured
///
/// Fixed-size snapshot: up to 10 featured series and 20 recent episodes,
/// optionally narrowed to one series type.
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> AppResult<Json<FeaturedContent>> {
    let type_filter = featured_type_filter(params.content_type.as_deref());

    let featured_series = SeriesRepo::featured(&state.pool, type_filter).await?;
    let recent_episodes = EpisodeRepo::recent(&state.pool, type_filter).await?;

    Ok(Json(FeaturedContent {
        featured_series,
        recent_episodes,
    }))
}

/// GET /api/v1/discovery/categories
pub async fn categories(State(state): State<AppState>) -> AppResult<Json<CategoryList>> {
    let categories = SeriesRepo::categories(&state.pool).await?;
    Ok(Json(CategoryList { categories }))
}

/// GET /api/v1/discovery/episodes/recent
///
/// Latest published episodes; always the first page (`from` is pinned to 0).
pub async fn recent_episodes(
    State(state): State<AppState>,
    Query(params): Query<RecentEpisodesParams>,
) -> AppResult<Json<Page<EpisodeWithSeries>>> {
    let req = SearchRequest {
        query: String::new(),
        from: 0,
        size: clamp_size(params.size),
        content_type: params
            .content_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| EPISODE_SCOPE.to_string()),
    };
    let (data, total) = EpisodeRepo::search(&state.pool, &req).await?;

    Ok(Json(Page {
        data,
        total,
        from: req.from,
        size: req.size,
    }))
}

/// GET /api/v1/discovery/series/by-type
///
/// Series of one concrete type. Unlike the search endpoints, `type` is
/// required here.
pub async fn series_by_type(
    State(state): State<AppState>,
    Query(params): Query<SeriesByTypeParams>,
) -> AppResult<Json<Page<SeriesWithEpisodes>>> {
    let content_type = params
        .content_type
        .filter(|t| !t.trim().is_empty())
        .ok_or(AppError::Core(CoreError::Validation(
            "type is required".into(),
        )))?;

    let req = SearchRequest {
        query: String::new(),
        from: clamp_from(params.from),
        size: clamp_size(params.size),
        content_type,
    };
    let (data, total) = SeriesRepo::search(&state.pool, &req).await?;

    Ok(Json(Page {
        data,
        total,
        from: req.from,
        size: req.size,
    }))
}
