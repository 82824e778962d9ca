//! Handlers for the `/series` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sada_core::error::CoreError;
use sada_core::types::DbId;
use serde::Deserialize;

use sada_db::models::episode::Episode;
use sada_db::models::series::{CreateSeries, Series, SeriesType, SeriesWithEpisodes, UpdateSeries};
use sada_db::repositories::{EpisodeRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the series list endpoint (`?type=`).
#[derive(Debug, Deserialize)]
pub struct SeriesListParams {
    #[serde(rename = "type")]
    pub series_type: Option<SeriesType>,
}

/// Query parameters for the nested episode listing (`?season=`).
#[derive(Debug, Deserialize)]
pub struct SeriesEpisodesParams {
    pub season: Option<i32>,
}

/// POST /api/v1/series
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeries>,
) -> AppResult<(StatusCode, Json<Series>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.category.trim().is_empty() {
        return Err(AppError::BadRequest("category must not be empty".into()));
    }

    let series = SeriesRepo::create(&state.pool, &input).await?;

    tracing::info!(series_id = series.id, "Series created");

    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /api/v1/series
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SeriesListParams>,
) -> AppResult<Json<Vec<SeriesWithEpisodes>>> {
    let series = SeriesRepo::list(&state.pool, params.series_type).await?;
    Ok(Json(series))
}

/// GET /api/v1/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SeriesWithEpisodes>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: id.to_string(),
        }))?;
    Ok(Json(series))
}

/// PUT /api/v1/series/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSeries>,
) -> AppResult<Json<Series>> {
    let series = SeriesRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: id.to_string(),
        }))?;

    tracing::info!(series_id = id, "Series updated");

    Ok(Json(series))
}

/// DELETE /api/v1/series/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SeriesRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(series_id = id, "Series deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: id.to_string(),
        }))
    }
}

/// GET /api/v1/series/{series_id}/episodes
///
/// Episodes of one series ordered by episode number; an unknown series id
/// yields an empty list, not a 404.
pub async fn list_episodes(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
    Query(params): Query<SeriesEpisodesParams>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list_by_series(&state.pool, series_id, params.season).await?;
    Ok(Json(episodes))
}
