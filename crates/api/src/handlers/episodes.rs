//! Handlers for the `/episodes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sada_core::error::CoreError;
use sada_core::types::EpisodeId;

use sada_db::models::episode::{CreateEpisode, Episode, EpisodeWithSeries, UpdateEpisode};
use sada_db::repositories::EpisodeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/episodes
///
/// The parent series is supplied by `series_id`; a nonexistent series
/// surfaces the store's foreign-key fault (409).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.video_url.trim().is_empty() {
        return Err(AppError::BadRequest("video_url must not be empty".into()));
    }

    let episode = EpisodeRepo::create(&state.pool, &input).await?;

    tracing::info!(episode_id = %episode.id, series_id = episode.series_id, "Episode created");

    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /api/v1/episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EpisodeWithSeries>>> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EpisodeId>,
) -> AppResult<Json<EpisodeWithSeries>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: id.to_string(),
        }))?;
    Ok(Json(episode))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EpisodeId>,
    Json(input): Json<UpdateEpisode>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: id.to_string(),
        }))?;

    tracing::info!(episode_id = %id, "Episode updated");

    Ok(Json(episode))
}

/// DELETE /api/v1/episodes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EpisodeId>,
) -> AppResult<StatusCode> {
    let deleted = EpisodeRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(episode_id = %id, "Episode deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id: id.to_string(),
        }))
    }
}
